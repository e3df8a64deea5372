//! Carry and borrow propagation, one column at a time.

use super::{BorrowStep, CarryStep, Step, Trace};
use crate::binary;
use crate::operation::{Operation, Outcome};

/// Columns walked for `a` and `b`: one past the longer operand, so the last
/// carry or borrow lands inside the trace.
fn ripple_width(a: u32, b: u32) -> usize {
    binary::bit_length(a).max(binary::bit_length(b)) + 1
}

pub(super) fn addition(a: i32, b: i32) -> Trace {
    let (bits_a, bits_b) = (a as u32, b as u32);
    let width = ripple_width(bits_a, bits_b);

    let mut columns = Vec::with_capacity(width);
    let mut carry = 0u8;
    for position in 0..width {
        let bit_a = binary::bit_at(bits_a, position);
        let bit_b = binary::bit_at(bits_b, position);
        let xor = bit_a ^ bit_b;
        let and = bit_a & bit_b;
        let sum = xor ^ carry;
        let carry_out = (xor & carry) | and;
        columns.push(CarryStep {
            position,
            bit_a,
            bit_b,
            xor,
            and,
            carry_in: carry,
            sum,
            carry_out,
        });
        carry = carry_out;
    }

    let result = fold_carries(columns.iter());
    let result_bits = columns.iter().rev().map(|c| char::from(b'0' + c.sum)).collect();
    columns.reverse();

    Trace {
        operation: Operation::Add,
        a,
        b,
        width,
        operand_a: binary::padded(bits_a, width),
        operand_b: Some(binary::padded(bits_b, width)),
        result_bits: Some(result_bits),
        result: Some(Outcome::Integer(result)),
        steps: columns.into_iter().map(Step::Carry).collect(),
    }
}

pub(super) fn subtraction(a: i32, b: i32) -> Trace {
    let (bits_a, bits_b) = (a as u32, b as u32);
    let width = ripple_width(bits_a, bits_b);

    let mut columns = Vec::with_capacity(width);
    let mut borrow = 0u8;
    for position in 0..width {
        let bit_a = binary::bit_at(bits_a, position);
        let bit_b = binary::bit_at(bits_b, position);
        let difference = bit_a as i8 - borrow as i8;
        let needs_borrow = difference < bit_b as i8;
        let (result, borrow_out) = if needs_borrow {
            ((difference + 2 - bit_b as i8) as u8, 1)
        } else {
            ((difference - bit_b as i8) as u8, 0)
        };
        columns.push(BorrowStep {
            position,
            bit_a,
            bit_b,
            borrow_in: borrow,
            difference,
            needs_borrow,
            result,
            borrow_out,
        });
        borrow = borrow_out;
    }

    let result = fold_borrows(columns.iter());
    let result_bits = columns
        .iter()
        .rev()
        .map(|c| char::from(b'0' + c.result))
        .collect();
    columns.reverse();

    Trace {
        operation: Operation::Subtract,
        a,
        b,
        width,
        operand_a: binary::padded(bits_a, width),
        operand_b: Some(binary::padded(bits_b, width)),
        result_bits: Some(result_bits),
        result: Some(Outcome::Integer(result)),
        steps: columns.into_iter().map(Step::Borrow).collect(),
    }
}

/// `Σ sum·2^position`, plus `2^width` when the top column carries out,
/// truncated to 32 bits.
pub(super) fn fold_carries<'a>(columns: impl Iterator<Item = &'a CarryStep>) -> i32 {
    let mut value = 0i64;
    let mut top: Option<&CarryStep> = None;
    for column in columns {
        value += i64::from(column.sum) << column.position;
        if top.map_or(true, |t| column.position > t.position) {
            top = Some(column);
        }
    }
    if let Some(top) = top.filter(|t| t.carry_out == 1) {
        value += 1i64 << (top.position + 1);
    }
    value as i32
}

/// `Σ result·2^position`, minus `2^width` when the top column still owes a
/// borrow, truncated to 32 bits.
pub(super) fn fold_borrows<'a>(columns: impl Iterator<Item = &'a BorrowStep>) -> i32 {
    let mut value = 0i64;
    let mut top: Option<&BorrowStep> = None;
    for column in columns {
        value += i64::from(column.result) << column.position;
        if top.map_or(true, |t| column.position > t.position) {
            top = Some(column);
        }
    }
    if let Some(top) = top.filter(|t| t.borrow_out == 1) {
        value -= 1i64 << (top.position + 1);
    }
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carries(trace: &Trace) -> Vec<CarryStep> {
        trace.steps().iter().filter_map(Step::as_carry).copied().collect()
    }

    fn borrows(trace: &Trace) -> Vec<BorrowStep> {
        trace.steps().iter().filter_map(Step::as_borrow).copied().collect()
    }

    #[test]
    fn test_five_plus_three() {
        let trace = addition(5, 3);
        assert_eq!(trace.width(), 4);
        assert_eq!(trace.operand_a(), "0101");
        assert_eq!(trace.operand_b(), Some("0011"));
        assert_eq!(trace.result_bits(), Some("1000"));
        assert_eq!(trace.result(), Some(Outcome::Integer(8)));

        let columns = carries(&trace);
        let positions: Vec<usize> = columns.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![3, 2, 1, 0]);
        // Most significant column first, and it carries nothing out
        assert_eq!(columns[0].carry_out, 0);
        assert_eq!(columns[0].sum, 1);
        assert_eq!(columns[3].carry_in, 0);
        assert_eq!(columns[3].xor, 0);
        assert_eq!(columns[3].and, 1);
    }

    #[test]
    fn test_carry_chain_links() {
        let trace = addition(0b1011, 0b0111);
        let mut columns = carries(&trace);
        columns.reverse();
        for pair in columns.windows(2) {
            assert_eq!(pair[0].carry_out, pair[1].carry_in);
        }
    }

    #[test]
    fn test_final_carry_out_of_top_column() {
        // -1 + 1 runs 33 columns and carries out of the top one
        let trace = addition(-1, 1);
        assert_eq!(trace.width(), 33);
        assert_eq!(carries(&trace)[0].carry_out, 0);
        assert_eq!(trace.result(), Some(Outcome::Integer(0)));

        let trace = addition(i32::MAX, 1);
        assert_eq!(trace.result(), Some(Outcome::Integer(i32::MIN)));
    }

    #[test]
    fn test_thirteen_minus_four() {
        let trace = subtraction(13, 4);
        assert_eq!(trace.width(), 5);
        assert_eq!(trace.result(), Some(Outcome::Integer(9)));
        assert_eq!(trace.result_bits(), Some("01001"));
    }

    #[test]
    fn test_borrow_columns() {
        // 0b10 - 0b01: column 0 borrows, column 1 pays it back
        let trace = subtraction(2, 1);
        let mut columns = borrows(&trace);
        columns.reverse();
        assert!(columns[0].needs_borrow);
        assert_eq!(columns[0].result, 1);
        assert_eq!(columns[1].borrow_in, 1);
        assert_eq!(columns[1].difference, 0);
        assert!(!columns[1].needs_borrow);
        assert_eq!(trace.result(), Some(Outcome::Integer(1)));
    }

    #[test]
    fn test_negative_difference_keeps_final_borrow() {
        let trace = subtraction(3, 5);
        assert_eq!(borrows(&trace)[0].borrow_out, 1);
        assert_eq!(trace.result(), Some(Outcome::Integer(-2)));

        let trace = subtraction(0, 1);
        let top = borrows(&trace)[0];
        assert_eq!(top.difference, -1);
        assert_eq!(trace.result(), Some(Outcome::Integer(-1)));
    }
}
