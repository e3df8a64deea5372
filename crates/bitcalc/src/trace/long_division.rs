//! Restoring long division, one dividend bit per step.
//!
//! Works on the operand magnitudes; signs are applied only when the steps
//! are folded back into a quotient and remainder.

use super::{DivisionStep, Step, Trace};
use crate::binary;
use crate::bits::apply_sign;
use crate::operation::{Operation, Outcome};

pub(super) fn division(a: i32, b: i32) -> Trace {
    let dividend = a.unsigned_abs();
    let divisor = u64::from(b.unsigned_abs());
    let width = binary::bit_length(dividend);

    let mut steps = Vec::with_capacity(width);
    let mut remainder = 0u64;
    let mut quotient = 0u32;
    for (step, bit_index) in (0..width).rev().enumerate() {
        let bit = binary::bit_at(dividend, bit_index);
        let brought_down = (remainder << 1) | u64::from(bit);
        let can_subtract = divisor != 0 && brought_down >= divisor;
        let quotient_bit = u8::from(can_subtract);
        let remainder_after = if can_subtract {
            brought_down - divisor
        } else {
            brought_down
        };
        quotient = (quotient << 1) | u32::from(quotient_bit);

        steps.push(DivisionStep {
            step: step + 1,
            bit_index,
            bit,
            divisor,
            remainder_before: remainder,
            brought_down,
            can_subtract,
            quotient_bit,
            remainder_after,
            partial_quotient: quotient,
        });
        remainder = remainder_after;
    }

    let result = fold(a, b, steps.iter()).map(|(q, _)| Outcome::Integer(q));
    Trace {
        operation: Operation::Divide,
        a,
        b,
        width,
        operand_a: binary::display(dividend, width),
        operand_b: Some(binary::display(b.unsigned_abs(), width)),
        result_bits: None,
        result,
        steps: steps.into_iter().map(Step::LongDivision).collect(),
    }
}

/// Signed quotient and remainder from the last step, `None` for a zero
/// divisor.
pub(super) fn fold<'a>(
    a: i32,
    b: i32,
    steps: impl Iterator<Item = &'a DivisionStep>,
) -> Option<(i32, i32)> {
    if b == 0 {
        return None;
    }
    let (quotient, remainder) = steps
        .last()
        .map_or((0, 0), |s| (s.partial_quotient, s.remainder_after as u32));
    Some((
        apply_sign(quotient, (a < 0) != (b < 0)),
        apply_sign(remainder, a < 0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn division_steps(trace: &Trace) -> Vec<DivisionStep> {
        trace.steps().iter().filter_map(Step::as_division).copied().collect()
    }

    #[test]
    fn test_thirteen_by_four() {
        let trace = division(13, 4);
        assert_eq!(trace.result(), Some(Outcome::Integer(3)));
        assert_eq!(trace.final_remainder(), Some(1));

        let steps = division_steps(&trace);
        assert_eq!(steps.len(), 4);
        let quotient_bits: Vec<u8> = steps.iter().map(|s| s.quotient_bit).collect();
        assert_eq!(quotient_bits, vec![0, 0, 1, 1]);
        assert_eq!(steps[2].brought_down, 6);
        assert_eq!(steps[2].remainder_after, 2);
        assert_eq!(steps[3].step, 4);
        assert_eq!(steps[3].bit_index, 0);
    }

    #[test]
    fn test_remainder_chain() {
        let steps = division_steps(&division(1000, 7));
        for pair in steps.windows(2) {
            assert_eq!(pair[0].remainder_after, pair[1].remainder_before);
        }
        for step in &steps {
            assert!(step.remainder_after < step.divisor);
        }
    }

    #[test]
    fn test_signs_applied_on_fold() {
        let trace = division(-13, 4);
        assert_eq!(trace.result(), Some(Outcome::Integer(-3)));
        assert_eq!(trace.final_remainder(), Some(-1));

        let trace = division(i32::MIN, -1);
        assert_eq!(trace.width(), 32);
        assert_eq!(trace.result(), Some(Outcome::Integer(i32::MIN)));
        assert_eq!(trace.final_remainder(), Some(0));
    }

    #[test]
    fn test_zero_divisor_has_steps_but_no_result() {
        let trace = division(9, 0);
        assert_eq!(trace.result(), None);
        assert_eq!(trace.final_remainder(), None);
        assert!(division_steps(&trace).iter().all(|s| !s.can_subtract));
    }

    #[test]
    fn test_small_dividend() {
        let trace = division(3, 7);
        assert_eq!(trace.result(), Some(Outcome::Integer(0)));
        assert_eq!(trace.final_remainder(), Some(3));
    }
}
