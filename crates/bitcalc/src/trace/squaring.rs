//! Exponentiation by squaring, one step per recursion level.

use super::{SquaringStep, Step, Trace};
use crate::binary;
use crate::bits::power::effective_base;
use crate::operation::{Operation, Outcome};

pub(super) fn exponentiation(a: i32, b: i32) -> Trace {
    let base = effective_base(f64::from(a), b);
    let mut levels = Vec::new();
    unwind(base, b.unsigned_abs(), &mut levels);
    // Levels are recorded innermost first as the recursion returns
    levels.reverse();

    let result = fold(levels.iter());
    let width = levels.len();
    Trace {
        operation: Operation::Power,
        a,
        b,
        width,
        operand_a: binary::display(a as u32, binary::bit_length(a as u32)),
        operand_b: Some(binary::display(b as u32, binary::bit_length(b as u32))),
        result_bits: None,
        result: Some(Outcome::Real(result)),
        steps: levels.into_iter().map(Step::Squaring).collect(),
    }
}

fn unwind(base: f64, exponent: u32, levels: &mut Vec<SquaringStep>) -> f64 {
    let value = if exponent == 0 {
        1.0
    } else {
        let half = unwind(base, exponent >> 1, levels);
        let squared = half * half;
        if exponent & 1 == 1 {
            squared * base
        } else {
            squared
        }
    };
    levels.push(SquaringStep {
        exponent,
        odd: exponent & 1 == 1,
        value,
    });
    value
}

/// The outermost level's value, or `1.0` with no levels.
pub(super) fn fold<'a>(mut levels: impl Iterator<Item = &'a SquaringStep>) -> f64 {
    levels.next().map_or(1.0, |level| level.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::power;

    fn levels(trace: &Trace) -> Vec<SquaringStep> {
        trace.steps().iter().filter_map(Step::as_squaring).copied().collect()
    }

    #[test]
    fn test_two_to_the_tenth() {
        let trace = exponentiation(2, 10);
        assert_eq!(trace.result(), Some(Outcome::Real(1024.0)));

        let exponents: Vec<u32> = levels(&trace).iter().map(|l| l.exponent).collect();
        assert_eq!(exponents, vec![10, 5, 2, 1, 0]);
        let values: Vec<f64> = levels(&trace).iter().map(|l| l.value).collect();
        assert_eq!(values, vec![1024.0, 32.0, 4.0, 2.0, 1.0]);
        assert!(levels(&trace)[1].odd);
    }

    #[test]
    fn test_negative_exponent_inverts_base() {
        let trace = exponentiation(2, -1);
        assert_eq!(trace.result(), Some(Outcome::Real(0.5)));
        let trace = exponentiation(4, -2);
        assert_eq!(trace.result(), Some(Outcome::Real(0.0625)));
    }

    #[test]
    fn test_zero_exponent_has_one_level() {
        let trace = exponentiation(0, 0);
        assert_eq!(trace.width(), 1);
        assert_eq!(trace.result(), Some(Outcome::Real(1.0)));
    }

    #[test]
    fn test_agrees_with_core() {
        for (a, b) in [(3, 7), (-2, 9), (10, -3), (7, 31), (1, i32::MIN)] {
            assert_eq!(
                exponentiation(a, b).result(),
                Some(Outcome::Real(power(f64::from(a), b))),
                "power({a}, {b})"
            );
        }
    }
}
