//! Described walkthroughs for the single-check operations.

use super::{NarrativeStep, Step, Trace};
use crate::binary;
use crate::operation::{Operation, Outcome};

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "Yes"
    } else {
        "No"
    }
}

fn narrated(
    operation: Operation,
    a: i32,
    b: Option<i32>,
    result: Option<Outcome>,
    steps: Vec<NarrativeStep>,
) -> Trace {
    let bits_a = a as u32;
    let width = binary::bit_length(bits_a);
    Trace {
        operation,
        a,
        b: b.unwrap_or(0),
        width,
        operand_a: binary::display(bits_a, width),
        operand_b: b.map(|b| binary::display(b as u32, binary::bit_length(b as u32))),
        result_bits: None,
        result,
        steps: steps.into_iter().map(Step::Narrative).collect(),
    }
}

pub(super) fn parity(a: i32) -> Trace {
    let bits = a as u32;
    let lowest = bits & 1;
    let even = lowest == 0;
    let step = NarrativeStep::new(
        "Extract the least significant bit",
        "AND with 1 keeps only the last bit",
    )
    .expression(format!("{a} & 1 = {lowest}"))
    .binary(binary::display(bits, binary::bit_length(bits)))
    .verdict(if even { "even" } else { "odd" })
    .value(lowest);

    narrated(
        Operation::Even,
        a,
        None,
        Some(Outcome::Boolean(even)),
        vec![step],
    )
}

pub(super) fn set_bits(a: i32) -> Trace {
    let mut working = a as u32;
    let width = binary::bit_length(working);
    let mut steps = vec![NarrativeStep::new(
        "Initialize",
        format!("Start with count = 0 and n = {a}"),
    )
    .binary(binary::display(working, width))
    .value(0)];

    let mut count = 0u32;
    while working != 0 {
        let cleared = working & (working - 1);
        count += 1;
        steps.push(
            NarrativeStep::new(
                format!("Step {count}: count a set bit"),
                "n = n & (n - 1) clears the rightmost set bit",
            )
            .expression(format!(
                "{} & {} = {}",
                binary::display(working, width),
                binary::display(working - 1, width),
                binary::display(cleared, width)
            ))
            .binary(binary::display(cleared, width))
            .detail(format!("count = {count}"))
            .value(count),
        );
        working = cleared;
    }

    steps.push(
        NarrativeStep::new("Complete", "All set bits have been counted")
            .verdict(format!("{a} has {count} set bits"))
            .value(count),
    );

    narrated(
        Operation::SetBits,
        a,
        None,
        Some(Outcome::Integer(count as i32)),
        steps,
    )
}

pub(super) fn power_of_two(a: i32) -> Trace {
    let bits = a as u32;
    let positive = a > 0;
    let below = bits.wrapping_sub(1);
    let masked = bits & below;
    let single_bit = masked == 0;

    let steps = vec![
        NarrativeStep::new("Check if n > 0", format!("{a} > 0? {}", yes_no(positive)))
            .verdict(yes_no(positive)),
        NarrativeStep::new(
            "Check if (n & (n - 1)) == 0",
            "A power of 2 has exactly one set bit",
        )
        .expression(format!("{a} & {} = {}", a.wrapping_sub(1), masked as i32))
        .binary(binary::display(masked, binary::bit_length(bits)))
        .verdict(yes_no(single_bit))
        .value(masked as i32),
    ];

    narrated(
        Operation::IsPower,
        a,
        None,
        Some(Outcome::Boolean(positive && single_bit)),
        steps,
    )
}

pub(super) fn mod_power(a: i32, b: i32) -> Trace {
    let valid = b > 0 && (b & (b - 1)) == 0;
    let mut steps = vec![NarrativeStep::new(
        "Check if divisor is a power of 2",
        "Modulo by a power of 2 is a single AND",
    )
    .expression(format!("{b} is a power of 2? {}", yes_no(valid)))
    .verdict(yes_no(valid))];

    let result = if valid {
        let mask = b - 1;
        let remainder = a & mask;
        steps.push(
            NarrativeStep::new(
                "Mask with (divisor - 1)",
                format!("AND with {mask} to get the remainder"),
            )
            .expression(format!("{a} & {mask} = {remainder}"))
            .binary(binary::display(remainder as u32, b.trailing_zeros() as usize))
            .detail(format!(
                "The lower {} bits represent values 0 to {mask}",
                b.trailing_zeros()
            ))
            .value(remainder),
        );
        Some(Outcome::Integer(remainder))
    } else {
        None
    };

    narrated(Operation::ModPower, a, Some(b), result, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narration(trace: &Trace) -> Vec<NarrativeStep> {
        trace
            .steps()
            .iter()
            .filter_map(Step::as_narrative)
            .cloned()
            .collect()
    }

    #[test]
    fn test_parity() {
        let trace = parity(7);
        let steps = narration(&trace);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].verdict.as_deref(), Some("odd"));
        assert_eq!(steps[0].expression.as_deref(), Some("7 & 1 = 1"));
        assert_eq!(trace.result(), Some(Outcome::Boolean(false)));
        assert_eq!(parity(-4).result(), Some(Outcome::Boolean(true)));
    }

    #[test]
    fn test_set_bits_one_step_per_iteration() {
        let trace = set_bits(0b1011);
        let steps = narration(&trace);
        assert_eq!(steps.len(), 1 + 3 + 1);
        assert_eq!(steps[0].title, "Initialize");
        assert_eq!(steps[4].title, "Complete");
        assert_eq!(steps[3].value, Some(3));
        assert_eq!(trace.result(), Some(Outcome::Integer(3)));
    }

    #[test]
    fn test_set_bits_edges() {
        assert_eq!(narration(&set_bits(0)).len(), 2);
        assert_eq!(set_bits(0).result(), Some(Outcome::Integer(0)));
        assert_eq!(narration(&set_bits(-1)).len(), 34);
        assert_eq!(set_bits(-1).result(), Some(Outcome::Integer(32)));
    }

    #[test]
    fn test_power_of_two() {
        let trace = power_of_two(64);
        assert_eq!(narration(&trace).len(), 2);
        assert_eq!(trace.result(), Some(Outcome::Boolean(true)));
        assert_eq!(power_of_two(0).result(), Some(Outcome::Boolean(false)));
        assert_eq!(power_of_two(12).result(), Some(Outcome::Boolean(false)));
        assert_eq!(power_of_two(i32::MIN).result(), Some(Outcome::Boolean(false)));
        assert_eq!(narration(&power_of_two(-8))[0].verdict.as_deref(), Some("No"));
    }

    #[test]
    fn test_mod_power() {
        let trace = mod_power(13, 8);
        let steps = narration(&trace);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].expression.as_deref(), Some("13 & 7 = 5"));
        assert_eq!(steps[1].binary.as_deref(), Some("00000101"));
        assert_eq!(trace.result(), Some(Outcome::Integer(5)));
    }

    #[test]
    fn test_mod_power_stops_on_invalid_divisor() {
        for divisor in [6, 0, -8] {
            let trace = mod_power(13, divisor);
            assert_eq!(narration(&trace).len(), 1, "divisor {divisor}");
            assert_eq!(trace.result(), None);
        }
    }
}
