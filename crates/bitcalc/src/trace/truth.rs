//! Column-by-column truth tables for AND, OR and XOR.

use super::{Gate, Step, Trace, TruthStep};
use crate::binary;
use crate::operation::Outcome;

pub(super) fn table(gate: Gate, a: i32, b: i32) -> Trace {
    let (bits_a, bits_b) = (a as u32, b as u32);
    let width = binary::bit_length(bits_a).max(binary::bit_length(bits_b));

    let columns: Vec<TruthStep> = (0..width)
        .map(|position| {
            let bit_a = binary::bit_at(bits_a, position);
            let bit_b = binary::bit_at(bits_b, position);
            TruthStep {
                gate,
                position,
                bit_a,
                bit_b,
                output: gate.apply(bit_a, bit_b),
            }
        })
        .collect();

    let result = fold(columns.iter());
    Trace {
        operation: gate.operation(),
        a,
        b,
        width,
        operand_a: binary::padded(bits_a, width),
        operand_b: Some(binary::padded(bits_b, width)),
        result_bits: Some(binary::padded(result as u32, width)),
        result: Some(Outcome::Integer(result)),
        steps: columns.into_iter().map(Step::Truth).collect(),
    }
}

/// Reassemble the output column bits.
pub(super) fn fold<'a>(columns: impl Iterator<Item = &'a TruthStep>) -> i32 {
    columns.fold(0u32, |acc, c| acc | (u32::from(c.output) << c.position)) as i32
}
