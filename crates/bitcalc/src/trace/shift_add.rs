//! Shift-and-add multiplication, one multiplier bit per step.

use super::{PartialProductStep, Step, Trace};
use crate::binary;
use crate::bits::{self, BitPrimitives, ScalarPrimitives};
use crate::operation::{Operation, Outcome};

pub(super) fn multiplication(a: i32, b: i32) -> Trace {
    let (bits_a, bits_b) = (a as u32, b as u32);
    let width = binary::bit_length(bits_b);
    let display_width = (binary::bit_length(bits_a) + width).min(u32::BITS as usize);

    // Scan from the top bit down, the way the multiplier is read aloud
    let mut partials = Vec::with_capacity(width);
    for bit_index in (0..width).rev() {
        let multiplier_bit = binary::bit_at(bits_b, bit_index);
        let shift_amount = bit_index as u32;
        let contributes = multiplier_bit == 1;
        let shifted = if contributes {
            ScalarPrimitives.shl(a, shift_amount)
        } else {
            0
        };
        partials.push(PartialProductStep {
            bit_index,
            multiplier_bit,
            shift_amount,
            shifted,
            binary: binary::display(shifted as u32, display_width),
            contributes,
        });
    }
    // ...then present them in ascending shift order
    partials.reverse();

    let product = fold(partials.iter());
    Trace {
        operation: Operation::Multiply,
        a,
        b,
        width,
        operand_a: binary::display(bits_a, display_width),
        operand_b: Some(binary::display(bits_b, width)),
        result_bits: Some(binary::display(product as u32, display_width)),
        result: Some(Outcome::Integer(product)),
        steps: partials.into_iter().map(Step::PartialProduct).collect(),
    }
}

/// Wrapping sum of the contributing partial products.
pub(super) fn fold<'a>(partials: impl Iterator<Item = &'a PartialProductStep>) -> i32 {
    partials
        .filter(|p| p.contributes)
        .fold(0, |sum, p| bits::add(sum, p.shifted))
}
