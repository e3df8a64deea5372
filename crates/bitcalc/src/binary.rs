//! Binary-string helpers shared by the trace generator.
//!
//! Operands are always rendered from their 32-bit two's complement pattern,
//! so a negative operand shows all 32 of its digits.

/// Minimum number of digits used when padding display strings.
pub const DISPLAY_WIDTH: usize = 8;

/// Number of binary digits needed to write `bits`, with `0` taking one digit.
pub fn bit_length(bits: u32) -> usize {
    if bits == 0 {
        1
    } else {
        (u32::BITS - bits.leading_zeros()) as usize
    }
}

/// Bit `position` of `bits`; positions at or beyond 32 read as zero.
pub fn bit_at(bits: u32, position: usize) -> u8 {
    match u32::try_from(position) {
        Ok(shift) if shift < u32::BITS => ((bits >> shift) & 1) as u8,
        _ => 0,
    }
}

/// `bits` in binary, zero-padded on the left to at least `width` digits.
pub fn padded(bits: u32, width: usize) -> String {
    format!("{bits:0width$b}")
}

/// `bits` padded to [`DISPLAY_WIDTH`] or to `width`, whichever is wider.
pub fn display(bits: u32, width: usize) -> String {
    padded(bits, width.max(DISPLAY_WIDTH))
}
