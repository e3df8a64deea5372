//! Bit-arithmetic core.
//!
//! Every operation the calculator offers is synthesized from a handful of
//! bitwise primitives:
//!
//! - `bnot`, `xor`, `and`, `or`: the gates
//! - `shl`, `shr`: zero-filling shifts
//!
//! Comparisons are the only native operators used on operands.
//!
//! # Usage
//!
//! The free functions below operate on `i32` through [`ScalarPrimitives`]
//! and wrap at 32 bits like the native wrapping operators:
//!
//! ```
//! use bitcalc::bits;
//!
//! assert_eq!(bits::add(5, 3), 8);
//! assert_eq!(bits::multiply(5, 3), 15);
//! assert_eq!(bits::divide(13, 4), Ok(3));
//! assert_eq!(bits::mod_power_of_two(13, 8), Ok(5));
//! ```
//!
//! Unsigned patterns go through the traits directly:
//!
//! ```
//! use bitcalc::bits::{BitArithmetic, ScalarPrimitives};
//!
//! let p = ScalarPrimitives;
//! assert_eq!(p.add(u32::MAX, 5), 4);
//! assert_eq!(p.divide_magnitude(0xFFFF_FFFFu32, 0x10), Ok((0x0FFF_FFFF, 0xF)));
//! ```

pub mod ops;
pub mod power;
pub mod primitives;
pub mod word;

pub use ops::BitArithmetic;
pub use power::power;
pub use primitives::{BitPrimitives, ScalarPrimitives};
pub use word::BitWord;

use crate::error::ArithmeticError;

/// `a + b` by carry propagation, wrapping at 32 bits.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    ScalarPrimitives.add(a, b)
}

/// `a - b` by borrow propagation, wrapping at 32 bits.
#[inline]
pub fn subtract(a: i32, b: i32) -> i32 {
    ScalarPrimitives.subtract(a, b)
}

/// `a * b` by shift-and-add, wrapping at 32 bits.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    ScalarPrimitives.multiply(a, b)
}

/// `a / b` by restoring binary division, truncated toward zero.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn divide(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    divide_with_remainder(a, b).map(|(quotient, _)| quotient)
}

/// `a % b`, the remainder restoring division leaves behind.
///
/// Takes the sign of the dividend, matching Rust's `%`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn remainder(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    divide_with_remainder(a, b).map(|(_, remainder)| remainder)
}

/// Quotient and remainder in one pass.
///
/// Divides the magnitudes, then negates the quotient when exactly one operand
/// is negative and the remainder when the dividend is. `i32::MIN / -1` wraps
/// to `i32::MIN`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn divide_with_remainder(a: i32, b: i32) -> Result<(i32, i32), ArithmeticError> {
    let (quotient, remainder) =
        ScalarPrimitives.divide_magnitude(a.unsigned_abs(), b.unsigned_abs())?;
    Ok((
        apply_sign(quotient, (a < 0) != (b < 0)),
        apply_sign(remainder, a < 0),
    ))
}

/// Reinterpret a magnitude as `i32`, negating it when `negative`.
pub(crate) fn apply_sign(magnitude: u32, negative: bool) -> i32 {
    let value = magnitude as i32;
    if negative {
        ScalarPrimitives.negate(value)
    } else {
        value
    }
}

/// `a & b`
#[inline]
pub fn bitwise_and(a: i32, b: i32) -> i32 {
    ScalarPrimitives.and(a, b)
}

/// `a | b`
#[inline]
pub fn bitwise_or(a: i32, b: i32) -> i32 {
    ScalarPrimitives.or(a, b)
}

/// `a ^ b`
#[inline]
pub fn bitwise_xor(a: i32, b: i32) -> i32 {
    ScalarPrimitives.xor(a, b)
}

/// Whether the lowest bit of `n` is clear.
#[inline]
pub fn is_even(n: i32) -> bool {
    ScalarPrimitives.is_even(n)
}

/// Number of set bits in the 32-bit two's complement pattern of `n`.
#[inline]
pub fn count_set_bits(n: i32) -> u32 {
    ScalarPrimitives.count_set_bits(n)
}

/// Whether `n` is a positive power of two.
#[inline]
pub fn is_power_of_two(n: i32) -> bool {
    ScalarPrimitives.is_power_of_two(n)
}

/// `a mod b` for a power-of-two `b`, computed as `a & (b - 1)`.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidDivisor`] when `b` is not a positive
/// power of two.
pub fn mod_power_of_two(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    ScalarPrimitives.mod_power_of_two(a, b)
}
