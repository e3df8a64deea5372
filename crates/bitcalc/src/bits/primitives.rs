//! The bitwise primitives every calculator operation is built from.
//!
//! - `bnot`: Bitwise NOT (unary)
//! - `xor`: Bitwise XOR (binary)
//! - `and`: Bitwise AND (binary)
//! - `or`: Bitwise OR (binary)
//! - `shl` / `shr`: zero-filling shifts
//!
//! # Identities the core relies on
//!
//! ```text
//! a + b = (a XOR b) + ((a AND b) << 1)        (half-adder split)
//! a - b = (a XOR b) - ((NOT a AND b) << 1)    (half-subtractor split)
//! n AND (n - 1)                               clears the lowest set bit
//! ```

use super::word::BitWord;

/// The primitive gates that generate every other operation.
///
/// A backend implements these and receives add, subtract, multiply, divide,
/// parity, popcount and the power-of-two checks through
/// [`BitArithmetic`](super::ops::BitArithmetic).
///
/// # Example Implementation
///
/// ```
/// use bitcalc::bits::BitPrimitives;
///
/// struct Gates;
///
/// impl BitPrimitives<i32> for Gates {
///     fn bnot(&self, a: i32) -> i32 { !a }
///     fn xor(&self, a: i32, b: i32) -> i32 { a ^ b }
///     fn and(&self, a: i32, b: i32) -> i32 { a & b }
///     fn or(&self, a: i32, b: i32) -> i32 { a | b }
///     fn shl(&self, a: i32, n: u32) -> i32 { a.checked_shl(n).unwrap_or(0) }
///     fn shr(&self, a: i32, n: u32) -> i32 { (a as u32).checked_shr(n).unwrap_or(0) as i32 }
/// }
/// ```
pub trait BitPrimitives<W: BitWord> {
    /// Bitwise NOT: `!a`
    ///
    /// Self-inverse: `bnot(bnot(x)) = x`.
    fn bnot(&self, a: W) -> W;

    /// Bitwise XOR: `a ^ b`
    ///
    /// Per bit, this is the sum of a half adder and the difference of a half
    /// subtractor.
    fn xor(&self, a: W, b: W) -> W;

    /// Bitwise AND: `a & b`
    ///
    /// Per bit, this is the carry of a half adder.
    fn and(&self, a: W, b: W) -> W;

    /// Bitwise OR: `a | b`
    fn or(&self, a: W, b: W) -> W;

    /// Shift left by `n` bits; bits leaving the word are dropped.
    fn shl(&self, a: W, n: u32) -> W;

    /// Logical shift right by `n` bits.
    fn shr(&self, a: W, n: u32) -> W;

    // -------------------------------------------------------------------------
    // Convenience methods with default implementations
    // -------------------------------------------------------------------------

    /// AND-NOT: `!a & b`
    ///
    /// Marks the positions where subtracting `b` from `a` must borrow.
    #[inline(always)]
    fn andn(&self, a: W, b: W) -> W {
        self.and(self.bnot(a), b)
    }

    /// Extract bit `position` as `W::ONE` or `W::ZERO`.
    #[inline(always)]
    fn bit(&self, a: W, position: u32) -> W {
        self.and(self.shr(a, position), W::ONE)
    }
}

/// Reference implementation of the primitives on native integers.
///
/// Serves as:
/// 1. The backend behind the crate's free functions
/// 2. The oracle the trace generator re-derives intermediate values with
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarPrimitives;

impl<W: BitWord> BitPrimitives<W> for ScalarPrimitives {
    #[inline(always)]
    fn bnot(&self, a: W) -> W {
        a.bit_not()
    }
    #[inline(always)]
    fn xor(&self, a: W, b: W) -> W {
        a.bit_xor(b)
    }
    #[inline(always)]
    fn and(&self, a: W, b: W) -> W {
        a.bit_and(b)
    }
    #[inline(always)]
    fn or(&self, a: W, b: W) -> W {
        a.bit_or(b)
    }
    #[inline(always)]
    fn shl(&self, a: W, n: u32) -> W {
        a.shift_left(n)
    }
    #[inline(always)]
    fn shr(&self, a: W, n: u32) -> W {
        a.shift_right(n)
    }
}
