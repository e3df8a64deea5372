//! Derived operations built from the bitwise primitives.
//!
//! `BitArithmetic` provides every calculator operation as a default method,
//! so any type implementing [`BitPrimitives`] gets the full set. Nothing here
//! calls a native `+`, `-`, `*` or `/` on the operands.
//!
//! | Operation | Algorithm |
//! |-----------|-----------|
//! | `add` | carry propagation until the carry word is zero |
//! | `subtract` | borrow propagation until the borrow word is zero |
//! | `multiply` | shift-and-add over the set bits of the multiplier |
//! | `divide_magnitude` | restoring division on unsigned bit patterns |
//! | `count_set_bits` | Brian Kernighan's `n & (n - 1)` loop |

use super::primitives::BitPrimitives;
use super::word::BitWord;
use crate::error::ArithmeticError;

/// Arithmetic synthesized from the primitives.
///
/// All methods wrap at the word boundary exactly like the native wrapping
/// operators, because every intermediate shift discards the bits it pushes
/// out.
pub trait BitArithmetic<W: BitWord>: BitPrimitives<W> {
    /// Addition: `a + b`, wrapping.
    ///
    /// Repeats `sum = a XOR b`, `carry = (a AND b) << 1` with
    /// `a = sum, b = carry` until the carry is zero. Terminates within
    /// `W::BITS` rounds since each round shifts the carry left.
    #[inline]
    fn add(&self, a: W, b: W) -> W {
        let mut sum = a;
        let mut carry = b;
        while carry != W::ZERO {
            let next_carry = self.shl(self.and(sum, carry), 1);
            sum = self.xor(sum, carry);
            carry = next_carry;
        }
        sum
    }

    /// Subtraction: `a - b`, wrapping.
    ///
    /// Repeats `diff = a XOR b`, `borrow = (NOT a AND b) << 1` until the
    /// borrow is zero.
    #[inline]
    fn subtract(&self, a: W, b: W) -> W {
        let mut diff = a;
        let mut borrow = b;
        while borrow != W::ZERO {
            let next_borrow = self.shl(self.andn(diff, borrow), 1);
            diff = self.xor(diff, borrow);
            borrow = next_borrow;
        }
        diff
    }

    /// Two's complement negation: `NOT a + 1`.
    #[inline]
    fn negate(&self, a: W) -> W {
        self.add(self.bnot(a), W::ONE)
    }

    /// Multiplication: `a * b`, wrapping.
    ///
    /// Scans the multiplier from the low bit up and adds `a << i` for every
    /// set bit `i`. The multiplier is read as a bit pattern, so negative
    /// values produce the two's complement product.
    fn multiply(&self, a: W, b: W) -> W {
        let mut product = W::ZERO;
        let mut multiplier = b;
        let mut shift = 0;
        while multiplier != W::ZERO {
            if self.and(multiplier, W::ONE) != W::ZERO {
                product = self.add(product, self.shl(a, shift));
            }
            multiplier = self.shr(multiplier, 1);
            shift += 1;
        }
        product
    }

    /// Restoring division on unsigned bit patterns, returning
    /// `(quotient, remainder)`.
    ///
    /// While the dividend is at least the divisor, find the largest
    /// `divisor << k` not exceeding it, subtract that, and set bit `k` of the
    /// quotient. Both operands are compared as unsigned patterns, so on a
    /// signed word `-1` is the largest value. Signed callers divide the
    /// magnitudes and restore the sign afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    fn divide_magnitude(&self, dividend: W, divisor: W) -> Result<(W, W), ArithmeticError> {
        if divisor == W::ZERO {
            return Err(ArithmeticError::DivisionByZero);
        }

        let mut quotient = W::ZERO;
        let mut remaining = dividend;
        while !remaining.pattern_lt(divisor) {
            let mut shifted = divisor;
            let mut k = 0;
            // shifted <= remaining / 2 guarantees shifted << 1 <= remaining
            while !self.shr(remaining, 1).pattern_lt(shifted) {
                shifted = self.shl(shifted, 1);
                k += 1;
            }
            remaining = self.subtract(remaining, shifted);
            quotient = self.or(quotient, self.shl(W::ONE, k));
        }
        Ok((quotient, remaining))
    }

    /// Parity: `(n AND 1) == 0`.
    #[inline]
    fn is_even(&self, n: W) -> bool {
        self.and(n, W::ONE) == W::ZERO
    }

    /// Population count via Brian Kernighan's algorithm.
    ///
    /// Each `n = n AND (n - 1)` clears the lowest set bit, so the loop runs
    /// once per set bit of the two's complement pattern.
    fn count_set_bits(&self, n: W) -> u32 {
        let mut working = n;
        let mut count = 0;
        while working != W::ZERO {
            working = self.and(working, self.subtract(working, W::ONE));
            count += 1;
        }
        count
    }

    /// Power-of-two test: `n > 0 && (n AND (n - 1)) == 0`.
    #[inline]
    fn is_power_of_two(&self, n: W) -> bool {
        n > W::ZERO && self.and(n, self.subtract(n, W::ONE)) == W::ZERO
    }

    /// Modulo by a power of two: `a AND (b - 1)`.
    ///
    /// The mask keeps the low `log2(b)` bits, so the result is always
    /// non-negative even for negative `a`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidDivisor`] when `b` is not a positive
    /// power of two. Zero and negative divisors are rejected.
    fn mod_power_of_two(&self, a: W, b: W) -> Result<W, ArithmeticError> {
        if !self.is_power_of_two(b) {
            return Err(ArithmeticError::InvalidDivisor {
                divisor: b.to_i64(),
            });
        }
        Ok(self.and(a, self.subtract(b, W::ONE)))
    }
}

impl<W: BitWord, P: BitPrimitives<W>> BitArithmetic<W> for P {}
