//! Word types the bit-arithmetic core can operate on.
//!
//! The `BitWord` trait captures what the core needs from an integer: the
//! four bitwise gates, zero-filling shifts, and a handful of constants. Every
//! arithmetic operation in [`super::ops`] is written against this trait, so
//! the same carry/borrow loops serve signed operands and the unsigned
//! magnitudes division works on.

/// A fixed-width integer usable as a bit-arithmetic operand.
///
/// Shifts never panic: bits shifted past the word boundary are discarded, and
/// a shift by `BITS` or more yields zero.
///
/// # Implementors
///
/// - `i32`: calculator operands
/// - `u32`: magnitudes and raw bit patterns
pub trait BitWord: Copy + Default + Eq + Ord + core::fmt::Debug + Sized {
    /// All bits clear.
    const ZERO: Self;

    /// Only the least significant bit set.
    const ONE: Self;

    /// Number of bits in this word type.
    const BITS: u32;

    /// Bitwise NOT
    fn bit_not(self) -> Self;

    /// Bitwise XOR
    fn bit_xor(self, other: Self) -> Self;

    /// Bitwise AND
    fn bit_and(self, other: Self) -> Self;

    /// Bitwise OR
    fn bit_or(self, other: Self) -> Self;

    /// Shift left by `n`, discarding bits that leave the word.
    fn shift_left(self, n: u32) -> Self;

    /// Logical shift right by `n`, filling with zeros regardless of sign.
    fn shift_right(self, n: u32) -> Self;

    /// Whether `self < other` when both are read as unsigned bit patterns.
    fn pattern_lt(self, other: Self) -> bool;

    /// Lossless widening, used to report offending values in errors.
    fn to_i64(self) -> i64;
}

macro_rules! impl_bit_word {
    ($ty:ty, $unsigned:ty) => {
        impl BitWord for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn bit_not(self) -> Self {
                !self
            }
            #[inline(always)]
            fn bit_xor(self, other: Self) -> Self {
                self ^ other
            }
            #[inline(always)]
            fn bit_and(self, other: Self) -> Self {
                self & other
            }
            #[inline(always)]
            fn bit_or(self, other: Self) -> Self {
                self | other
            }
            #[inline(always)]
            fn shift_left(self, n: u32) -> Self {
                self.checked_shl(n).unwrap_or(0)
            }
            #[inline(always)]
            fn shift_right(self, n: u32) -> Self {
                (self as $unsigned).checked_shr(n).unwrap_or(0) as $ty
            }
            #[inline(always)]
            fn pattern_lt(self, other: Self) -> bool {
                (self as $unsigned) < (other as $unsigned)
            }
            #[inline(always)]
            fn to_i64(self) -> i64 {
                i64::from(self)
            }
        }
    };
}

impl_bit_word!(i32, u32);
impl_bit_word!(u32, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<i32 as BitWord>::ZERO, 0);
        assert_eq!(<i32 as BitWord>::ONE, 1);
        assert_eq!(<i32 as BitWord>::BITS, 32);
        assert_eq!(<u32 as BitWord>::BITS, 32);
    }

    #[test]
    fn test_shifts_discard_overflow() {
        // Bit 31 moves out of the word entirely
        assert_eq!(0x4000_0000i32.shift_left(2), 0);
        assert_eq!(1i32.shift_left(31), i32::MIN);
        assert_eq!(1i32.shift_left(32), 0);
        assert_eq!(0x8000_0000u32.shift_left(1), 0);
    }

    #[test]
    fn test_shift_right_is_logical() {
        assert_eq!((-1i32).shift_right(28), 0xF);
        assert_eq!(i32::MIN.shift_right(31), 1);
        assert_eq!(u32::MAX.shift_right(4), 0x0FFF_FFFF);
        assert_eq!(5i32.shift_right(40), 0);
    }

    #[test]
    fn test_pattern_order_is_unsigned() {
        assert!(5i32.pattern_lt(-1));
        assert!(!(-1i32).pattern_lt(5));
        assert!(i32::MAX.pattern_lt(i32::MIN));
        assert!(!3u32.pattern_lt(3));
    }

    #[test]
    fn test_gates() {
        let a = 0b1100i32;
        let b = 0b1010i32;
        assert_eq!(a.bit_xor(b), 0b0110);
        assert_eq!(a.bit_and(b), 0b1000);
        assert_eq!(a.bit_or(b), 0b1110);
        assert_eq!(0i32.bit_not(), -1);
    }
}
