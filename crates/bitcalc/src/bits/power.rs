//! Exponentiation by squaring.

/// `base` raised to `exponent`.
///
/// Halves the exponent on each recursion level, squares the partial result on
/// the way back up, and multiplies in the base when the level's exponent is
/// odd. A negative exponent inverts the base first, so `power(2.0, -1)` is
/// `0.5` and `power(0.0, -1)` is infinite.
pub fn power(base: f64, exponent: i32) -> f64 {
    square_and_multiply(effective_base(base, exponent), exponent.unsigned_abs())
}

/// The base a negative exponent squares, i.e. `1 / base`.
pub(crate) fn effective_base(base: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        1.0 / base
    } else {
        base
    }
}

fn square_and_multiply(base: f64, exponent: u32) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    let half = square_and_multiply(base, exponent >> 1);
    let squared = half * half;
    if exponent & 1 == 1 {
        squared * base
    } else {
        squared
    }
}
