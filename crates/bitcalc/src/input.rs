//! Parse-and-validate boundary between raw text and the core.
//!
//! Operands arrive as free text from the presentation layer. They are turned
//! into `i32` here, or rejected with an [`InputError`], before any core
//! function sees them.
//!
//! Accepted forms: an optional `+`/`-` sign followed by decimal digits,
//! `0b`/`0B` binary digits or `0x`/`0X` hex digits.

use log::debug;

use crate::error::InputError;
use crate::operation::Operation;

/// Parse one operand.
///
/// ```
/// use bitcalc::input::parse_operand;
///
/// assert_eq!(parse_operand("42"), Ok(42));
/// assert_eq!(parse_operand(" -0b101 "), Ok(-5));
/// assert_eq!(parse_operand("0xff"), Ok(255));
/// assert!(parse_operand("").is_err());
/// ```
///
/// # Errors
///
/// - [`InputError::Empty`] for blank text
/// - [`InputError::Malformed`] for anything that is not an integer literal
/// - [`InputError::OutOfRange`] when the value does not fit in `i32`
pub fn parse_operand(raw: &str) -> Result<i32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let malformed = || InputError::Malformed {
        input: trimmed.to_owned(),
    };
    let out_of_range = || InputError::OutOfRange {
        input: trimmed.to_owned(),
    };

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed());
    }

    // Digits are validated above, so the only failure left is overflow
    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| out_of_range())?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i32::try_from(value).map_err(|_| out_of_range())
}

fn split_radix(text: &str) -> (u32, &str) {
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (2, digits)
    } else if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, digits)
    } else {
        (10, text)
    }
}

/// Parse an operation's wire name.
///
/// # Errors
///
/// Returns [`InputError::UnknownOperation`] for unrecognised names.
pub fn parse_operation(raw: &str) -> Result<Operation, InputError> {
    raw.parse()
}

/// Parse the operands an operation needs.
///
/// Unary operations ignore `b` entirely and report it as `0`.
///
/// # Errors
///
/// Any [`parse_operand`] error, or [`InputError::MissingOperand`] when a
/// binary operation has no second operand.
pub fn parse_operands(
    operation: Operation,
    a: &str,
    b: Option<&str>,
) -> Result<(i32, i32), InputError> {
    let a = parse_operand(a)?;
    if operation.is_unary() {
        return Ok((a, 0));
    }
    let b = b.ok_or(InputError::MissingOperand { operation })?;
    Ok((a, parse_operand(b)?))
}

/// Lenient parse for display-only paths: unparseable text reads as absent.
pub fn lenient_operand(raw: Option<&str>) -> Option<i32> {
    match parse_operand(raw?) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("dropping operand: {err}");
            None
        }
    }
}
