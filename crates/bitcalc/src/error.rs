//! Error types.
//!
//! [`ArithmeticError`] holds the two domain failures the core can signal.
//! [`InputError`] covers the parse-and-validate boundary in front of it, and
//! [`CalcError`] joins both for callers that start from raw text.

use thiserror::Error;

use crate::operation::Operation;

/// A core operation refused its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// `divide` or `remainder` was called with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `mod_power_of_two` was called with a divisor that is not a positive
    /// power of two.
    #[error("{divisor} is not a power of two")]
    InvalidDivisor {
        /// The rejected divisor.
        divisor: i64,
    },
}

/// Raw input could not be turned into an operand or operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The operand text was blank.
    #[error("operand is empty")]
    Empty,

    /// The operand text is not an integer literal.
    #[error("`{input}` is not an integer")]
    Malformed {
        /// The offending text.
        input: String,
    },

    /// The operand is an integer but does not fit in 32 signed bits.
    #[error("`{input}` does not fit in a 32-bit signed integer")]
    OutOfRange {
        /// The offending text.
        input: String,
    },

    /// No operation has this name.
    #[error("unknown operation `{name}`")]
    UnknownOperation {
        /// The unrecognised name.
        name: String,
    },

    /// A binary operation was given only one operand.
    #[error("`{operation}` needs a second operand")]
    MissingOperand {
        /// The operation that was short an operand.
        operation: Operation,
    },
}

/// Either stage of a calculation started from raw text failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Parsing or validation failed before reaching the core.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The core rejected the operands.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
