//! The calculator's operation tags and their evaluation.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bits;
use crate::error::{ArithmeticError, InputError};

/// One calculator operation.
///
/// Serialized and parsed under its wire name (`add`, `setBits`, `modPower`,
/// ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, truncated
    Divide,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// Is `a` even?
    Even,
    /// Popcount of `a`
    SetBits,
    /// `a mod b` for a power-of-two `b`
    ModPower,
    /// Is `a` a power of two?
    IsPower,
    /// `a` raised to `b`
    Power,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Even,
        Operation::SetBits,
        Operation::ModPower,
        Operation::IsPower,
        Operation::Power,
    ];

    /// Wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Xor => "xor",
            Operation::Even => "even",
            Operation::SetBits => "setBits",
            Operation::ModPower => "modPower",
            Operation::IsPower => "isPower",
            Operation::Power => "power",
        }
    }

    /// Whether the operation reads only its first operand.
    pub const fn is_unary(self) -> bool {
        matches!(
            self,
            Operation::Even | Operation::SetBits | Operation::IsPower
        )
    }

    /// Run the matching core function.
    ///
    /// Unary operations ignore `b`. `power` reads `a` as the base and `b` as
    /// the exponent.
    ///
    /// # Errors
    ///
    /// Propagates [`ArithmeticError::DivisionByZero`] from `divide` and
    /// [`ArithmeticError::InvalidDivisor`] from `modPower`.
    pub fn evaluate(self, a: i32, b: i32) -> Result<Outcome, ArithmeticError> {
        let outcome = match self {
            Operation::Add => Outcome::Integer(bits::add(a, b)),
            Operation::Subtract => Outcome::Integer(bits::subtract(a, b)),
            Operation::Multiply => Outcome::Integer(bits::multiply(a, b)),
            Operation::Divide => Outcome::Integer(bits::divide(a, b)?),
            Operation::And => Outcome::Integer(bits::bitwise_and(a, b)),
            Operation::Or => Outcome::Integer(bits::bitwise_or(a, b)),
            Operation::Xor => Outcome::Integer(bits::bitwise_xor(a, b)),
            Operation::Even => Outcome::Boolean(bits::is_even(a)),
            Operation::SetBits => Outcome::Integer(bits::count_set_bits(a) as i32),
            Operation::ModPower => Outcome::Integer(bits::mod_power_of_two(a, b)?),
            Operation::IsPower => Outcome::Boolean(bits::is_power_of_two(a)),
            Operation::Power => Outcome::Real(bits::power(f64::from(a), b)),
        };
        Ok(outcome)
    }

    /// One-line explanation of what evaluating with these operands computes.
    pub fn describe(self, a: i32, b: i32) -> String {
        match self {
            Operation::Add => format!("Calculates {a} + {b} using carry propagation"),
            Operation::Subtract => format!("Calculates {a} - {b} using borrow propagation"),
            Operation::Multiply => format!("Calculates {a} * {b} by shifting and adding"),
            Operation::Divide => format!("Calculates {a} / {b} by binary long division"),
            Operation::And => format!("{a} & {b}: a bit is 1 only if both bits are 1"),
            Operation::Or => format!("{a} | {b}: a bit is 1 if either bit is 1"),
            Operation::Xor => format!("{a} ^ {b}: a bit is 1 if the bits differ"),
            Operation::Even => format!("Checks if {a} is even or odd using bitwise AND"),
            Operation::SetBits => format!("Counts the 1s in the binary form of {a}"),
            Operation::ModPower => format!("{a} % {b} using bitwise AND (b must be a power of 2)"),
            Operation::IsPower => format!("Checks if {a} is a power of 2"),
            Operation::Power => format!("Raises {a} to the power {b} by repeated squaring"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| InputError::UnknownOperation {
                name: name.to_owned(),
            })
    }
}

/// The headline result of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Arithmetic, bitwise, popcount and modulo results.
    Integer(i32),
    /// Parity and power-of-two checks.
    Boolean(bool),
    /// Exponentiation, which is fractional for negative exponents.
    Real(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(value) => write!(f, "{value}"),
            Outcome::Boolean(value) => write!(f, "{value}"),
            Outcome::Real(value) => write!(f, "{value}"),
        }
    }
}
