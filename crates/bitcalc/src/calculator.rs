//! Evaluate-then-trace facade.
//!
//! ```
//! use bitcalc::{Calculator, Operation, Outcome};
//!
//! let evaluation = Calculator::new().run(Operation::Divide, 13, 4).unwrap();
//! assert_eq!(evaluation.outcome(), Outcome::Integer(3));
//! assert_eq!(evaluation.trace().and_then(|t| t.final_remainder()), Some(1));
//!
//! // Failed evaluations never reach the trace generator
//! assert!(Calculator::new().run(Operation::Divide, 13, 0).is_err());
//! ```

use log::debug;
use serde::Serialize;

use crate::error::{ArithmeticError, CalcError};
use crate::input;
use crate::operation::{Operation, Outcome};
use crate::trace::{trace_for, Trace};

/// A successful evaluation and, optionally, how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    operation: Operation,
    a: i32,
    /// Absent for unary operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<i32>,
    outcome: Outcome,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Trace>,
}

impl Evaluation {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> Option<i32> {
        self.b
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// One-line explanation of the operation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The step trace, if the calculator was asked for one.
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

/// Runs operations and attaches their traces.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    with_trace: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator that traces every successful evaluation.
    pub fn new() -> Self {
        Self { with_trace: true }
    }

    /// A calculator that only evaluates.
    pub fn without_trace() -> Self {
        Self { with_trace: false }
    }

    /// Evaluate `operation` on `a` and `b`, then trace it.
    ///
    /// # Errors
    ///
    /// Returns the core's [`ArithmeticError`]; no trace is built in that
    /// case.
    pub fn run(&self, operation: Operation, a: i32, b: i32) -> Result<Evaluation, ArithmeticError> {
        let outcome = operation.evaluate(a, b)?;
        debug!("{operation}({a}, {b}) = {outcome}");

        let trace = self.with_trace.then(|| trace_for(operation, a, b));
        Ok(Evaluation {
            operation,
            a,
            b: (!operation.is_unary()).then_some(b),
            outcome,
            description: operation.describe(a, b),
            trace,
        })
    }

    /// Parse raw text and run it.
    ///
    /// # Errors
    ///
    /// [`CalcError::Input`] when the operation or operands do not parse,
    /// [`CalcError::Arithmetic`] when the core rejects them.
    pub fn run_raw(
        &self,
        operation: &str,
        a: &str,
        b: Option<&str>,
    ) -> Result<Evaluation, CalcError> {
        let operation = input::parse_operation(operation)?;
        let (a, b) = input::parse_operands(operation, a, b)?;
        Ok(self.run(operation, a, b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn test_run_attaches_trace() {
        let evaluation = Calculator::new().run(Operation::Add, 5, 3).unwrap();
        assert_eq!(evaluation.outcome(), Outcome::Integer(8));
        assert_eq!(evaluation.b(), Some(3));
        let trace = evaluation.trace().unwrap();
        assert_eq!(trace.result(), Some(evaluation.outcome()));
    }

    #[test]
    fn test_without_trace() {
        let evaluation = Calculator::without_trace()
            .run(Operation::Multiply, 6, 7)
            .unwrap();
        assert_eq!(evaluation.outcome(), Outcome::Integer(42));
        assert!(evaluation.trace().is_none());
    }

    #[test]
    fn test_unary_drops_second_operand() {
        let evaluation = Calculator::new().run(Operation::SetBits, 7, 99).unwrap();
        assert_eq!(evaluation.b(), None);
        assert_eq!(evaluation.outcome(), Outcome::Integer(3));
    }

    #[test]
    fn test_core_errors_skip_the_trace() {
        assert_eq!(
            Calculator::new().run(Operation::Divide, 1, 0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Calculator::new().run(Operation::ModPower, 13, 6),
            Err(ArithmeticError::InvalidDivisor { divisor: 6 })
        );
    }

    #[test]
    fn test_run_raw() {
        let calc = Calculator::new();
        let evaluation = calc.run_raw("and", "0b1100", Some("0xA")).unwrap();
        assert_eq!(evaluation.outcome(), Outcome::Integer(8));

        assert_eq!(
            calc.run_raw("modulo", "1", Some("2")),
            Err(CalcError::Input(InputError::UnknownOperation {
                name: "modulo".to_owned()
            }))
        );
        assert_eq!(
            calc.run_raw("divide", "4", Some("0")),
            Err(CalcError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert!(matches!(
            calc.run_raw("add", "4", Some("four")),
            Err(CalcError::Input(InputError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_serializes_for_presentation() {
        let evaluation = Calculator::new().run(Operation::Even, 4, 0).unwrap();
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["operation"], "even");
        assert_eq!(json["outcome"], true);
        assert!(json.get("b").is_none());
        assert_eq!(json["trace"]["steps"][0]["kind"], "narrative");
    }
}
