//! Step-trace generation.
//!
//! A [`Trace`] is the full, eagerly computed record of how an operation
//! reaches its result, one [`Step`] per bit or per iteration. The generator
//! re-runs each algorithm itself instead of wrapping the core's answer, and
//! [`Trace::replay`] folds the steps back into a result so the two can be
//! checked against each other.
//!
//! # Shapes
//!
//! | Operation | Step | Order |
//! |-----------|------|-------|
//! | `add` | [`CarryStep`] | most significant position first |
//! | `subtract` | [`BorrowStep`] | most significant position first |
//! | `multiply` | [`PartialProductStep`] | ascending shift amount |
//! | `divide` | [`DivisionStep`] | dividend bits, most significant first |
//! | `and`, `or`, `xor` | [`TruthStep`] | ascending position |
//! | `power` | [`SquaringStep`] | outermost exponent first |
//! | `even`, `setBits`, `isPower`, `modPower` | [`NarrativeStep`] | narration order |
//!
//! # Example
//!
//! ```
//! use bitcalc::{trace_for, Operation, Outcome};
//!
//! let trace = trace_for(Operation::Add, 5, 3);
//! assert_eq!(trace.width(), 4);
//! assert_eq!(trace.operand_a(), "0101");
//! assert_eq!(trace.replay(), Some(Outcome::Integer(8)));
//! ```

mod long_division;
mod narrative;
mod ripple;
mod shift_add;
mod squaring;
mod truth;

use log::{debug, trace};
use serde::Serialize;

use crate::input;
use crate::operation::{Operation, Outcome};

/// The ordered, replayable record of one operation on one pair of operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    operation: Operation,
    a: i32,
    b: i32,
    /// Bit width processed.
    width: usize,
    operand_a: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operand_b: Option<String>,
    /// Padded result bits, for the per-position shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    result_bits: Option<String>,
    /// `None` when the operands admit no result (zero or invalid divisor).
    result: Option<Outcome>,
    steps: Vec<Step>,
}

impl Trace {
    /// The traced operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The operands as supplied.
    pub fn operands(&self) -> (i32, i32) {
        (self.a, self.b)
    }

    /// Number of bit positions (or recursion levels) the trace walks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// First operand as a zero-padded binary string.
    ///
    /// Division traces show magnitudes, since that is what they divide.
    pub fn operand_a(&self) -> &str {
        &self.operand_a
    }

    /// Second operand as a zero-padded binary string, absent for unary
    /// operations.
    pub fn operand_b(&self) -> Option<&str> {
        self.operand_b.as_deref()
    }

    /// Result bits padded to the trace width, for bitwise traces.
    pub fn result_bits(&self) -> Option<&str> {
        self.result_bits.as_deref()
    }

    /// The result the generator derived on its own.
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// The steps, in display order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Fold the steps back into a result.
    ///
    /// Returns `None` for narrative traces, which describe a check rather
    /// than accumulate a value, and for division by zero.
    pub fn replay(&self) -> Option<Outcome> {
        match self.operation {
            Operation::Add => Some(Outcome::Integer(ripple::fold_carries(
                self.steps.iter().filter_map(Step::as_carry),
            ))),
            Operation::Subtract => Some(Outcome::Integer(ripple::fold_borrows(
                self.steps.iter().filter_map(Step::as_borrow),
            ))),
            Operation::Multiply => Some(Outcome::Integer(shift_add::fold(
                self.steps.iter().filter_map(Step::as_partial_product),
            ))),
            Operation::Divide => {
                long_division::fold(self.a, self.b, self.division_steps())
                    .map(|(quotient, _)| Outcome::Integer(quotient))
            }
            Operation::And | Operation::Or | Operation::Xor => Some(Outcome::Integer(
                truth::fold(self.steps.iter().filter_map(Step::as_truth)),
            )),
            Operation::Power => Some(Outcome::Real(squaring::fold(
                self.steps.iter().filter_map(Step::as_squaring),
            ))),
            Operation::Even | Operation::SetBits | Operation::IsPower | Operation::ModPower => {
                None
            }
        }
    }

    /// Signed remainder left after the last division step.
    pub fn final_remainder(&self) -> Option<i32> {
        if self.operation != Operation::Divide {
            return None;
        }
        long_division::fold(self.a, self.b, self.division_steps()).map(|(_, remainder)| remainder)
    }

    /// Shifted multiplicands that contribute to a product, in ascending
    /// shift order. Empty for other operations.
    pub fn partial_products(&self) -> Vec<i32> {
        self.steps
            .iter()
            .filter_map(Step::as_partial_product)
            .filter(|step| step.contributes)
            .map(|step| step.shifted)
            .collect()
    }

    fn division_steps(&self) -> impl Iterator<Item = &DivisionStep> {
        self.steps.iter().filter_map(Step::as_division)
    }
}

/// One iteration of a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Step {
    /// Full-adder column.
    Carry(CarryStep),
    /// Full-subtractor column.
    Borrow(BorrowStep),
    /// One multiplier bit of shift-and-add.
    PartialProduct(PartialProductStep),
    /// One brought-down bit of long division.
    LongDivision(DivisionStep),
    /// One column of a bitwise truth table.
    Truth(TruthStep),
    /// One recursion level of exponentiation by squaring.
    Squaring(SquaringStep),
    /// A described check for the unary operations.
    Narrative(NarrativeStep),
}

impl Step {
    /// The carry column, if this is one.
    pub fn as_carry(&self) -> Option<&CarryStep> {
        match self {
            Step::Carry(step) => Some(step),
            _ => None,
        }
    }

    /// The borrow column, if this is one.
    pub fn as_borrow(&self) -> Option<&BorrowStep> {
        match self {
            Step::Borrow(step) => Some(step),
            _ => None,
        }
    }

    /// The partial product, if this is one.
    pub fn as_partial_product(&self) -> Option<&PartialProductStep> {
        match self {
            Step::PartialProduct(step) => Some(step),
            _ => None,
        }
    }

    /// The division step, if this is one.
    pub fn as_division(&self) -> Option<&DivisionStep> {
        match self {
            Step::LongDivision(step) => Some(step),
            _ => None,
        }
    }

    /// The truth-table column, if this is one.
    pub fn as_truth(&self) -> Option<&TruthStep> {
        match self {
            Step::Truth(step) => Some(step),
            _ => None,
        }
    }

    /// The squaring level, if this is one.
    pub fn as_squaring(&self) -> Option<&SquaringStep> {
        match self {
            Step::Squaring(step) => Some(step),
            _ => None,
        }
    }

    /// The narration, if this is one.
    pub fn as_narrative(&self) -> Option<&NarrativeStep> {
        match self {
            Step::Narrative(step) => Some(step),
            _ => None,
        }
    }
}

/// A full-adder column: `sum = a ^ b ^ carry_in`,
/// `carry_out = ((a ^ b) & carry_in) | (a & b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarryStep {
    /// Bit position, 0 being least significant.
    pub position: usize,
    pub bit_a: u8,
    pub bit_b: u8,
    /// `bit_a ^ bit_b`
    pub xor: u8,
    /// `bit_a & bit_b`
    pub and: u8,
    pub carry_in: u8,
    pub sum: u8,
    pub carry_out: u8,
}

/// A full-subtractor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowStep {
    /// Bit position, 0 being least significant.
    pub position: usize,
    pub bit_a: u8,
    pub bit_b: u8,
    pub borrow_in: u8,
    /// `bit_a - borrow_in`, which is `-1` when a zero bit must lend.
    pub difference: i8,
    /// Whether `difference < bit_b`.
    pub needs_borrow: bool,
    pub result: u8,
    pub borrow_out: u8,
}

/// One multiplier bit of shift-and-add multiplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProductStep {
    /// Position of the multiplier bit.
    pub bit_index: usize,
    pub multiplier_bit: u8,
    pub shift_amount: u32,
    /// `a << shift_amount` when the bit is set, otherwise `0`.
    pub shifted: i32,
    /// `shifted` as padded binary.
    pub binary: String,
    pub contributes: bool,
}

/// One brought-down dividend bit of restoring long division.
///
/// Remainders are magnitudes; the operand signs are applied on replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionStep {
    /// 1-based step number.
    pub step: usize,
    /// Position of the dividend bit, 0 being least significant.
    pub bit_index: usize,
    pub bit: u8,
    pub divisor: u64,
    pub remainder_before: u64,
    /// `(remainder_before << 1) | bit`
    pub brought_down: u64,
    /// Whether `brought_down >= divisor`.
    pub can_subtract: bool,
    pub quotient_bit: u8,
    pub remainder_after: u64,
    pub partial_quotient: u32,
}

/// The gate a truth table applies to each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Gate {
    And,
    Or,
    Xor,
}

impl Gate {
    /// Output bit for input bits `a` and `b`.
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            Gate::And => a & b,
            Gate::Or => a | b,
            Gate::Xor => a ^ b,
        }
    }

    /// Infix symbol: `&`, `|` or `^`.
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::And => "&",
            Gate::Or => "|",
            Gate::Xor => "^",
        }
    }

    /// The calculator operation this gate implements.
    pub fn operation(self) -> Operation {
        match self {
            Gate::And => Operation::And,
            Gate::Or => Operation::Or,
            Gate::Xor => Operation::Xor,
        }
    }
}

/// One column of a bitwise truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruthStep {
    pub gate: Gate,
    pub position: usize,
    pub bit_a: u8,
    pub bit_b: u8,
    pub output: u8,
}

/// One recursion level of exponentiation by squaring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquaringStep {
    /// Exponent handled at this level.
    pub exponent: u32,
    /// Whether the level multiplies the base back in.
    pub odd: bool,
    /// `base^exponent` once this level unwinds.
    pub value: f64,
}

/// A described check, used by the unary operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeStep {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    /// The number this step produced, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl NarrativeStep {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            expression: None,
            binary: None,
            detail: None,
            verdict: None,
            value: None,
        }
    }

    fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    fn binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn verdict(mut self, verdict: impl Into<String>) -> Self {
        self.verdict = Some(verdict.into());
        self
    }

    fn value(mut self, value: impl Into<i64>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Build the trace for `operation` on `a` and `b`.
///
/// Never panics: a zero divisor or invalid modulus still yields a trace whose
/// [`Trace::result`] is `None`. Unary operations ignore `b`.
pub fn trace_for(operation: Operation, a: i32, b: i32) -> Trace {
    debug!("tracing {operation} with a={a}, b={b}");
    let trace = match operation {
        Operation::Add => ripple::addition(a, b),
        Operation::Subtract => ripple::subtraction(a, b),
        Operation::Multiply => shift_add::multiplication(a, b),
        Operation::Divide => long_division::division(a, b),
        Operation::And => truth::table(Gate::And, a, b),
        Operation::Or => truth::table(Gate::Or, a, b),
        Operation::Xor => truth::table(Gate::Xor, a, b),
        Operation::Even => narrative::parity(a),
        Operation::SetBits => narrative::set_bits(a),
        Operation::IsPower => narrative::power_of_two(a),
        Operation::ModPower => narrative::mod_power(a, b),
        Operation::Power => squaring::exponentiation(a, b),
    };
    trace!(
        "{operation} trace: width {}, {} steps",
        trace.width,
        trace.steps.len()
    );
    trace
}

/// [`trace_for`] with absent operands replaced by `0`.
pub fn trace_for_lenient(operation: Operation, a: Option<i32>, b: Option<i32>) -> Trace {
    trace_for(operation, a.unwrap_or(0), b.unwrap_or(0))
}

/// [`trace_for_lenient`] over raw operand text.
///
/// For display paths that must show something while the user is still
/// typing: absent or unparseable operands trace as `0`.
pub fn trace_for_raw(operation: Operation, a: Option<&str>, b: Option<&str>) -> Trace {
    trace_for_lenient(
        operation,
        input::lenient_operand(a),
        input::lenient_operand(b),
    )
}
