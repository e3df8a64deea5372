//! bitcalc - Bit-Level Arithmetic Calculator
//!
//! Integer arithmetic rebuilt from bitwise gates, with a step trace for every
//! operation showing the bit-level work that produced the answer.
//!
//! # Layers
//!
//! ```text
//! input       raw text  -> i32 operands, Operation     (InputError)
//! operation   Operation -> Outcome via the core         (ArithmeticError)
//! bits        add, subtract, multiply, divide, ... from NOT/XOR/AND/OR/shifts
//! trace       Operation, a, b -> Trace of Steps, replayable
//! calculator  evaluate, then trace on success
//! ```
//!
//! # Operations
//!
//! | Operation | Arity | Algorithm | Outcome |
//! |-----------|-------|-----------|---------|
//! | `add` | 2 | carry propagation | integer |
//! | `subtract` | 2 | borrow propagation | integer |
//! | `multiply` | 2 | shift-and-add | integer |
//! | `divide` | 2 | restoring division | integer |
//! | `and`, `or`, `xor` | 2 | gate | integer |
//! | `even` | 1 | `n & 1` | boolean |
//! | `setBits` | 1 | Kernighan | integer |
//! | `isPower` | 1 | `n & (n - 1)` | boolean |
//! | `modPower` | 2 | `a & (b - 1)` | integer |
//! | `power` | 2 | squaring | real |
//!
//! All integer operations work on 32-bit two's complement and wrap like
//! Rust's `wrapping_*` methods. `divide` truncates toward zero.
//!
//! # Example
//!
//! ```
//! use bitcalc::{Calculator, Operation, Outcome, Step};
//!
//! let evaluation = Calculator::new().run(Operation::Multiply, 5, 3).unwrap();
//! assert_eq!(evaluation.outcome(), Outcome::Integer(15));
//!
//! let trace = evaluation.trace().unwrap();
//! assert_eq!(trace.partial_products(), vec![5, 10]);
//! assert!(matches!(trace.steps()[0], Step::PartialProduct(_)));
//! assert_eq!(trace.replay(), Some(Outcome::Integer(15)));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod binary;
pub mod bits;
pub mod calculator;
pub mod error;
pub mod input;
pub mod operation;
pub mod trace;

pub use bits::{
    add, bitwise_and, bitwise_or, bitwise_xor, count_set_bits, divide, divide_with_remainder,
    is_even, is_power_of_two, mod_power_of_two, multiply, power, remainder, subtract,
};
pub use calculator::{Calculator, Evaluation};
pub use error::{ArithmeticError, CalcError, InputError};
pub use operation::{Operation, Outcome};
pub use trace::{
    trace_for, trace_for_lenient, trace_for_raw, BorrowStep, CarryStep, DivisionStep, Gate,
    NarrativeStep, PartialProductStep, SquaringStep, Step, Trace, TruthStep,
};
