//! End-to-end scenarios through the public API.

use bitcalc::{
    count_set_bits, is_power_of_two, mod_power_of_two, power, trace_for, ArithmeticError,
    CalcError, Calculator, InputError, Operation, Outcome, Step,
};

#[test]
fn five_plus_three() {
    let evaluation = Calculator::new().run(Operation::Add, 5, 3).unwrap();
    assert_eq!(evaluation.outcome(), Outcome::Integer(8));

    let trace = evaluation.trace().unwrap();
    assert_eq!(trace.width(), 4);
    let top = match &trace.steps()[0] {
        Step::Carry(column) => *column,
        other => panic!("expected a carry column, got {other:?}"),
    };
    assert_eq!(top.position, 3);
    assert_eq!(top.carry_out, 0);
    assert_eq!(trace.replay(), Some(Outcome::Integer(8)));
}

#[test]
fn five_times_three() {
    let trace = trace_for(Operation::Multiply, 5, 3);
    let contributing: Vec<usize> = trace
        .steps()
        .iter()
        .filter_map(Step::as_partial_product)
        .filter(|p| p.contributes)
        .map(|p| p.bit_index)
        .collect();
    assert_eq!(contributing, vec![0, 1]);
    assert_eq!(trace.result(), Some(Outcome::Integer(15)));
}

#[test]
fn thirteen_by_four() {
    let evaluation = Calculator::new().run(Operation::Divide, 13, 4).unwrap();
    assert_eq!(evaluation.outcome(), Outcome::Integer(3));

    let trace = evaluation.trace().unwrap();
    let last = trace.steps().iter().filter_map(Step::as_division).last().unwrap();
    assert_eq!(last.remainder_after, 1);
    assert_eq!(last.partial_quotient, 3);
    assert_eq!(trace.final_remainder(), Some(1));
}

#[test]
fn divide_by_zero_is_an_error_without_trace() {
    assert_eq!(
        Calculator::new().run(Operation::Divide, 13, 0),
        Err(ArithmeticError::DivisionByZero)
    );
    // The generator alone still answers, with no result
    let trace = trace_for(Operation::Divide, 13, 0);
    assert_eq!(trace.result(), None);
}

#[test]
fn powers() {
    assert_eq!(power(2.0, 10), 1024.0);
    assert_eq!(power(2.0, -1), 0.5);
    let evaluation = Calculator::new().run(Operation::Power, 2, 10).unwrap();
    assert_eq!(evaluation.outcome(), Outcome::Real(1024.0));
}

#[test]
fn unary_checks() {
    assert_eq!(count_set_bits(0), 0);
    assert_eq!(count_set_bits(255), 8);
    assert!(!is_power_of_two(0));
    assert!(is_power_of_two(1));
    assert!(!is_power_of_two(6));
}

#[test]
fn modulo_by_power_of_two() {
    assert_eq!(mod_power_of_two(13, 8), Ok(5));
    assert_eq!(
        mod_power_of_two(13, 6),
        Err(ArithmeticError::InvalidDivisor { divisor: 6 })
    );

    let trace = trace_for(Operation::ModPower, 13, 6);
    assert_eq!(trace.steps().len(), 1);
    assert_eq!(trace.result(), None);
}

#[test]
fn raw_text_boundary() {
    let calc = Calculator::without_trace();
    assert_eq!(
        calc.run_raw("setBits", "0xFF", None).unwrap().outcome(),
        Outcome::Integer(8)
    );
    assert_eq!(
        calc.run_raw("add", "", Some("3")),
        Err(CalcError::Input(InputError::Empty))
    );
    assert_eq!(
        calc.run_raw("subtract", "1", None),
        Err(CalcError::Input(InputError::MissingOperand {
            operation: Operation::Subtract
        }))
    );
    assert!(matches!(
        calc.run_raw("multiply", "3000000000", Some("2")),
        Err(CalcError::Input(InputError::OutOfRange { .. }))
    ));
}

#[test]
fn every_operation_serializes_with_its_trace() {
    for operation in Operation::ALL {
        let evaluation = match Calculator::new().run(operation, 12, 4) {
            Ok(evaluation) => evaluation,
            Err(err) => panic!("{operation} failed: {err}"),
        };
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["operation"], operation.name());
        assert!(json["trace"]["steps"].as_array().is_some_and(|s| !s.is_empty()));
    }
}
