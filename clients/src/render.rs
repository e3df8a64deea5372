//! Output rendering for evaluations.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use bitcalc::{Evaluation, Step, Trace};

use crate::config::{Format, OutputConfig};

/// Render `evaluation` per `output`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(evaluation: &Evaluation, output: &OutputConfig) -> Result<String> {
    match output.format {
        Format::Text => Ok(text(evaluation)),
        Format::Json if output.pretty => {
            serde_json::to_string_pretty(evaluation).context("failed to serialize evaluation")
        }
        Format::Json => serde_json::to_string(evaluation).context("failed to serialize evaluation"),
    }
}

/// Human-readable rendering: headline, description, then one line per step.
pub fn text(evaluation: &Evaluation) -> String {
    let operation = evaluation.operation();
    let mut out = match evaluation.b() {
        Some(b) => format!("{operation}({}, {b}) = {}\n", evaluation.a(), evaluation.outcome()),
        None => format!("{operation}({}) = {}\n", evaluation.a(), evaluation.outcome()),
    };
    let _ = writeln!(out, "{}", evaluation.description());

    if let Some(trace) = evaluation.trace() {
        out.push('\n');
        write_trace(&mut out, trace);
    }
    out
}

fn write_trace(out: &mut String, trace: &Trace) {
    let _ = writeln!(out, "width  {}", trace.width());
    let _ = writeln!(out, "a      {}", trace.operand_a());
    if let Some(b) = trace.operand_b() {
        let _ = writeln!(out, "b      {b}");
    }
    if let Some(bits) = trace.result_bits() {
        let _ = writeln!(out, "result {bits}");
    }
    out.push('\n');
    for step in trace.steps() {
        let _ = writeln!(out, "{}", step_line(step));
    }
    if let Some(remainder) = trace.final_remainder() {
        let _ = writeln!(out, "remainder {remainder}");
    }
}

/// One line describing `step`.
pub fn step_line(step: &Step) -> String {
    match step {
        Step::Carry(c) => format!(
            "bit {:>2}: {} + {} + carry {} -> sum {}, carry {}",
            c.position, c.bit_a, c.bit_b, c.carry_in, c.sum, c.carry_out
        ),
        Step::Borrow(c) => format!(
            "bit {:>2}: {} - {} - borrow {} -> {}, borrow {}",
            c.position, c.bit_a, c.bit_b, c.borrow_in, c.result, c.borrow_out
        ),
        Step::PartialProduct(p) if p.contributes => format!(
            "bit {:>2} = 1: a << {} = {}",
            p.bit_index, p.shift_amount, p.binary
        ),
        Step::PartialProduct(p) => format!("bit {:>2} = 0: skipped", p.bit_index),
        Step::LongDivision(d) => format!(
            "step {:>2}: bring down {} -> {} {} {} -> q {}, r {}",
            d.step,
            d.bit,
            d.brought_down,
            if d.can_subtract { ">=" } else { "<" },
            d.divisor,
            d.quotient_bit,
            d.remainder_after
        ),
        Step::Truth(t) => format!(
            "bit {:>2}: {} {} {} = {}",
            t.position,
            t.bit_a,
            t.gate.symbol(),
            t.bit_b,
            t.output
        ),
        Step::Squaring(s) => format!(
            "exponent {:>2}{}: {}",
            s.exponent,
            if s.odd { " (odd)" } else { "" },
            s.value
        ),
        Step::Narrative(n) => {
            let mut line = format!("{}: {}", n.title, n.description);
            for extra in [&n.expression, &n.binary, &n.detail, &n.verdict]
                .into_iter()
                .flatten()
            {
                let _ = write!(line, "\n    {extra}");
            }
            line
        }
    }
}
