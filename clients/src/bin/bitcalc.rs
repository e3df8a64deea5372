//! `bitcalc-cli`: evaluates one calculator operation and prints its trace.
//!
//! **Usage:**
//! ```
//! bitcalc-cli [--format text|json] [--no-trace] [--compact] [--config <path>] [-v] <operation> <a> [b]
//! ```
//!
//! Operands accept decimal, `0b` binary and `0x` hex, with an optional sign.
//! Operands may start with `-`, so flags go before the operation.
//! Exits non-zero on unparseable input, division by zero, or an invalid
//! power-of-two divisor.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use bitcalc::{Calculator, Operation};
use bitcalc_clients::config::{ClientConfig, Format, Overrides};
use bitcalc_clients::render;
use clap::{ArgAction, Parser};
use log::{debug, info};

/// Evaluate a bit-level calculator operation.
#[derive(Parser)]
#[command(
    name = "bitcalc-cli",
    about = "Evaluate integer arithmetic from bitwise gates and show every step",
    allow_negative_numbers = true
)]
struct Args {
    /// Operation: add, subtract, multiply, divide, and, or, xor, even, setBits,
    /// modPower, isPower, power.
    operation: String,

    /// First operand.
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand (not needed by even, setBits, isPower).
    #[arg(allow_hyphen_values = true)]
    b: Option<String>,

    /// Output format; overrides the config file.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print the result without the step trace.
    #[arg(long)]
    no_trace: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(args.verbose)),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .init();

    let config = ClientConfig::resolve(
        args.config.as_deref(),
        Overrides {
            format: args.format,
            no_trace: args.no_trace,
            compact: args.compact,
        },
    )?;
    debug!("resolved configuration: {config:?}");

    let calculator = if config.output.trace {
        Calculator::new()
    } else {
        Calculator::without_trace()
    };
    let evaluation = calculator
        .run_raw(&args.operation, &args.a, args.b.as_deref())
        .with_context(|| {
            let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
            format!(
                "cannot evaluate `{} {} {}` (operations: {})",
                args.operation,
                args.a,
                args.b.as_deref().unwrap_or(""),
                names.join(", ")
            )
        })?;
    info!("evaluated {}", evaluation.operation());

    print!("{}", render::render(&evaluation, &config.output)?);
    if config.output.format == Format::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_operands_parse() {
        let args = Args::try_parse_from(["bitcalc-cli", "divide", "-13", "-4"]).unwrap();
        assert_eq!(args.a, "-13");
        assert_eq!(args.b.as_deref(), Some("-4"));

        let args = Args::try_parse_from(["bitcalc-cli", "add", "-0x5", "-0b101"]).unwrap();
        assert_eq!(args.a, "-0x5");
        assert_eq!(args.b.as_deref(), Some("-0b101"));

        let args = Args::try_parse_from(["bitcalc-cli", "setBits", "-0xFF"]).unwrap();
        assert_eq!(args.a, "-0xFF");
        assert_eq!(args.b, None);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "bitcalc-cli",
            "--format",
            "json",
            "--no-trace",
            "-vv",
            "even",
            "6",
        ])
        .unwrap();
        assert_eq!(args.b, None);
        assert_eq!(args.format, Some(Format::Json));
        assert!(args.no_trace);
        assert_eq!(default_log_level(args.verbose), "debug");
    }
}
