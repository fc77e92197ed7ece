//! Command-line front end.
//!
//! With arguments (`tally add 2 3`) one operation is computed against
//! the arithmetic primitives and printed; invalid numbers, a missing
//! operand, or an unknown operation terminate with a non-zero exit and
//! a message on stderr. With no arguments the binary falls back to a
//! REPL-style prompt loop with a `quit` sentinel.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::core::Operator;
use crate::display::format_value;

/// A four-function desk calculator.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Operation to perform: add, subtract, multiply or divide.
    /// Omit all arguments for interactive mode.
    pub operation: Option<String>,

    /// First operand.
    pub a: Option<f64>,

    /// Second operand.
    pub b: Option<f64>,
}

/// Run the CLI: one-shot when an operation was given, interactive
/// otherwise.
pub fn run(cli: Cli) -> Result<()> {
    let Some(name) = cli.operation else {
        return interactive();
    };

    let op: Operator = name.parse()?;
    let a = cli.a.context("missing first operand")?;
    let b = cli.b.context("missing second operand")?;
    debug!(op = op.name(), a, b, "computing one-shot operation");

    let result = op.apply(a, b)?;
    println!("Result: {}", format_value(result));
    Ok(())
}

/// Prompt loop over stdin. Ends on `quit` or EOF; every other failure
/// (bad numbers, unknown operation, division by zero) prints a line
/// and continues.
fn interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Calculator Interactive Mode");
    loop {
        let Some(op_line) = prompt(
            &mut lines,
            "Enter operation (add/subtract/multiply/divide) or \"quit\": ",
        )?
        else {
            break;
        };
        if op_line == "quit" {
            break;
        }

        let Some(a_line) = prompt(&mut lines, "Enter first number: ")? else {
            break;
        };
        let Some(b_line) = prompt(&mut lines, "Enter second number: ")? else {
            break;
        };

        let (Ok(a), Ok(b)) = (a_line.parse::<f64>(), b_line.parse::<f64>()) else {
            println!("Invalid numbers");
            continue;
        };
        let Ok(op) = op_line.parse::<Operator>() else {
            println!("Unknown operation");
            continue;
        };

        debug!(op = op.name(), a, b, "computing interactive operation");
        match op.apply(a, b) {
            Ok(result) => println!("Result: {}", format_value(result)),
            Err(err) => println!("Error: {err}"),
        }
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_parse_into_operation_and_operands() {
        let cli = Cli::parse_from(["tally", "add", "2", "3"]);
        assert_eq!(cli.operation.as_deref(), Some("add"));
        assert_eq!(cli.a, Some(2.0));
        assert_eq!(cli.b, Some(3.0));
    }

    #[test]
    fn no_arguments_means_interactive_mode() {
        let cli = Cli::parse_from(["tally"]);
        assert!(cli.operation.is_none());
    }

    #[test]
    fn non_numeric_operand_is_rejected_at_parse() {
        assert!(Cli::try_parse_from(["tally", "add", "two", "3"]).is_err());
    }

    #[test]
    fn one_shot_run_succeeds() {
        let cli = Cli::parse_from(["tally", "multiply", "6", "7"]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn unknown_operation_fails_run() {
        let cli = Cli::parse_from(["tally", "modulo", "6", "7"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn missing_operand_fails_run() {
        let cli = Cli::parse_from(["tally", "add", "6"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn division_by_zero_fails_run() {
        let cli = Cli::parse_from(["tally", "divide", "1", "0"]);
        assert!(run(cli).is_err());
    }
}
