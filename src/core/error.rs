//! Error channels for the calculator core.
//!
//! There are two deliberately distinct channels:
//! - [`ArithmeticError`] is the hard failure returned by the arithmetic
//!   primitives and propagated with `?` by callers such as the CLI.
//! - [`SoftError`] is a recoverable condition the state machine stores in
//!   its `error` field and renders as display text. The machine remains
//!   usable afterward; the next digit entry clears it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard failures from the arithmetic primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Errors that can occur when parsing an operation name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseOperatorError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// Recoverable conditions displayed in place of the current operand.
///
/// These never unwind; the state machine sets its error field and keeps
/// the pending operation intact so the user can continue mid-expression.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Overflow")]
    Overflow,

    #[error("Invalid input")]
    InvalidInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_error_messages_are_fixed_strings() {
        assert_eq!(SoftError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(SoftError::Overflow.to_string(), "Overflow");
        assert_eq!(SoftError::InvalidInput.to_string(), "Invalid input");
    }

    #[test]
    fn arithmetic_error_message() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn soft_error_round_trips_through_serde() {
        let err = SoftError::Overflow;
        let json = serde_json::to_string(&err).unwrap();
        let back: SoftError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
