//! Arithmetic primitives and the operator kind.
//!
//! The four primitives are pure and referentially transparent: each
//! returns the exact IEEE-754 double-precision result with no
//! special-casing, except [`divide`], which fails on a zero divisor
//! instead of producing infinity or NaN.

use crate::core::error::{ArithmeticError, ParseOperatorError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Add two values.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two values.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`ArithmeticError::DivisionByZero`] when `b == 0` rather
/// than returning infinity or NaN.
///
/// # Example
///
/// ```rust
/// use tally::core::{divide, ArithmeticError};
///
/// assert_eq!(divide(10.0, 2.0), Ok(5.0));
/// assert_eq!(divide(10.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// The binary operator kinds the calculator supports.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
/// assert_eq!(Operator::Multiply.symbol(), "×");
/// assert_eq!("divide".parse::<Operator>(), Ok(Operator::Divide));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Get the operator's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Get the symbol used on the display's history line.
    ///
    /// Subtract renders as U+2212 minus sign, not the ASCII hyphen.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00D7}",
            Self::Divide => "\u{00F7}",
        }
    }

    /// Apply the operator to a pair of operands.
    ///
    /// Dispatches to the arithmetic primitives; only division can fail.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
        }
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(ParseOperatorError::UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_basic() {
        assert_eq!(add(2.0, 3.0), 5.0);
    }

    #[test]
    fn add_negative_numbers() {
        assert_eq!(add(-2.0, -3.0), -5.0);
    }

    #[test]
    fn subtract_basic() {
        assert_eq!(subtract(5.0, 2.0), 3.0);
    }

    #[test]
    fn subtract_crossing_zero() {
        assert_eq!(subtract(2.0, 5.0), -3.0);
    }

    #[test]
    fn multiply_basic() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
    }

    #[test]
    fn multiply_by_zero() {
        assert_eq!(multiply(5.0, 0.0), 0.0);
    }

    #[test]
    fn divide_basic() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
    }

    #[test]
    fn divide_decimal_result() {
        assert_eq!(divide(5.0, 2.0), Ok(2.5));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(divide(10.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_by_negative_zero_fails() {
        assert_eq!(divide(1.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn operator_apply_dispatches() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(
            Operator::Divide.apply(6.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn operator_parses_from_name() {
        assert_eq!("add".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("subtract".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!("multiply".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("divide".parse::<Operator>(), Ok(Operator::Divide));
        assert!("modulo".parse::<Operator>().is_err());
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn operator_serializes_to_its_name() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let back: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operator::Multiply);
    }
}
