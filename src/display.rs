//! Pure display formatting.
//!
//! Turns core state into the two lines a front end renders after every
//! event: the main display text and a one-line history of the pending
//! operation. Formatting is a pure function of the value; the core
//! re-derives `current` through [`format_value`] after every numeric
//! result instead of persisting a formatted copy.

use crate::core::Calculator;
use serde::{Deserialize, Serialize};

/// Values at or above this magnitude render in scientific notation.
const SCI_UPPER: f64 = 1e15;

/// Nonzero values below this magnitude render in scientific notation.
const SCI_LOWER: f64 = 1e-10;

/// Format a numeric value for display.
///
/// Magnitudes at or above `1e15`, or nonzero magnitudes below `1e-10`,
/// render in scientific notation with 6 fractional digits; everything
/// else renders as the shortest round-trip decimal.
///
/// # Example
///
/// ```rust
/// use tally::display::format_value;
///
/// assert_eq!(format_value(8.0), "8");
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(1e15), "1.000000e+15");
/// assert_eq!(format_value(0.00000000002), "2.000000e-11");
/// ```
pub fn format_value(value: f64) -> String {
    if value.abs() >= SCI_UPPER || (value != 0.0 && value.abs() < SCI_LOWER) {
        format_exponential(value)
    } else {
        value.to_string()
    }
}

// std omits the '+' on nonnegative exponents; the display always
// carries an explicit exponent sign.
fn format_exponential(value: f64) -> String {
    let raw = format!("{value:.6e}");
    match raw.rsplit_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}

/// Format operand text for display.
///
/// Partial literals that do not yet parse as a number (`""`, `"-"`)
/// pass through unchanged; anything numeric is re-derived through
/// [`format_value`].
pub fn format_operand(text: &str) -> String {
    if text.is_empty() || text == "-" {
        return text.to_string();
    }
    match text.parse::<f64>() {
        Ok(value) => format_value(value),
        Err(_) => text.to_string(),
    }
}

/// What a front end shows after an event: display text plus the
/// one-line pending-operation history.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// The soft-error message when one is set, the formatted operand
    /// otherwise.
    pub text: String,
    /// `"<previous> <symbol>"` while an operation is pending, empty
    /// otherwise.
    pub history: String,
}

/// Render the calculator's state into a [`DisplayFrame`].
pub fn render(calc: &Calculator) -> DisplayFrame {
    let text = match calc.error() {
        Some(err) => err.to_string(),
        None => format_operand(calc.current()),
    };
    let history = match (calc.previous(), calc.operation()) {
        (Some(prev), Some(op)) => format!("{} {}", format_value(prev), op.symbol()),
        _ => String::new(),
    };
    DisplayFrame { text, history }
}
