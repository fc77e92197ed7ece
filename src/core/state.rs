//! The keystroke-accumulation state machine.
//!
//! [`Calculator`] turns sequential digit and action events into a running
//! calculation. The operand being typed is held as *text* until a commit
//! point (an operator, equals, or a unary operation) so that partial
//! literals like `"3."` can exist without yet being a valid number.
//!
//! Recoverable conditions (division by zero, square overflow, square
//! root of a negative) land in the `error` field as a [`SoftError`]
//! rather than unwinding; the machine stays usable and the next digit
//! entry clears the error while leaving any pending operation intact.

use crate::core::error::{ArithmeticError, SoftError};
use crate::core::Operator;
use crate::display::format_value;
use serde::{Deserialize, Serialize};

/// Maximum digit characters in the typed operand (sign and decimal
/// point excluded). Further digits are silently ignored.
pub const MAX_OPERAND_DIGITS: usize = 16;

/// Squaring fails with a soft overflow once the result magnitude
/// exceeds this. Independent of the display's scientific-notation
/// threshold, which happens to share the constant.
const SQUARE_OVERFLOW_LIMIT: f64 = 1e15;

/// A four-function calculator's input state.
///
/// There is exactly one instance per session, owned by the front end
/// that drives it and mutated in place by every input operation. State
/// is reset wholesale only by [`clear_all`](Calculator::clear_all).
///
/// # Example
///
/// ```rust
/// use tally::core::{Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.input_digit('5');
/// calc.perform_operation(Operator::Add);
/// calc.input_digit('3');
/// calc.perform_equals();
/// assert_eq!(calc.current(), "8");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Calculator {
    current: String,
    previous: Option<f64>,
    operation: Option<Operator>,
    waiting_for_new_operand: bool,
    error: Option<SoftError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in its initial state: `current` is `"0"`,
    /// nothing pending, no error.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operation: None,
            waiting_for_new_operand: false,
            error: None,
        }
    }

    /// The operand currently being typed, as text.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The committed left operand of a pending binary operation.
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// The pending binary operator, if any.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the next digit starts a fresh operand rather than
    /// appending to `current`.
    pub fn is_waiting_for_new_operand(&self) -> bool {
        self.waiting_for_new_operand
    }

    /// The soft error to display in place of the operand, if any.
    pub fn error(&self) -> Option<SoftError> {
        self.error
    }

    fn digit_count(&self) -> usize {
        self.current.chars().filter(|c| c.is_ascii_digit()).count()
    }

    /// The typed operand as a number, when it parses as one.
    ///
    /// Partial literals (`""`, `"-"`) do not parse; commit points treat
    /// them as uncommitted input and do nothing.
    fn operand(&self) -> Option<f64> {
        self.current.parse().ok()
    }

    /// Enter one digit (`'0'`–`'9'`).
    ///
    /// Starts a fresh operand when one is awaited, replaces a lone
    /// leading `"0"`, and silently ignores digits past the
    /// [`MAX_OPERAND_DIGITS`] cap. Always clears any soft error.
    pub fn input_digit(&mut self, digit: char) {
        if self.waiting_for_new_operand {
            self.current = digit.to_string();
            self.waiting_for_new_operand = false;
        } else if self.current == "0" {
            if digit != '0' {
                self.current = digit.to_string();
            }
        } else if self.digit_count() < MAX_OPERAND_DIGITS {
            self.current.push(digit);
        }
        self.error = None;
    }

    /// Enter the decimal point.
    ///
    /// Starts `"0."` when a fresh operand is awaited; otherwise appends
    /// `'.'` only if `current` does not already contain one.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_new_operand {
            self.current = "0.".to_string();
            self.waiting_for_new_operand = false;
            self.error = None;
            return;
        }
        if !self.current.contains('.') {
            self.current.push('.');
            self.error = None;
        }
    }

    /// Reset every field to its initial default.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Reset only the typed operand (and any soft error), leaving the
    /// pending operation untouched.
    pub fn clear_entry(&mut self) {
        self.current = "0".to_string();
        self.error = None;
    }

    /// Remove the last character of the typed operand.
    ///
    /// A no-op while a fresh operand is awaited; collapses to `"0"`
    /// when the last character is removed.
    pub fn backspace(&mut self) {
        if self.waiting_for_new_operand {
            return;
        }
        if self.current.chars().count() == 1 || self.current == "0" {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
    }

    /// Flip the sign of the typed operand. No-op on `"0"` or empty.
    pub fn toggle_sign(&mut self) {
        if self.current == "0" || self.current.is_empty() {
            return;
        }
        if let Some(unsigned) = self.current.strip_prefix('-') {
            self.current = unsigned.to_string();
        } else {
            self.current.insert(0, '-');
        }
    }

    /// Replace the operand with `value / 100`.
    pub fn input_percent(&mut self) {
        let Some(value) = self.operand() else {
            return;
        };
        self.current = format_value(value / 100.0);
    }

    /// Replace the operand with `1 / value`.
    ///
    /// Sets the soft error `"Cannot divide by zero"` for a zero
    /// operand, leaving `current` unchanged.
    pub fn input_reciprocal(&mut self) {
        let Some(value) = self.operand() else {
            return;
        };
        if value == 0.0 {
            self.error = Some(SoftError::DivisionByZero);
            return;
        }
        self.current = format_value(1.0 / value);
    }

    /// Replace the operand with its square.
    ///
    /// Sets the soft error `"Overflow"` when the result magnitude
    /// exceeds `1e15`, leaving `current` unchanged.
    pub fn input_square(&mut self) {
        let Some(value) = self.operand() else {
            return;
        };
        let result = value * value;
        if result.abs() > SQUARE_OVERFLOW_LIMIT {
            self.error = Some(SoftError::Overflow);
            return;
        }
        self.current = format_value(result);
    }

    /// Replace the operand with its square root.
    ///
    /// Sets the soft error `"Invalid input"` for a negative operand,
    /// leaving `current` unchanged.
    pub fn input_sqrt(&mut self) {
        let Some(value) = self.operand() else {
            return;
        };
        if value < 0.0 {
            self.error = Some(SoftError::InvalidInput);
            return;
        }
        self.current = format_value(value.sqrt());
    }

    /// Press a binary operator key.
    ///
    /// Three cases:
    /// - An operator is pending and no right operand has been typed
    ///   yet: the pending operator is simply replaced.
    /// - An operator is pending and a right operand has been typed:
    ///   the pending operation is evaluated; its result becomes both
    ///   the display text and the new left operand. Division by zero
    ///   restores the display to the left operand's text and keeps the
    ///   pending operation intact.
    /// - First operator press: the typed operand is committed as the
    ///   left operand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Calculator, Operator};
    ///
    /// let mut calc = Calculator::new();
    /// calc.input_digit('2');
    /// calc.perform_operation(Operator::Add);
    /// // Changed my mind before typing the next number:
    /// calc.perform_operation(Operator::Multiply);
    /// assert_eq!(calc.operation(), Some(Operator::Multiply));
    /// assert_eq!(calc.previous(), Some(2.0));
    /// ```
    pub fn perform_operation(&mut self, next: Operator) {
        let Some(input) = self.operand() else {
            return;
        };

        if self.operation.is_some() && self.waiting_for_new_operand {
            self.operation = Some(next);
            return;
        }

        if let (Some(prev), Some(op)) = (self.previous, self.operation) {
            match op.apply(prev, input) {
                Ok(result) => {
                    self.current = format_value(result);
                    self.previous = Some(result);
                }
                Err(ArithmeticError::DivisionByZero) => {
                    self.error = Some(SoftError::DivisionByZero);
                    self.current = format_value(prev);
                    self.waiting_for_new_operand = true;
                    return;
                }
            }
        } else {
            self.previous = Some(input);
        }

        self.waiting_for_new_operand = true;
        self.operation = Some(next);
    }

    /// Press equals.
    ///
    /// A no-op when no operation is pending. Otherwise evaluates the
    /// pending operation; on division by zero the display is restored
    /// to the left operand's text. Either way the pending operation is
    /// cleared and the next digit starts a fresh operand (while a
    /// subsequent operator chains from the displayed result).
    pub fn perform_equals(&mut self) {
        let (Some(prev), Some(op)) = (self.previous, self.operation) else {
            return;
        };
        let Some(input) = self.operand() else {
            return;
        };

        match op.apply(prev, input) {
            Ok(result) => self.current = format_value(result),
            Err(ArithmeticError::DivisionByZero) => {
                self.error = Some(SoftError::DivisionByZero);
                self.current = format_value(prev);
            }
        }

        self.previous = None;
        self.operation = None;
        self.waiting_for_new_operand = true;
    }
}
