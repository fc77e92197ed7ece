//! Front-end event dispatch.
//!
//! Shells (a button grid, a keyboard listener, a window's IPC channel)
//! speak in digit values, action names, and key strings. This module
//! resolves each of those to exactly one state-machine operation, so a
//! shell's event handler is a lookup followed by [`Button::apply`] and
//! a re-render.

use crate::core::{Calculator, Operator};
use serde::{Deserialize, Serialize};

/// One calculator button: a digit value or a named action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Button {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
    Backspace,
    ToggleSign,
    Percent,
    Reciprocal,
    Square,
    Sqrt,
}

impl Button {
    /// Resolve a button's action name, as carried by the shell's
    /// button elements. Digit buttons carry a value instead; use
    /// [`Button::Digit`] directly for those.
    ///
    /// Returns `None` for unknown names.
    pub fn from_action(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Operator(Operator::Add)),
            "subtract" => Some(Self::Operator(Operator::Subtract)),
            "multiply" => Some(Self::Operator(Operator::Multiply)),
            "divide" => Some(Self::Operator(Operator::Divide)),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "clear-entry" => Some(Self::ClearEntry),
            "backspace" => Some(Self::Backspace),
            "decimal" => Some(Self::Decimal),
            "percent" => Some(Self::Percent),
            "reciprocal" => Some(Self::Reciprocal),
            "square" => Some(Self::Square),
            "sqrt" => Some(Self::Sqrt),
            "toggle-sign" => Some(Self::ToggleSign),
            _ => None,
        }
    }

    /// Resolve a keyboard key string.
    ///
    /// Digits, `.`, `+`, `-`, `*`/`x`/`X`, `/`, `Enter`/`=`, `%`,
    /// `Escape`, and `Backspace` map to operations; everything else
    /// returns `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" | "x" | "X" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Self::Equals),
            "%" => Some(Self::Percent),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Some(Self::Digit(d)),
                    _ => None,
                }
            }
        }
    }

    /// Apply this button's operation to the calculator.
    pub fn apply(self, calc: &mut Calculator) {
        match self {
            Self::Digit(d) => calc.input_digit(d),
            Self::Decimal => calc.input_decimal(),
            Self::Operator(op) => calc.perform_operation(op),
            Self::Equals => calc.perform_equals(),
            Self::Clear => calc.clear_all(),
            Self::ClearEntry => calc.clear_entry(),
            Self::Backspace => calc.backspace(),
            Self::ToggleSign => calc.toggle_sign(),
            Self::Percent => calc.input_percent(),
            Self::Reciprocal => calc.input_reciprocal(),
            Self::Square => calc.input_square(),
            Self::Sqrt => calc.input_sqrt(),
        }
    }
}
