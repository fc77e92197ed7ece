//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Arithmetic primitives and the `Operator` kind
//! - The `Calculator` input state machine
//! - The hard and soft error channels
//!
//! All logic in this module is pure and synchronous (no side effects),
//! following the "pure core, imperative shell" philosophy: front ends
//! own a `Calculator` and thread it through event handlers.

mod arith;
mod error;
mod state;

pub use arith::{add, divide, multiply, subtract, Operator};
pub use error::{ArithmeticError, ParseOperatorError, SoftError};
pub use state::{Calculator, MAX_OPERAND_DIGITS};
