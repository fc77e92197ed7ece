//! Tally: a four-function desk calculator.
//!
//! The computational core is a handful of pure arithmetic primitives
//! plus an input-accumulation state machine that turns sequential
//! keystrokes and button presses into a running calculation. Front
//! ends are thin: they resolve an event to one state-machine operation
//! and re-render the display afterward.
//!
//! # Core Concepts
//!
//! - **Primitives**: `add`, `subtract`, `multiply`, `divide` — pure,
//!   with division by zero as a hard failure, never infinity or NaN
//! - **State machine**: [`core::Calculator`] — digit entry, operator
//!   chaining, unary operations, recoverable soft errors
//! - **Display**: pure formatting of state into display and history
//!   lines
//! - **Input**: button-action and keyboard-key dispatch for shells
//!
//! # Example
//!
//! ```rust
//! use tally::core::{Calculator, Operator};
//! use tally::display::render;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('5');
//! calc.perform_operation(Operator::Add);
//! calc.input_digit('3');
//! calc.perform_equals();
//!
//! let frame = render(&calc);
//! assert_eq!(frame.text, "8");
//! ```

pub mod cli;
pub mod core;
pub mod display;
pub mod input;

// Re-export commonly used types
pub use core::{Calculator, Operator, SoftError};
pub use display::{render, DisplayFrame};
pub use input::Button;
