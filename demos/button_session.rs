//! Button Session
//!
//! This example demonstrates driving the calculator the way a button
//! grid would: each click carries a digit value or an action name,
//! resolves to one state-machine operation, and the display is
//! re-rendered afterward.
//!
//! Run with: cargo run --example button_session

use tally::core::Calculator;
use tally::display::render;
use tally::input::Button;

fn press(calc: &mut Calculator, label: &str, button: Button) {
    button.apply(calc);
    let frame = render(calc);
    println!("[{label:>11}]  display: {:<24} history: {}", frame.text, frame.history);
}

fn main() {
    println!("=== Button Session Example ===\n");

    let mut calc = Calculator::new();

    // 12 + 7.5 =
    press(&mut calc, "1", Button::Digit('1'));
    press(&mut calc, "2", Button::Digit('2'));
    press(&mut calc, "add", Button::from_action("add").unwrap());
    press(&mut calc, "7", Button::Digit('7'));
    press(&mut calc, "decimal", Button::from_action("decimal").unwrap());
    press(&mut calc, "5", Button::Digit('5'));
    press(&mut calc, "equals", Button::from_action("equals").unwrap());

    // Divide the result by zero, then recover.
    press(&mut calc, "divide", Button::from_action("divide").unwrap());
    press(&mut calc, "0", Button::Digit('0'));
    press(&mut calc, "equals", Button::from_action("equals").unwrap());
    press(&mut calc, "4", Button::Digit('4'));
    press(&mut calc, "sqrt", Button::from_action("sqrt").unwrap());

    println!("\n=== Example Complete ===");
}
