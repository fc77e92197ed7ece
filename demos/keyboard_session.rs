//! Keyboard Session
//!
//! This example demonstrates the keyboard map: a stream of key strings
//! (as a keydown listener would deliver them) drives the calculator,
//! with unmapped keys ignored.
//!
//! Run with: cargo run --example keyboard_session

use tally::core::Calculator;
use tally::display::render;
use tally::input::Button;

fn main() {
    println!("=== Keyboard Session Example ===\n");

    let mut calc = Calculator::new();
    let keys = [
        "1", "0", "0", "/", "8", "Enter", // 100 / 8
        "x", "3", "=", // chain: * 3
        "Backspace", "Shift", // Backspace is a no-op here, Shift unmapped
        "%",
    ];

    for key in keys {
        let Some(button) = Button::from_key(key) else {
            println!("{key:>9}  (ignored)");
            continue;
        };
        button.apply(&mut calc);
        let frame = render(&calc);
        println!("{key:>9}  display: {:<12} history: {}", frame.text, frame.history);
    }

    println!("\n=== Example Complete ===");
}
