//! Keypad Wiring
//!
//! This example wires the calculator keypad to a controller the way a GUI
//! toolkit would: each button press sends its label, and the display is a
//! closure that receives every frame.
//!
//! Key concepts:
//! - Buttons addressed by grid position
//! - A `Callback` view as the render target
//! - Error recovery on the next digit
//!
//! Run with: cargo run --example keypad

use calcmind::controller::{Callback, Controller, Keypad};

fn main() {
    println!("=== Keypad Example ===\n");

    let keypad = Keypad::new();
    for row in 0..keypad.rows() {
        let labels: Vec<_> = (0..4).filter_map(|col| keypad.label_at(row, col)).collect();
        println!("  {}", labels.join("  "));
    }
    println!();

    let mut frames = Vec::new();
    {
        let mut controller = Controller::with_view(Callback(|text: &str| {
            frames.push(text.to_string());
        }));

        // 1 0 0 + 1 0 % =   then   5 / 0 =   then   7
        let presses = [
            (2, 0), (3, 1), (3, 1), (3, 3), (2, 0), (3, 1), (4, 0), (4, 2),
            (1, 1), (0, 3), (3, 1), (4, 2),
            (0, 0),
        ];
        for (row, col) in presses {
            if let Some(label) = keypad.label_at(row, col) {
                print!("[{label}] ");
                controller
                    .process(label)
                    .expect("keypad labels are always valid tokens");
            }
        }
        println!();
    }

    for frame in &frames {
        println!("display: {frame}");
    }

    println!("\n=== Example Complete ===");
}
