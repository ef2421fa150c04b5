//! Calcmind: a pure calculator core behind an abstract view
//!
//! Calcmind follows a "pure core, imperative shell" split. The arithmetic
//! engine and token handling are plain functions over plain data, while the
//! controller owns the session state and pushes display text to a view.
//!
//! # Core Concepts
//!
//! - **Engine**: a single accumulator with fallible `divide` and `sqrt`
//! - **Tokens**: the keys of the keypad, parsed from their labels
//! - **Controller**: the input state machine tracking the pending operator,
//!   the first operand and whether the next digit starts a fresh entry
//! - **View**: a write-only render target for display text
//!
//! # Example
//!
//! ```rust
//! use calcmind::controller::Controller;
//!
//! let mut controller = Controller::new();
//!
//! controller.feed(["1", "0", "0", "+", "1", "0", "%"]).unwrap();
//! assert_eq!(controller.display(), "10.0");
//!
//! controller.process("=").unwrap();
//! assert_eq!(controller.display(), "110.0");
//!
//! controller.feed(["5", "/", "0", "="]).unwrap();
//! assert_eq!(controller.display(), "Cannot divide by zero.");
//!
//! controller.process("7").unwrap();
//! assert_eq!(controller.display(), "7");
//! ```

pub mod config;
pub mod controller;
pub mod core;

// Re-export commonly used types
pub use crate::config::{CalculatorConfig, ControllerBuilder, TokenPolicy};
pub use crate::controller::{Controller, Keypad, View};
pub use crate::core::{ArithmeticError, Engine, Operator, Token, TokenError};
