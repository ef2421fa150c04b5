//! Pure calculator core.
//!
//! This module contains everything that does not touch a view:
//! - The arithmetic engine and its domain errors
//! - Binary operators and key tokens
//! - Display formatting of values
//!
//! Nothing here logs or renders. The controller is the imperative shell
//! around this core.

mod engine;
mod error;
mod format;
mod operator;
mod token;

pub use engine::Engine;
pub use error::ArithmeticError;
pub use format::format_value;
pub use operator::Operator;
pub use token::{Token, TokenError};
