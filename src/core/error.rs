//! Domain errors raised by the arithmetic engine.

use thiserror::Error;

/// Errors the engine signals instead of producing a value.
///
/// Both leave the accumulator untouched. They are caught by the controller
/// and never reach the view as anything other than a message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("Cannot take the square root of a negative number.")]
    NegativeRadicand,
}
