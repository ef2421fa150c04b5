//! The arithmetic engine: a single accumulator and the operations on it.
//!
//! The engine knows nothing about tokens, formatting or pending operators.
//! Every operation acts on the accumulator and returns its new value.

use super::error::ArithmeticError;
use super::operator::Operator;

/// Running numeric accumulator.
///
/// # Example
///
/// ```rust
/// use calcmind::core::{ArithmeticError, Engine};
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.add(5.0), 5.0);
/// assert_eq!(engine.multiply(3.0), 15.0);
/// assert_eq!(engine.divide(0.0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(engine.current_value(), 15.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Engine {
    current_value: f64,
}

impl Engine {
    /// Create an engine with the accumulator at `0.0`.
    pub fn new() -> Self {
        Self { current_value: 0.0 }
    }

    /// The accumulator's value.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Load a value into the accumulator, replacing whatever it held.
    pub fn set_value(&mut self, value: f64) {
        self.current_value = value;
    }

    pub fn add(&mut self, value: f64) -> f64 {
        self.current_value += value;
        self.current_value
    }

    pub fn subtract(&mut self, value: f64) -> f64 {
        self.current_value -= value;
        self.current_value
    }

    pub fn multiply(&mut self, value: f64) -> f64 {
        self.current_value *= value;
        self.current_value
    }

    /// Divide the accumulator by `value`.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when `value` is zero,
    /// leaving the accumulator as it was.
    pub fn divide(&mut self, value: f64) -> Result<f64, ArithmeticError> {
        if value == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.current_value /= value;
        Ok(self.current_value)
    }

    /// Replace the accumulator with its square root.
    ///
    /// Fails with [`ArithmeticError::NegativeRadicand`] when the accumulator
    /// is negative, leaving it as it was.
    pub fn sqrt(&mut self) -> Result<f64, ArithmeticError> {
        if self.current_value < 0.0 {
            return Err(ArithmeticError::NegativeRadicand);
        }
        self.current_value = self.current_value.sqrt();
        Ok(self.current_value)
    }

    /// Replace the accumulator with "accumulator percent of `base`".
    ///
    /// ```rust
    /// use calcmind::core::Engine;
    ///
    /// let mut engine = Engine::new();
    /// engine.set_value(10.0);
    /// assert_eq!(engine.percent(200.0), 20.0);
    /// ```
    pub fn percent(&mut self, base: f64) -> f64 {
        self.current_value = base * self.current_value / 100.0;
        self.current_value
    }

    /// Reset the accumulator to `0.0`.
    pub fn clear(&mut self) {
        self.current_value = 0.0;
    }

    /// Load `lhs` and apply `operator` with `rhs`.
    ///
    /// On failure the accumulator holds `lhs`.
    pub fn evaluate(
        &mut self,
        lhs: f64,
        operator: Operator,
        rhs: f64,
    ) -> Result<f64, ArithmeticError> {
        self.set_value(lhs);
        match operator {
            Operator::Add => Ok(self.add(rhs)),
            Operator::Subtract => Ok(self.subtract(rhs)),
            Operator::Multiply => Ok(self.multiply(rhs)),
            Operator::Divide => self.divide(rhs),
        }
    }
}
