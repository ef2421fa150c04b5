//! Controller configuration.
//!
//! Configuration is validated with Stillwater's `Validation` type so every
//! problem is reported at once instead of one per build attempt.
//!
//! # Example
//!
//! ```rust
//! use calcmind::config::{ControllerBuilder, TokenPolicy};
//!
//! let mut controller = ControllerBuilder::new()
//!     .division_by_zero_message("Error")
//!     .token_policy(TokenPolicy::Reject)
//!     .build()
//!     .unwrap();
//!
//! controller.feed(["5", "/", "0", "="]).unwrap();
//! assert_eq!(controller.display(), "Error");
//! assert!(controller.process("x").is_err());
//! ```

pub mod builder;
pub mod error;
pub mod rules;
pub mod violations;

pub use builder::ControllerBuilder;
pub use error::BuildError;
pub use rules::validate;
pub use violations::{ConfigViolation, TokenPolicy};

use crate::core::ArithmeticError;
use serde::{Deserialize, Serialize};

/// Settings that shape how the controller reports errors and bad input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Shown after a division by zero
    pub division_by_zero_message: String,

    /// Shown after a square root of a negative number
    pub negative_radicand_message: String,

    /// Handling of text that is not a key
    pub token_policy: TokenPolicy,
}

impl CalculatorConfig {
    /// The text to render for an engine error.
    pub fn message_for(&self, error: &ArithmeticError) -> &str {
        match error {
            ArithmeticError::DivisionByZero => &self.division_by_zero_message,
            ArithmeticError::NegativeRadicand => &self.negative_radicand_message,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_by_zero_message: ArithmeticError::DivisionByZero.to_string(),
            negative_radicand_message: ArithmeticError::NegativeRadicand.to_string(),
            token_policy: TokenPolicy::Ignore,
        }
    }
}
