//! Configuration violations and the malformed-token policy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found while validating a [`CalculatorConfig`](super::CalculatorConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("The {field} message must not be empty")]
    EmptyMessage { field: &'static str },

    #[error("The {field} message '{message}' reads as a number and would be mistaken for a result")]
    NumericMessage {
        field: &'static str,
        message: String,
    },
}

/// What the controller does with text that is not a known key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Drop the token, leaving the session as it was
    #[default]
    Ignore,

    /// Drop the token and report it to the caller
    Reject,
}
