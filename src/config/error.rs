//! Errors raised when building a controller.

use super::violations::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", summarize(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
