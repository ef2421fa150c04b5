//! Validation of calculator configuration using Validation.

use super::violations::ConfigViolation;
use super::CalculatorConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Validate a configuration, accumulating ALL violations.
/// Returns Validation::Success(()) if every check passes.
pub fn validate(config: &CalculatorConfig) -> Check {
    let checks = vec![
        check_message("division_by_zero", &config.division_by_zero_message),
        check_message("negative_radicand", &config.negative_radicand_message),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_message(field: &'static str, message: &str) -> Check {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Validation::fail(ConfigViolation::EmptyMessage { field })
    } else if trimmed.parse::<f64>().is_ok() {
        Validation::fail(ConfigViolation::NumericMessage {
            field,
            message: message.to_string(),
        })
    } else {
        Validation::success(())
    }
}
