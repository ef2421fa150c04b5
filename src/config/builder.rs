//! Builder for constructing validated controllers.

use crate::config::error::BuildError;
use crate::config::rules::validate;
use crate::config::violations::TokenPolicy;
use crate::config::CalculatorConfig;
use crate::controller::{Controller, Headless, View};
use stillwater::validation::Validation;

/// Builder for constructing controllers with a fluent API.
pub struct ControllerBuilder<V: View = Headless> {
    config: CalculatorConfig,
    view: V,
}

impl ControllerBuilder<Headless> {
    /// Create a new builder with default settings and no view.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            view: Headless,
        }
    }
}

impl Default for ControllerBuilder<Headless> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> ControllerBuilder<V> {
    /// Start from an existing configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the text shown after a division by zero.
    pub fn division_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.config.division_by_zero_message = message.into();
        self
    }

    /// Set the text shown after a square root of a negative number.
    pub fn negative_radicand_message(mut self, message: impl Into<String>) -> Self {
        self.config.negative_radicand_message = message.into();
        self
    }

    /// Set how unknown tokens are handled.
    pub fn token_policy(mut self, policy: TokenPolicy) -> Self {
        self.config.token_policy = policy;
        self
    }

    /// Set the render target.
    pub fn view<W: View>(self, view: W) -> ControllerBuilder<W> {
        ControllerBuilder {
            config: self.config,
            view,
        }
    }

    /// Build the controller.
    /// Returns an error listing every configuration violation.
    pub fn build(self) -> Result<Controller<V>, BuildError> {
        match validate(&self.config) {
            Validation::Success(_) => Ok(Controller::from_parts(self.config, self.view)),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
