//! The input state machine that turns key presses into display updates.

use super::session::{PendingOperation, Session, ZERO_ENTRY};
use super::view::{Headless, View};
use crate::config::{CalculatorConfig, TokenPolicy};
use crate::core::{ArithmeticError, Engine, Operator, Token, TokenError};
use tracing::{debug, info, trace, warn};

/// Calculator controller.
///
/// Owns the engine and the session state, and renders to a [`View`].
/// Every key press produces at most one render. Engine errors are turned
/// into a message on the display and never returned.
///
/// # Example
///
/// ```rust
/// use calcmind::controller::Controller;
///
/// let mut controller = Controller::with_view(Vec::<String>::new());
/// controller.feed(["5", "+", "3", "+", "2", "="]).unwrap();
///
/// assert_eq!(controller.display(), "10.0");
/// assert_eq!(controller.view(), &vec!["5", "3", "8.0", "2", "10.0"]);
/// ```
pub struct Controller<V: View = Headless> {
    engine: Engine,
    session: Session,
    config: CalculatorConfig,
    view: V,
}

impl Controller<Headless> {
    /// A controller with default settings and no view.
    pub fn new() -> Self {
        Self::with_view(Headless)
    }
}

impl Default for Controller<Headless> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> Controller<V> {
    /// A controller with default settings rendering to `view`.
    pub fn with_view(view: V) -> Self {
        Self::from_parts(CalculatorConfig::default(), view)
    }

    /// Callers outside the crate go through `ControllerBuilder`, which
    /// validates `config` first.
    pub(crate) fn from_parts(config: CalculatorConfig, view: V) -> Self {
        Self {
            engine: Engine::new(),
            session: Session::new(),
            config,
            view,
        }
    }

    /// Swap the render target, keeping engine and session state.
    pub fn attach<W: View>(self, view: W) -> Controller<W> {
        Controller {
            engine: self.engine,
            session: self.session,
            config: self.config,
            view,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The last text rendered.
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// Handle one key given as its label.
    ///
    /// Unknown labels leave the session untouched. They are dropped under
    /// [`TokenPolicy::Ignore`] and returned as an error under
    /// [`TokenPolicy::Reject`].
    pub fn process(&mut self, raw: &str) -> Result<(), TokenError> {
        match raw.parse::<Token>() {
            Ok(token) => {
                self.apply(token);
                Ok(())
            }
            Err(error) => match self.config.token_policy {
                TokenPolicy::Ignore => {
                    debug!(token = raw, "ignoring unrecognized token");
                    Ok(())
                }
                TokenPolicy::Reject => {
                    debug!(token = raw, "rejecting unrecognized token");
                    Err(error)
                }
            },
        }
    }

    /// Process labels in order, stopping at the first rejected one.
    pub fn feed<I>(&mut self, tokens: I) -> Result<(), TokenError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.process(token.as_ref())?;
        }
        Ok(())
    }

    /// Handle one key.
    pub fn apply(&mut self, token: Token) {
        trace!(token = %token, mode = self.session.mode().name(), "key pressed");

        let outcome = match token {
            Token::Digit(_) | Token::Point => {
                self.type_entry(token);
                Ok(())
            }
            Token::Operator(operator) => self.press_operator(operator),
            Token::Sqrt => self.press_sqrt(),
            Token::Percent => self.press_percent(),
            Token::Equals => self.press_equals(),
            Token::Clear => {
                self.clear();
                Ok(())
            }
        };

        if let Err(error) = outcome {
            self.recover(error);
        }
    }

    fn type_entry(&mut self, token: Token) {
        let Some(ch) = token.entry_char() else {
            return;
        };

        match self.session.next_entry(ch) {
            Some(entry) => {
                self.session.set_entry(entry.clone());
                self.render(&entry);
            }
            None => {
                debug!(entry = self.session.entry(), "entry already has a decimal point");
            }
        }
    }

    // A pending operation fires before the new operator replaces it.
    fn press_operator(&mut self, operator: Operator) -> Result<(), ArithmeticError> {
        let value = self.session.entry_value();
        let operand = match self.session.pending() {
            Some(pending) => self.evaluate(pending, value)?,
            None => value,
        };

        self.session
            .set_pending(Some(PendingOperation { operand, operator }));
        self.session.expect_fresh_entry();
        Ok(())
    }

    fn press_sqrt(&mut self) -> Result<(), ArithmeticError> {
        self.engine.set_value(self.session.entry_value());
        let result = self.engine.sqrt()?;

        self.show_value(result);
        self.session.expect_fresh_entry();
        Ok(())
    }

    /// With `+`/`-` pending the entry becomes that percent of the first
    /// operand; with `*`/`/` pending it becomes a fraction.
    fn press_percent(&mut self) -> Result<(), ArithmeticError> {
        let value = self.session.entry_value();
        self.engine.set_value(value);

        let result = match self.session.pending() {
            Some(pending) if pending.operator.is_additive() => {
                self.engine.percent(pending.operand)
            }
            Some(_) => self.engine.divide(100.0)?,
            None => {
                debug!(value, "percent without a pending operator");
                value
            }
        };

        self.show_value(result);
        self.session.expect_fresh_entry();
        Ok(())
    }

    fn press_equals(&mut self) -> Result<(), ArithmeticError> {
        let Some(pending) = self.session.pending() else {
            debug!("equals with nothing pending");
            return Ok(());
        };

        let value = self.session.entry_value();
        self.evaluate(pending, value)?;

        self.session.set_pending(None);
        self.session.expect_fresh_entry();
        Ok(())
    }

    fn clear(&mut self) {
        self.engine.clear();
        self.session.reset();
        info!("calculator cleared");
        self.render(ZERO_ENTRY);
    }

    fn evaluate(&mut self, pending: PendingOperation, rhs: f64) -> Result<f64, ArithmeticError> {
        let result = self
            .engine
            .evaluate(pending.operand, pending.operator, rhs)?;
        self.show_value(result);
        Ok(result)
    }

    fn recover(&mut self, error: ArithmeticError) {
        warn!(%error, "arithmetic error, resetting calculator");
        let message = self.config.message_for(&error).to_string();

        self.engine.clear();
        self.session.fail();
        self.render(&message);
    }

    fn show_value(&mut self, value: f64) {
        let text = self.session.set_result(value);
        self.render(&text);
    }

    fn render(&mut self, text: &str) {
        self.session.set_display(text);
        self.view.render(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::EntryMode;

    fn run(tokens: &[&str]) -> Controller<Vec<String>> {
        let mut controller = Controller::with_view(Vec::new());
        controller.feed(tokens).unwrap();
        controller
    }

    #[test]
    fn digit_on_zero_replaces_it() {
        let controller = run(&["5"]);
        assert_eq!(controller.display(), "5");
    }

    #[test]
    fn digits_append() {
        let controller = run(&["1", "2", ".", "5"]);
        assert_eq!(controller.display(), "12.5");
    }

    #[test]
    fn second_point_is_ignored_without_render() {
        let controller = run(&[".", "."]);
        assert_eq!(controller.display(), "0.");
        assert_eq!(controller.view().len(), 1);
    }

    #[test]
    fn addition() {
        let controller = run(&["1", "0", "+", "2", "0", "="]);
        assert_eq!(controller.display(), "30.0");
        assert_eq!(controller.engine().current_value(), 30.0);
    }

    #[test]
    fn subtraction() {
        let controller = run(&["5", "0", "-", "2", "0", "="]);
        assert_eq!(controller.display(), "30.0");
        assert_eq!(controller.engine().current_value(), 30.0);
    }

    #[test]
    fn operator_alone_does_not_render() {
        let controller = run(&["7", "*"]);
        assert_eq!(controller.view(), &vec!["7"]);
        assert_eq!(controller.session().first_operand(), Some(7.0));
        assert_eq!(controller.session().pending_operator(), Some(Operator::Multiply));
        assert!(controller.session().awaiting_fresh_entry());
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let controller = run(&["2", "+", "3", "*", "4", "="]);
        assert_eq!(controller.display(), "20.0");
    }

    #[test]
    fn repeated_operator_reuses_display() {
        let controller = run(&["5", "+", "+", "="]);
        // 5 + 5 fires on the second +, then 10 + 10.
        assert_eq!(controller.display(), "20.0");
    }

    #[test]
    fn equals_without_pending_is_a_no_op() {
        let controller = run(&["4", "="]);
        assert_eq!(controller.view(), &vec!["4"]);
        assert!(!controller.session().awaiting_fresh_entry());
    }

    #[test]
    fn equals_clears_pending() {
        let controller = run(&["6", "/", "3", "="]);
        assert_eq!(controller.display(), "2.0");
        assert_eq!(controller.session().pending(), None);
        assert_eq!(controller.session().mode(), EntryMode::Fresh);
    }

    #[test]
    fn sqrt_keeps_pending_operation() {
        let controller = run(&["1", "0", "+", "9", "sqrt"]);
        assert_eq!(controller.display(), "3.0");
        assert_eq!(controller.session().first_operand(), Some(10.0));

        let mut controller = controller;
        controller.process("=").unwrap();
        assert_eq!(controller.display(), "13.0");
    }

    #[test]
    fn sqrt_of_negative_shows_message() {
        let controller = run(&["0", "-", "4", "=", "sqrt"]);
        assert_eq!(
            controller.display(),
            "Cannot take the square root of a negative number."
        );
        assert_eq!(controller.engine().current_value(), 0.0);
        assert!(controller.session().mode().is_error());
    }

    #[test]
    fn percent_of_first_operand_for_subtraction() {
        let controller = run(&["2", "0", "0", "-", "5", "%", "="]);
        assert_eq!(controller.display(), "190.0");
    }

    #[test]
    fn percent_as_fraction_for_division() {
        let controller = run(&["8", "/", "5", "0", "%", "="]);
        assert_eq!(controller.display(), "16.0");
    }

    #[test]
    fn percent_without_pending_keeps_value() {
        let controller = run(&["4", "2", "%"]);
        assert_eq!(controller.display(), "42.0");
        assert!(controller.session().awaiting_fresh_entry());
    }

    #[test]
    fn divide_by_zero_in_chain_resets() {
        let controller = run(&["5", "/", "0", "+"]);
        assert_eq!(controller.display(), "Cannot divide by zero.");
        assert_eq!(controller.session().pending(), None);
        assert_eq!(controller.engine().current_value(), 0.0);
    }

    #[test]
    fn operator_after_error_starts_from_zero() {
        let controller = run(&["5", "/", "0", "=", "+", "3", "="]);
        assert_eq!(controller.display(), "3.0");
    }

    #[test]
    fn clear_resets_everything() {
        let controller = run(&["9", "*", "9", "C"]);
        assert_eq!(controller.display(), "0");
        assert_eq!(controller.session().pending(), None);
        assert_eq!(controller.session().mode(), EntryMode::Typing);
        assert_eq!(controller.engine().current_value(), 0.0);
    }

    #[test]
    fn digits_append_after_clear() {
        let controller = run(&["9", "=", "C", "1", "2"]);
        assert_eq!(controller.display(), "12");
    }

    #[test]
    fn unknown_tokens_are_ignored_by_default() {
        let controller = run(&["1", "x", "2", ""]);
        assert_eq!(controller.display(), "12");
        assert_eq!(controller.view().len(), 2);
    }

    #[test]
    fn reject_policy_reports_unknown_tokens() {
        let config = CalculatorConfig {
            token_policy: TokenPolicy::Reject,
            ..CalculatorConfig::default()
        };
        let mut controller = Controller::from_parts(config, Vec::<String>::new());

        controller.process("1").unwrap();
        assert_eq!(
            controller.process("??"),
            Err(TokenError::Unrecognized("??".to_string()))
        );
        assert_eq!(controller.display(), "1");
        assert_eq!(controller.session().entry(), "1");
    }

    #[test]
    fn feed_stops_at_first_rejected_token() {
        let config = CalculatorConfig {
            token_policy: TokenPolicy::Reject,
            ..CalculatorConfig::default()
        };
        let mut controller = Controller::from_parts(config, Vec::<String>::new());

        assert!(controller.feed(["1", "nope", "2"]).is_err());
        assert_eq!(controller.display(), "1");
    }

    #[test]
    fn attach_keeps_session() {
        let controller = run(&["3", "+"]);
        let mut controller = controller.attach(Vec::<String>::new());
        controller.feed(["4", "="]).unwrap();
        assert_eq!(controller.view(), &vec!["4", "7.0"]);
    }

    #[test]
    fn view_can_be_reset_and_taken_back() {
        let mut controller = run(&["1", "+"]);
        controller.view_mut().clear();
        controller.feed(["2", "="]).unwrap();

        let frames = controller.into_view();
        assert_eq!(frames, vec!["2", "3.0"]);
    }

    #[test]
    fn custom_error_message() {
        let config = CalculatorConfig {
            division_by_zero_message: "Error".to_string(),
            ..CalculatorConfig::default()
        };
        let mut controller = Controller::from_parts(config, Headless);
        controller.feed(["1", "/", "0", "="]).unwrap();
        assert_eq!(controller.display(), "Error");
    }
}
