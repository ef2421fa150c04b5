//! End-to-end key sequences through the public controller API.

use calcmind::controller::{Controller, EntryMode};
use calcmind::core::Operator;

fn press(tokens: &[&str]) -> Controller<Vec<String>> {
    let mut controller = Controller::with_view(Vec::new());
    controller.feed(tokens).unwrap();
    controller
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    let controller = press(&["5", "+", "3", "+", "2", "="]);
    assert_eq!(controller.display(), "10.0");
}

#[test]
fn percent_with_additive_operator_takes_share_of_first_operand() {
    let mut controller = press(&["1", "0", "0", "+", "1", "0", "%"]);
    assert_eq!(controller.display(), "10.0");

    controller.process("=").unwrap();
    assert_eq!(controller.display(), "110.0");
}

#[test]
fn percent_with_multiplicative_operator_is_a_fraction() {
    let mut controller = press(&["5", "0", "*", "1", "0", "%"]);
    assert_eq!(controller.display(), "0.1");

    controller.process("=").unwrap();
    assert_eq!(controller.display(), "5.0");
}

#[test]
fn leading_zero_is_replaced() {
    let controller = press(&["5"]);
    assert_eq!(controller.display(), "5");
}

#[test]
fn point_after_zero_is_accepted_once() {
    let controller = press(&["."]);
    assert_eq!(controller.display(), "0.");

    let controller = press(&[".", "."]);
    assert_eq!(controller.display(), "0.");
    assert_eq!(controller.view(), &vec!["0."]);
}

#[test]
fn division_by_zero_recovers_on_next_digit() {
    let mut controller = press(&["5", "/", "0", "="]);
    assert_eq!(controller.display(), "Cannot divide by zero.");
    assert_eq!(controller.session().mode(), EntryMode::Error);
    assert_eq!(controller.session().pending(), None);
    assert_eq!(controller.engine().current_value(), 0.0);

    controller.process("7").unwrap();
    assert_eq!(controller.display(), "7");
}

#[test]
fn negative_square_root_recovers_on_next_digit() {
    let mut controller = press(&["0", "-", "9", "=", "sqrt"]);
    assert_eq!(
        controller.display(),
        "Cannot take the square root of a negative number."
    );

    controller.feed(["4", "sqrt"]).unwrap();
    assert_eq!(controller.display(), "2.0");
}

#[test]
fn result_is_replaced_by_next_digit() {
    let controller = press(&["2", "*", "3", "=", "4"]);
    assert_eq!(controller.display(), "4");
    assert_eq!(controller.session().mode(), EntryMode::Typing);
}

#[test]
fn result_feeds_next_operation() {
    let controller = press(&["2", "*", "3", "=", "+", "1", "="]);
    assert_eq!(controller.display(), "7.0");
}

#[test]
fn decimal_arithmetic() {
    let controller = press(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(controller.display(), "0.30000000000000004");
}

#[test]
fn large_results_use_exponent() {
    let controller = press(&[
        "1", "0", "0", "0", "0", "0", "0", "0", "0", "*", "1", "0", "0", "0", "0", "0", "0",
        "0", "0", "=",
    ]);
    assert_eq!(controller.display(), "1e+16");
}

#[test]
fn pending_operator_survives_square_root() {
    let controller = press(&["2", "*", "1", "6", "sqrt"]);
    assert_eq!(controller.display(), "4.0");
    assert_eq!(controller.session().pending_operator(), Some(Operator::Multiply));
    assert_eq!(controller.session().first_operand(), Some(2.0));
}

#[test]
fn each_key_renders_at_most_once() {
    let keys = ["1", "+", "2", "*", "3", "%", "=", "sqrt", "C", ".", ".", "=", "x"];
    let mut controller = Controller::with_view(Vec::<String>::new());

    for key in keys {
        let before = controller.view().len();
        controller.process(key).unwrap();
        assert!(controller.view().len() - before <= 1, "{key} rendered twice");
    }
}

#[test]
fn clear_after_error() {
    let controller = press(&["1", "/", "0", "=", "C"]);
    assert_eq!(controller.display(), "0");
    assert_eq!(controller.session().mode(), EntryMode::Typing);
}
