//! The button grid a front-end wires to the controller.

use crate::core::Token;

/// Buttons per row.
pub const COLUMNS: usize = 4;

/// Button labels in layout order, row by row.
pub const BUTTON_LABELS: [&str; 19] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "C", "0", ".", "+", //
    "%", "sqrt", "=",
];

/// A labelled button and its grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub token: Token,
    pub row: usize,
    pub column: usize,
}

/// Fixed calculator keypad.
///
/// A toolkit creates one widget per [`Button`] and sends its label to
/// [`Controller::process`](super::Controller::process) when pressed.
///
/// ```rust
/// use calcmind::controller::Keypad;
///
/// let keypad = Keypad::new();
/// assert_eq!(keypad.label_at(0, 3), Some("/"));
/// assert_eq!(keypad.label_at(4, 1), Some("sqrt"));
/// assert_eq!(keypad.label_at(4, 3), None);
/// ```
#[derive(Clone, Debug)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        let buttons = BUTTON_LABELS
            .iter()
            .enumerate()
            .filter_map(|(i, &label)| {
                label.parse::<Token>().ok().map(|token| Button {
                    label,
                    token,
                    row: i / COLUMNS,
                    column: i % COLUMNS,
                })
            })
            .collect();
        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.buttons.len().div_ceil(COLUMNS)
    }

    pub fn button_at(&self, row: usize, column: usize) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|b| b.row == row && b.column == column)
    }

    pub fn label_at(&self, row: usize, column: usize) -> Option<&'static str> {
        self.button_at(row, column).map(|b| b.label)
    }

    pub fn token_at(&self, row: usize, column: usize) -> Option<Token> {
        self.button_at(row, column).map(|b| b.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn every_label_is_a_token() {
        assert_eq!(Keypad::new().buttons().len(), BUTTON_LABELS.len());
    }

    #[test]
    fn grid_shape() {
        let keypad = Keypad::new();
        assert_eq!(keypad.rows(), 5);
        assert_eq!(keypad.token_at(0, 0), Some(Token::Digit(7)));
        assert_eq!(keypad.token_at(3, 0), Some(Token::Clear));
        assert_eq!(keypad.token_at(3, 3), Some(Token::Operator(Operator::Add)));
        assert_eq!(keypad.token_at(4, 2), Some(Token::Equals));
        assert_eq!(keypad.token_at(5, 0), None);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = BUTTON_LABELS.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), BUTTON_LABELS.len());
    }
}
