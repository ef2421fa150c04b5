//! Transient session state of the input state machine.
//!
//! The session owns the operand being typed, so the view never has to be
//! read back. All methods here are pure bookkeeping; arithmetic and
//! rendering live in the controller.

use crate::core::{format_value, Operator};
use serde::{Deserialize, Serialize};

/// Text of an empty entry.
pub const ZERO_ENTRY: &str = "0";

/// How the next digit interacts with the entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryMode {
    /// Digits append to the entry
    #[default]
    Typing,

    /// The entry shows a result; the next digit starts over
    Fresh,

    /// The display shows an error message; the next digit starts over
    Error,
}

impl EntryMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Typing => "Typing",
            Self::Fresh => "Fresh",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A binary operation waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// State carried between key presses.
///
/// `pending` couples the first operand with its operator, so one is never
/// present without the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    entry: String,
    display: String,
    pending: Option<PendingOperation>,
    mode: EntryMode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            entry: ZERO_ENTRY.to_string(),
            display: ZERO_ENTRY.to_string(),
            pending: None,
            mode: EntryMode::Typing,
        }
    }

    /// The operand text being typed, or the last result.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The last text rendered.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        !matches!(self.mode, EntryMode::Typing)
    }

    /// Numeric value of the entry. An entry that cannot be read counts as zero.
    pub fn entry_value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    /// Compute the entry after typing `ch`, or `None` if the key is ignored.
    ///
    /// A fresh entry restarts from `ch`. A bare zero is replaced rather than
    /// extended, and a second point is dropped. A point never stands alone:
    /// it is written as `0.`.
    pub fn next_entry(&self, ch: char) -> Option<String> {
        let base = if self.awaiting_fresh_entry() || self.entry == "0" || self.entry == "0.0" {
            ""
        } else {
            self.entry.as_str()
        };

        if ch == '.' {
            if base.contains('.') {
                return None;
            }
            if base.is_empty() {
                return Some("0.".to_string());
            }
        }

        Some(format!("{base}{ch}"))
    }

    pub(crate) fn set_entry(&mut self, entry: String) {
        self.entry = entry;
        self.mode = EntryMode::Typing;
    }

    /// Store a computed value as the entry, formatted for display.
    pub(crate) fn set_result(&mut self, value: f64) -> String {
        self.entry = format_value(value);
        self.entry.clone()
    }

    pub(crate) fn set_display(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }

    pub(crate) fn set_pending(&mut self, pending: Option<PendingOperation>) {
        self.pending = pending;
    }

    pub(crate) fn expect_fresh_entry(&mut self) {
        self.mode = EntryMode::Fresh;
    }

    /// Drop everything after an engine error; the entry reads as zero.
    pub(crate) fn fail(&mut self) {
        self.entry = ZERO_ENTRY.to_string();
        self.pending = None;
        self.mode = EntryMode::Error;
    }

    /// Back to the power-on state.
    pub(crate) fn reset(&mut self) {
        self.entry = ZERO_ENTRY.to_string();
        self.pending = None;
        self.mode = EntryMode::Typing;
    }
}
