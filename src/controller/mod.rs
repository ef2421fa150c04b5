//! The imperative shell around the pure core.
//!
//! The controller interprets key tokens against the session state, drives
//! the engine, and pushes display text to a [`View`]. Data flows one way:
//! the view never feeds display text back into the controller.

mod keypad;
mod machine;
mod session;
mod view;

pub use keypad::{Button, Keypad, BUTTON_LABELS, COLUMNS};
pub use machine::Controller;
pub use session::{EntryMode, PendingOperation, Session, ZERO_ENTRY};
pub use view::{Callback, Headless, View};
