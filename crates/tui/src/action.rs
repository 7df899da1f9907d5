//! Actions flowing from the input pump to the main loop.
//!
//! Responsibilities:
//! - Carry terminal events (key presses, resizes) into the main loop.
//! - Carry the exit request out of the key handlers.
//!
//! Does NOT handle:
//! - Shift press/release events, which bypass this channel and go straight
//!   to the shift listener.
//!
//! Invariants:
//! - Key and resize actions are never dropped by the pump.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key press.
    Input(KeyEvent),
    /// Terminal resized to (cols, rows).
    Resize(u16, u16),
    /// Leave the main loop.
    Quit,
}
