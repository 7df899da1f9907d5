//! Key classification, keybindings and modifier tracking.
//!
//! Responsibilities:
//! - Classify raw key codes and crossterm key events into dispatcher classes.
//! - Define the keybinding catalog consulted in COMMAND mode.
//! - Hold the shared shift flag written by the shift listener.
//!
//! Non-responsibilities:
//! - Mutating application state (handled by `App`).
//! - Reading from the terminal (handled by `runtime::input`).
//!
//! Invariants:
//! - Classification is total: every input maps to exactly one `KeyClass`.
//! - Keybinding resolution never mutates state and returns at most one binding.

pub mod classify;
pub mod keymap;
pub mod shift;

pub use classify::{KeyClass, UnknownKey, classify_code, classify_key};
pub use keymap::{Binding, KeyBindingTable, Keybinding};
pub use shift::{ShiftEvent, ShiftState};
