//! Centralized constants for the Parley workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Layout Defaults
// =============================================================================

/// Default share of the terminal height given to the chat panel.
pub const DEFAULT_VERTICAL_RATIO: f64 = 1.0 / 3.0;

/// Default share of the upper area width given to the side panel.
pub const DEFAULT_HORIZONTAL_RATIO: f64 = 0.25;

/// The side panel is shown at startup unless configured otherwise.
pub const DEFAULT_SIDE_PANEL_VISIBLE: bool = true;

// =============================================================================
// Chat Input Defaults
// =============================================================================

/// Column where wrapped chat lines start (inside the left border).
pub const DEFAULT_CHAT_LEFT_MARGIN: u16 = 1;

/// Smallest accepted chat left margin; column 0 is the chat border.
pub const MIN_CHAT_LEFT_MARGIN: u16 = 1;

/// Largest accepted chat left margin.
pub const MAX_CHAT_LEFT_MARGIN: u16 = 8;

/// Prompt drawn at the start of the chat input area.
pub const DEFAULT_CHAT_PROMPT: &str = ">";

/// Longest accepted chat prompt, in characters.
pub const MAX_CHAT_PROMPT_CHARS: usize = 4;

// =============================================================================
// Runtime Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the modifier-key channel feeding the shift listener.
/// Events beyond this are dropped; only the latest state matters.
pub const DEFAULT_MODIFIER_CHANNEL_CAPACITY: usize = 32;

/// File name of the rolling log written under the log directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "parley.log";
