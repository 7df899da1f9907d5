//! Input modes and per-session input state.
//!
//! Responsibilities:
//! - Define the COMMAND/CHAT mode machine states.
//! - Group the buffers, cursor and shift flag that make up an input session.
//!
//! Does NOT handle:
//! - Transitions themselves (see `app::input`), which need regions and the
//!   render coordinator.
//!
//! Invariants:
//! - `Mode::Command { composing: true }` implies the command buffer starts
//!   with ':'.
//! - The chat buffer is empty whenever the mode is not `Chat`.

use crate::buffer::TextBuffer;
use crate::input::ShiftState;

/// Active input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Command { composing: bool },
    Chat,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Command { composing: false }
    }
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Command { .. } => "COMMAND",
            Self::Chat => "CHAT",
        }
    }

    /// Status-line banner for the mode, e.g. `-- CHAT --`.
    pub fn banner(self) -> String {
        format!("-- {} --", self.name())
    }

    pub fn is_chat(self) -> bool {
        matches!(self, Self::Chat)
    }

    pub fn is_composing(self) -> bool {
        matches!(self, Self::Command { composing: true })
    }
}

/// Terminal cursor presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVisibility {
    #[default]
    Invisible,
    Normal,
    /// Emphasized, used while composing a command.
    VeryVisible,
}

/// Row/column within a region, origin at the region's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub row: u16,
    pub col: u16,
}

impl CursorPosition {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Everything the dispatcher mutates while processing keys.
#[derive(Debug, Clone)]
pub struct InputSession {
    pub mode: Mode,
    pub command_buffer: TextBuffer,
    pub chat_buffer: TextBuffer,
    pub shift: ShiftState,
    pub side_panel_visible: bool,
    pub cursor: CursorPosition,
    pub cursor_visibility: CursorVisibility,
}

impl InputSession {
    pub fn new(shift: ShiftState, side_panel_visible: bool) -> Self {
        Self {
            mode: Mode::default(),
            command_buffer: TextBuffer::new(),
            chat_buffer: TextBuffer::new(),
            shift,
            side_panel_visible,
            cursor: CursorPosition::default(),
            cursor_visibility: CursorVisibility::Invisible,
        }
    }
}
