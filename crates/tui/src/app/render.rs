//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Hand the region arena to the render coordinator for composition.
//! - Decide where the terminal cursor goes for the current mode.
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT draw glyphs (regions are painted as keys are processed)

use ratatui::Frame;

use crate::app::App;
use crate::mode::{CursorPosition, CursorVisibility, Mode};
use crate::ui::RegionId;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let cursor = self.cursor_target();
        self.renderer.present(f, self.layout.arena(), cursor);
    }

    /// Region and position the cursor is shown at, if visible.
    fn cursor_target(&self) -> Option<(RegionId, CursorPosition)> {
        if self.session.cursor_visibility == CursorVisibility::Invisible {
            return None;
        }
        let handles = self.layout.handles();
        match self.session.mode {
            Mode::Chat => Some((handles.chat, self.session.cursor)),
            Mode::Command { composing: true } => Some((handles.command, self.session.cursor)),
            Mode::Command { composing: false } => None,
        }
    }
}
