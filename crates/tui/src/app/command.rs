//! Command-line composing.
//!
//! The command buffer always starts with ':' while composing. Removing that
//! ':' with Backspace aborts composing the same way Escape does.

use crate::app::App;
use crate::mode::{CursorPosition, CursorVisibility, Mode};
use crate::ui::{RegionName, StyleId};

impl App {
    pub(super) fn start_command(&mut self) {
        self.session.mode = Mode::Command { composing: true };
        self.session.command_buffer.clear();
        self.session.command_buffer.append(':');
        self.session.cursor_visibility = CursorVisibility::VeryVisible;
        self.echo_command_buffer();
        tracing::debug!("Composing command");
    }

    pub(super) fn command_insert(&mut self, ch: char) {
        self.session.command_buffer.append(ch);
        self.echo_command_buffer();
    }

    pub(super) fn command_backspace(&mut self) {
        self.session.command_buffer.pop_last();
        if self.session.command_buffer.is_empty() {
            self.abort_command();
        } else {
            self.echo_command_buffer();
        }
    }

    pub(super) fn abort_command(&mut self) {
        self.finish_command();
        self.show_banner();
        tracing::debug!("Command aborted");
    }

    /// Hand the buffer (without ':') to the executor and show its output in
    /// the main region. A blank command just ends composing.
    pub(super) fn commit_command(&mut self) {
        let text = self.session.command_buffer.as_string();
        self.finish_command();

        let command = text.strip_prefix(':').unwrap_or(&text);
        if command.trim().is_empty() {
            self.show_banner();
            return;
        }

        tracing::debug!(command, "Executing command");
        match self.executor.execute(command) {
            Ok(lines) => {
                self.layout.region_mut(RegionName::Main).set_body(lines);
                self.repaint_region(RegionName::Main, true);
                self.show_banner();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Command failed");
                self.show_warning(format!("command failed: {err}"));
            }
        }
    }

    /// Echo the command buffer on the status line with the cursor after it.
    pub(super) fn echo_command_buffer(&mut self) {
        let text = self.session.command_buffer.as_string();
        self.set_status(&text, StyleId::Status);
        let last_col = self
            .layout
            .region(RegionName::CommandLine)
            .width()
            .saturating_sub(1);
        let len = u16::try_from(self.session.command_buffer.len()).unwrap_or(u16::MAX);
        self.session.cursor = CursorPosition::new(0, len.min(last_col));
    }

    fn finish_command(&mut self) {
        self.session.mode = Mode::Command { composing: false };
        self.session.command_buffer.clear();
        self.session.cursor_visibility = CursorVisibility::Invisible;
    }
}
