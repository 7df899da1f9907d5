//! Chat entry: echo, wrap, unwrap and scroll.
//!
//! Positions are tracked in *logical* rows, counted from the first chat row
//! (row 1, the prompt row) as if the region were infinitely tall. The region
//! shows logical rows `scroll + 1 ..= scroll + last_row`; the session cursor
//! is stored in region coordinates.
//!
//! Invariants:
//! - The glyph left of the cursor on its row is the buffer's last character,
//!   unless the cursor sits at the start of a row.
//! - Replaying the buffer through [`ChatGeometry::layout`] reproduces the
//!   echoed glyphs exactly.

use crate::app::App;
use crate::mode::{CursorPosition, CursorVisibility, Mode};
use crate::ui::{RegionName, ThemeExt};

/// Echo geometry of the chat region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatGeometry {
    pub width: u16,
    pub height: u16,
    /// Column wrapped rows start at.
    pub margin: u16,
    /// Column typing starts at on the prompt row.
    pub home_col: u16,
}

impl ChatGeometry {
    pub fn home(&self) -> CursorPosition {
        CursorPosition::new(1, self.home_col)
    }

    /// Last interior row of the region.
    pub fn last_row(&self) -> u16 {
        self.height.saturating_sub(2).max(1)
    }

    /// First column text may occupy on logical `row`.
    pub fn line_start(&self, row: u16) -> u16 {
        if row == 1 { self.home_col } else { self.margin }
    }

    /// Place `ch` typed at logical `pos`.
    ///
    /// Returns where the glyph lands (`None` for a newline) and the next
    /// cursor position. A glyph that would reach the right border wraps to
    /// the next row's margin.
    pub fn advance(
        &self,
        pos: CursorPosition,
        ch: char,
    ) -> (Option<CursorPosition>, CursorPosition) {
        if ch == '\n' {
            return (None, CursorPosition::new(pos.row.saturating_add(1), self.margin));
        }
        let at = if pos.col.saturating_add(1) >= self.width {
            CursorPosition::new(pos.row.saturating_add(1), self.margin)
        } else {
            pos
        };
        (Some(at), CursorPosition::new(at.row, at.col.saturating_add(1)))
    }

    /// Lay out `chars` from the home position.
    pub fn layout(
        &self,
        chars: impl IntoIterator<Item = char>,
    ) -> (Vec<(CursorPosition, char)>, CursorPosition) {
        let mut glyphs = Vec::new();
        let mut cursor = self.home();
        for ch in chars {
            let (glyph, next) = self.advance(cursor, ch);
            if let Some(at) = glyph {
                glyphs.push((at, ch));
            }
            cursor = next;
        }
        (glyphs, cursor)
    }
}

impl App {
    pub fn chat_geometry(&self) -> ChatGeometry {
        let region = self.layout.region(RegionName::Chat);
        ChatGeometry {
            width: region.width(),
            height: region.height(),
            margin: self.chat_margin,
            home_col: self.chat_margin.saturating_add(self.prompt_width),
        }
    }

    pub(super) fn enter_chat(&mut self) {
        self.session.mode = Mode::Chat;
        self.session.cursor_visibility = CursorVisibility::Normal;
        self.chat_scroll = 0;
        self.session.cursor = self.chat_geometry().home();
        self.show_banner();
        tracing::debug!("Entered chat mode");
    }

    pub(super) fn leave_chat(&mut self) {
        self.session.chat_buffer.clear();
        self.chat_scroll = 0;
        self.repaint_region(RegionName::Chat, true);
        self.session.mode = Mode::Command { composing: false };
        self.session.cursor_visibility = CursorVisibility::Invisible;
        self.show_banner();
        tracing::debug!("Left chat mode");
    }

    /// Append `ch` (a printable character or '\n') and echo it.
    pub(super) fn chat_insert(&mut self, ch: char) {
        let geometry = self.chat_geometry();
        let (glyph, next) = geometry.advance(self.logical_cursor(), ch);
        self.session.chat_buffer.append(ch);

        if let Some(at) = glyph {
            if self.scroll_to(at.row) {
                self.redraw_chat();
            } else {
                let row = at.row - self.chat_scroll;
                let style = self.renderer.theme().text();
                let region = self.layout.region_mut(RegionName::Chat);
                region.put_char(row, at.col, ch, style);
                self.renderer.mark(region);
            }
        }
        if self.scroll_to(next.row) {
            self.redraw_chat();
        }
        self.session.cursor = CursorPosition::new(next.row - self.chat_scroll, next.col);

        if self.status_text() != Mode::Chat.banner() {
            self.show_banner();
        }
    }

    /// Remove the character left of the cursor.
    ///
    /// At the start of a row the cursor moves to the end of the previous row
    /// instead and only the decoration is redrawn; a newline at that point is
    /// removed from the buffer, a soft wrap removes nothing.
    pub(super) fn chat_backspace(&mut self) {
        let Some(last) = self.session.chat_buffer.last() else {
            return;
        };
        let geometry = self.chat_geometry();
        let logical = self.logical_cursor();

        if logical.col <= geometry.line_start(logical.row) {
            if last == '\n' {
                self.session.chat_buffer.pop_last();
            }
            let (_, end) = geometry.layout(self.session.chat_buffer.chars());
            if self.scroll_to(end.row) {
                self.redraw_chat();
            } else {
                self.repaint_region(RegionName::Chat, false);
            }
            self.session.cursor = CursorPosition::new(end.row - self.chat_scroll, end.col);
        } else {
            self.session.chat_buffer.pop_last();
            let col = logical.col - 1;
            let row = self.session.cursor.row;
            let style = self.renderer.theme().text();
            let region = self.layout.region_mut(RegionName::Chat);
            region.put_char(row, col, ' ', style);
            self.renderer.mark(region);
            self.session.cursor.col = col;
        }
    }

    /// Hand the chat buffer to the transport; keep it when sending fails.
    pub(super) fn submit_chat(&mut self) {
        if self.session.chat_buffer.is_empty() {
            return;
        }
        let message = self.session.chat_buffer.as_string();
        match self.transport.send(&message) {
            Ok(()) => {
                tracing::debug!(chars = message.chars().count(), "Chat message sent");
                self.session.chat_buffer.clear();
                self.chat_scroll = 0;
                self.repaint_region(RegionName::Chat, true);
                self.session.cursor = self.chat_geometry().home();
                self.show_banner();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Chat send failed");
                self.show_warning(format!("send failed: {err}"));
            }
        }
    }

    /// Recompute scroll and cursor from the buffer and re-echo everything.
    pub(super) fn resync_chat(&mut self) {
        let (_, end) = self.chat_geometry().layout(self.session.chat_buffer.chars());
        self.chat_scroll = 0;
        self.scroll_to(end.row);
        self.redraw_chat();
        self.session.cursor = CursorPosition::new(end.row - self.chat_scroll, end.col);
    }

    fn logical_cursor(&self) -> CursorPosition {
        CursorPosition::new(
            self.session.cursor.row + self.chat_scroll,
            self.session.cursor.col,
        )
    }

    /// Adjust scroll so logical `row` is visible. Returns true if it changed.
    fn scroll_to(&mut self, row: u16) -> bool {
        let last = self.chat_geometry().last_row();
        let before = self.chat_scroll;
        if row > self.chat_scroll + last {
            self.chat_scroll = row - last;
        } else if row <= self.chat_scroll {
            self.chat_scroll = row.saturating_sub(1);
        }
        if self.chat_scroll != before {
            tracing::trace!(scroll = self.chat_scroll, "Chat scrolled");
        }
        self.chat_scroll != before
    }

    /// Full repaint of the chat region followed by a replay of the visible
    /// part of the buffer.
    fn redraw_chat(&mut self) {
        let geometry = self.chat_geometry();
        let (glyphs, _) = geometry.layout(self.session.chat_buffer.chars());
        let scroll = self.chat_scroll;
        let last = geometry.last_row();
        let style = self.renderer.theme().text();

        self.repaint_region(RegionName::Chat, true);
        let region = self.layout.region_mut(RegionName::Chat);
        if scroll > 0 {
            let blank = " ".repeat(usize::from(self.prompt_width));
            region.put_str(1, self.chat_margin, &blank, style);
        }
        for (pos, ch) in glyphs {
            if pos.row > scroll && pos.row <= scroll + last {
                region.put_char(pos.row - scroll, pos.col, ch, style);
            }
        }
        self.renderer.mark(region);
    }
}
