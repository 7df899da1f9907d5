//! TUI-specific theme helpers and style builders.
//!
//! This module extends `parley_config::Theme` with helpers that build ratatui
//! `Style` values, and names the reserved styles regions draw with.

use ratatui::style::{Modifier, Style};
use parley_config::Theme;

/// Reserved style a region draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleId {
    /// Text on the transparent background.
    Text,
    /// Text on the highlighted background (status line, warnings).
    Status,
    Title,
    Border,
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn status(&self) -> Style;
    /// Title style (title color + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;

    fn style(&self, id: StyleId) -> Style {
        match id {
            StyleId::Text => self.text(),
            StyleId::Status => self.status(),
            StyleId::Title => self.title(),
            StyleId::Border => self.border(),
        }
    }
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn status(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.status_bg)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }
}
