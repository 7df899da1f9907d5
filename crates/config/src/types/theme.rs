//! Theme types for Parley configuration.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always persist `ColorTheme`.
//! - Panel text is drawn on the terminal's own background (`Color::Reset`);
//!   only the status line has an explicit background.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Expand into the runtime color set.
    pub fn to_theme(self) -> Theme {
        Theme::from_color_theme(self)
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!(
                "unknown theme '{other}' (expected default, light or monochrome)"
            )),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Text drawn on the transparent background.
    pub text: Color,
    /// Background behind panel text.
    pub background: Color,
    /// Status line foreground.
    pub status_fg: Color,
    /// Status line background (the highlighted pair).
    pub status_bg: Color,
    pub border: Color,
    pub title: Color,
}

impl Theme {
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                text: Color::Red,
                background: Color::Reset,
                status_fg: Color::Red,
                status_bg: Color::White,
                border: Color::Red,
                title: Color::Red,
            },
            ColorTheme::Light => Self {
                text: Color::Black,
                background: Color::Reset,
                status_fg: Color::White,
                status_bg: Color::Blue,
                border: Color::DarkGray,
                title: Color::Blue,
            },
            ColorTheme::Monochrome => Self {
                text: Color::Reset,
                background: Color::Reset,
                status_fg: Color::Black,
                status_bg: Color::White,
                border: Color::Reset,
                title: Color::Reset,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_names_case_insensitive() {
        assert_eq!("Light".parse::<ColorTheme>(), Ok(ColorTheme::Light));
        assert_eq!(" monochrome ".parse::<ColorTheme>(), Ok(ColorTheme::Monochrome));
        assert!("solarized".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_default_theme_keeps_transparent_background() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.status_bg, Color::White);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ColorTheme::Monochrome).unwrap();
        assert_eq!(json, "\"monochrome\"");
    }
}
