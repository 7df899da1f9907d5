//! Screen layout settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HORIZONTAL_RATIO, DEFAULT_SIDE_PANEL_VISIBLE, DEFAULT_VERTICAL_RATIO,
};

/// Proportions used to split the terminal into panels.
///
/// Both ratios are fractions in the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fraction of the terminal height occupied by the chat panel
    /// (including the row taken by the command line).
    pub vertical_ratio: f64,
    /// Fraction of the terminal width occupied by the side panel.
    pub horizontal_ratio: f64,
    /// Whether the side panel is visible at startup.
    pub side_panel_visible: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_ratio: DEFAULT_VERTICAL_RATIO,
            horizontal_ratio: DEFAULT_HORIZONTAL_RATIO,
            side_panel_visible: DEFAULT_SIDE_PANEL_VISIBLE,
        }
    }
}
