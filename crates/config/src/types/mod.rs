//! Configuration type definitions for Parley.
//!
//! Responsibilities:
//! - Define configuration types for layout, chat input and themes.
//! - Ensure consistent defaults across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Validation of merged values (done by `ConfigLoader::build`).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - Every field has a default so partial config files deserialize.

mod chat;
mod layout;
mod theme;

pub use chat::ChatConfig;
pub use layout::LayoutConfig;
pub use theme::{ColorTheme, Theme};

use serde::{Deserialize, Serialize};

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub chat: ChatConfig,
    pub theme: ColorTheme,
}
