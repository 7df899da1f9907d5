//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/parley/config.json`
/// - Windows: `%AppData%\parley\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "parley")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
