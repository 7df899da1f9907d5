//! Config file loading.
//!
//! Responsibilities:
//! - Read the JSON config file and apply its values to a ConfigLoader.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - A missing config file is not an error; nothing is applied.
//! - File values are applied before environment variables (env vars take precedence).

use std::io::ErrorKind;
use std::path::Path;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::path::default_config_path;
use crate::types::Config;

/// Read a config file, returning `Ok(None)` when it does not exist.
pub(crate) fn read_config_file(path: &Path) -> Result<Option<Config>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Apply the config file's values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
    };

    let Some(file) = read_config_file(&path)? else {
        tracing::debug!(path = %path.display(), "No config file found, using defaults");
        return Ok(());
    };
    tracing::debug!(path = %path.display(), "Loaded config file");

    loader.set_vertical_ratio(Some(file.layout.vertical_ratio));
    loader.set_horizontal_ratio(Some(file.layout.horizontal_ratio));
    loader.set_side_panel_visible(Some(file.layout.side_panel_visible));
    loader.set_chat_left_margin(Some(file.chat.left_margin));
    loader.set_chat_prompt(Some(file.chat.prompt));
    loader.set_theme(Some(file.theme));
    Ok(())
}
