//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PARLEY_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Range validation (see `ConfigLoader::build`).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Values that do not parse return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

pub(crate) const ENV_VERTICAL_RATIO: &str = "PARLEY_VERTICAL_RATIO";
pub(crate) const ENV_HORIZONTAL_RATIO: &str = "PARLEY_HORIZONTAL_RATIO";
pub(crate) const ENV_SIDE_PANEL: &str = "PARLEY_SIDE_PANEL";
pub(crate) const ENV_CHAT_MARGIN: &str = "PARLEY_CHAT_MARGIN";
pub(crate) const ENV_CHAT_PROMPT: &str = "PARLEY_CHAT_PROMPT";
pub(crate) const ENV_THEME: &str = "PARLEY_THEME";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_ratio(var: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.parse::<f64>()
        .map_err(|_| ConfigError::invalid(var, "must be a number between 0 and 1"))
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(var, "must be true or false")),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(raw) = env_var_or_none(ENV_VERTICAL_RATIO) {
        loader.set_vertical_ratio(Some(parse_ratio(ENV_VERTICAL_RATIO, &raw)?));
    }
    if let Some(raw) = env_var_or_none(ENV_HORIZONTAL_RATIO) {
        loader.set_horizontal_ratio(Some(parse_ratio(ENV_HORIZONTAL_RATIO, &raw)?));
    }
    if let Some(raw) = env_var_or_none(ENV_SIDE_PANEL) {
        loader.set_side_panel_visible(Some(parse_bool(ENV_SIDE_PANEL, &raw)?));
    }
    if let Some(raw) = env_var_or_none(ENV_CHAT_MARGIN) {
        let margin: u16 = raw
            .parse()
            .map_err(|_| ConfigError::invalid(ENV_CHAT_MARGIN, "must be a non-negative integer"))?;
        loader.set_chat_left_margin(Some(margin));
    }
    // The prompt is taken verbatim; only an entirely blank value counts as unset.
    if let Ok(prompt) = std::env::var(ENV_CHAT_PROMPT)
        && !prompt.trim().is_empty()
    {
        loader.set_chat_prompt(Some(prompt));
    }
    if let Some(raw) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = raw
            .parse()
            .map_err(|message: String| ConfigError::invalid(ENV_THEME, message))?;
        loader.set_theme(Some(theme));
    }
    Ok(())
}
