//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Validate merged values and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file reading (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Sources apply in call order, later calls overwrite earlier values:
//!   `from_file()` then `from_env()` then explicit setters (CLI flags).
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::{
    ENV_CHAT_MARGIN, ENV_CHAT_PROMPT, ENV_HORIZONTAL_RATIO, ENV_VERTICAL_RATIO, apply_env,
};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{MAX_CHAT_LEFT_MARGIN, MAX_CHAT_PROMPT_CHARS, MIN_CHAT_LEFT_MARGIN};
use crate::types::{ChatConfig, ColorTheme, Config, LayoutConfig};

/// Configuration loader that merges defaults, the config file and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    vertical_ratio: Option<f64>,
    horizontal_ratio: Option<f64>,
    side_panel_visible: Option<bool>,
    chat_left_margin: Option<u16>,
    chat_prompt: Option<String>,
    theme: Option<ColorTheme>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Apply values from the config file (default location unless overridden).
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Apply values from `PARLEY_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn set_vertical_ratio(&mut self, ratio: Option<f64>) {
        self.vertical_ratio = ratio;
    }

    pub fn set_horizontal_ratio(&mut self, ratio: Option<f64>) {
        self.horizontal_ratio = ratio;
    }

    pub fn set_side_panel_visible(&mut self, visible: Option<bool>) {
        self.side_panel_visible = visible;
    }

    pub fn set_chat_left_margin(&mut self, margin: Option<u16>) {
        self.chat_left_margin = margin;
    }

    pub fn set_chat_prompt(&mut self, prompt: Option<String>) {
        self.chat_prompt = prompt;
    }

    pub fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    /// Build the final configuration, validating every merged value.
    pub fn build(self) -> Result<Config, ConfigError> {
        let layout_defaults = LayoutConfig::default();
        let chat_defaults = ChatConfig::default();

        let vertical_ratio = validate_ratio(
            ENV_VERTICAL_RATIO,
            self.vertical_ratio.unwrap_or(layout_defaults.vertical_ratio),
        )?;
        let horizontal_ratio = validate_ratio(
            ENV_HORIZONTAL_RATIO,
            self.horizontal_ratio
                .unwrap_or(layout_defaults.horizontal_ratio),
        )?;

        let left_margin = self.chat_left_margin.unwrap_or(chat_defaults.left_margin);
        if !(MIN_CHAT_LEFT_MARGIN..=MAX_CHAT_LEFT_MARGIN).contains(&left_margin) {
            return Err(ConfigError::invalid(
                ENV_CHAT_MARGIN,
                format!(
                    "must be between {MIN_CHAT_LEFT_MARGIN} and {MAX_CHAT_LEFT_MARGIN} (got {left_margin})"
                ),
            ));
        }

        let prompt = self.chat_prompt.unwrap_or(chat_defaults.prompt);
        validate_prompt(&prompt)?;

        Ok(Config {
            layout: LayoutConfig {
                vertical_ratio,
                horizontal_ratio,
                side_panel_visible: self
                    .side_panel_visible
                    .unwrap_or(layout_defaults.side_panel_visible),
            },
            chat: ChatConfig {
                left_margin,
                prompt,
            },
            theme: self.theme.unwrap_or_default(),
        })
    }
}

fn validate_ratio(var: &str, ratio: f64) -> Result<f64, ConfigError> {
    if ratio.is_finite() && ratio > 0.0 && ratio < 1.0 {
        Ok(ratio)
    } else {
        Err(ConfigError::invalid(
            var,
            format!("must be greater than 0 and less than 1 (got {ratio})"),
        ))
    }
}

fn validate_prompt(prompt: &str) -> Result<(), ConfigError> {
    let chars = prompt.chars().count();
    if chars == 0 || chars > MAX_CHAT_PROMPT_CHARS {
        return Err(ConfigError::invalid(
            ENV_CHAT_PROMPT,
            format!("must be 1 to {MAX_CHAT_PROMPT_CHARS} characters (got {chars})"),
        ));
    }
    if prompt.chars().any(char::is_control) {
        return Err(ConfigError::invalid(
            ENV_CHAT_PROMPT,
            "must not contain control characters",
        ));
    }
    Ok(())
}
