//! Configuration management for Parley.
//!
//! This crate provides types and loaders for the terminal layout, chat input
//! and color theme settings, merged from defaults, a JSON config file and
//! environment variables.

pub mod constants;
mod loader;
pub mod path;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ChatConfig, ColorTheme, Config, LayoutConfig, Theme};
