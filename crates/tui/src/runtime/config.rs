//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//!
//! Does NOT handle:
//! - Parsing individual environment variables (see `parley_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` is called before anything reads the environment.
//! - A blank `--config-path` is ignored in favor of the default location.

use parley_config::{Config, ConfigError, ConfigLoader};

use crate::cli::Cli;

/// Load the configuration for this run.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let loader = ConfigLoader::new().load_dotenv()?;

    let loader = match &cli.config_path {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => {
            loader.with_config_path(path.clone())
        }
        _ => loader,
    };

    let mut loader = loader.from_file()?.from_env()?;
    apply_cli_overrides(&mut loader, cli);
    loader.build()
}

/// Apply explicit command-line values on top of everything else.
pub fn apply_cli_overrides(loader: &mut ConfigLoader, cli: &Cli) {
    if let Some(ratio) = cli.vertical_ratio {
        loader.set_vertical_ratio(Some(ratio));
    }
    if let Some(ratio) = cli.horizontal_ratio {
        loader.set_horizontal_ratio(Some(ratio));
    }
    if cli.hide_side_panel {
        loader.set_side_panel_visible(Some(false));
    }
    if let Some(margin) = cli.chat_margin {
        loader.set_chat_left_margin(Some(margin));
    }
    if let Some(theme) = cli.theme {
        loader.set_theme(Some(theme));
    }
}
