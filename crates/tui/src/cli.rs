//! Command-line argument parsing for parley.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `parley_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use parley_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for parley.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --vertical-ratio, --theme)
/// 2. Environment variables (e.g., PARLEY_VERTICAL_RATIO, PARLEY_THEME)
/// 3. Config file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "parley",
    about = "Modal terminal UI with a command line and a chat panel",
    version,
    after_help = "Examples:\n  parley\n  parley --hide-side-panel\n  parley --config-path /etc/parley/config.json\n  parley --vertical-ratio 0.5 --theme light\n  parley --log-dir /var/log/parley\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long, env = "PARLEY_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Fraction of the terminal height given to the chat panel (0..1)
    #[arg(long)]
    pub vertical_ratio: Option<f64>,

    /// Fraction of the terminal width given to the side panel (0..1)
    #[arg(long)]
    pub horizontal_ratio: Option<f64>,

    /// Start with the side panel hidden
    #[arg(long)]
    pub hide_side_panel: bool,

    /// Left margin of chat text, in columns
    #[arg(long)]
    pub chat_margin: Option<u16>,

    /// Color theme (default, light, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,
}
