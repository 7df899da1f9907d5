//! Parley - modal terminal UI with a command line and a chat panel.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Key interpretation or drawing (see `parley::app`).
//! - Configuration parsing (see `parley_config`).
//!
//! Invariants:
//! - Configuration and the initial layout are validated before raw mode is
//!   entered, so startup errors print to a normal terminal.
//! - Logs go to a file; nothing is written to stdout while the UI is up.
//! - Every key is handled to completion before the next action is read.

use std::io::Stdout;

use anyhow::{Context, Result};
use clap::Parser;
use parley::action::Action;
use parley::app::App;
use parley::cli::Cli;
use parley::input::ShiftState;
use parley::runtime::{
    config::load_config,
    input::spawn_input_pump,
    shift::ShiftListener,
    terminal::{apply_cursor_style, setup_terminal},
};
use parley_config::constants::{
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_LOG_FILE_NAME, DEFAULT_MODIFIER_CHANNEL_CAPACITY,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc::{Receiver, channel};
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, DEFAULT_LOG_FILE_NAME);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = load_config(&cli).context("Failed to load configuration")?;
    let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;

    let shift = ShiftState::new();
    let mut app = App::new(&config, Rect::new(0, 0, cols, rows))?.with_shift_state(shift.clone());

    let guard = setup_terminal().context("Failed to set up terminal")?;
    if !guard.keyboard_enhancement() {
        tracing::warn!("Shift+Enter in chat requires a terminal reporting modifier keys");
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let listener = ShiftListener::spawn(shift, DEFAULT_MODIFIER_CHANNEL_CAPACITY);
    let cancel = CancellationToken::new();
    let pump = spawn_input_pump(tx, listener.sender(), cancel.clone());

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    cancel.cancel();
    if let Err(err) = pump.await {
        tracing::warn!(error = %err, "Input pump ended abnormally");
    }
    listener.join().await;
    drop(terminal);
    drop(guard);

    tracing::info!("Session ended");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut Receiver<Action>,
) -> Result<()> {
    let mut cursor_visibility = None;
    loop {
        if app.needs_redraw() {
            terminal.draw(|f| app.render(f))?;
        }
        if cursor_visibility != Some(app.cursor_visibility()) {
            apply_cursor_style(app.cursor_visibility())?;
            cursor_visibility = Some(app.cursor_visibility());
        }

        let Some(action) = rx.recv().await else {
            tracing::warn!("Input pump closed the action channel");
            return Ok(());
        };
        match action {
            Action::Input(key) => {
                if let Some(Action::Quit) = app.handle_input(key) {
                    return Ok(());
                }
            }
            Action::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "Terminal resized");
                terminal.autoresize()?;
                app.resize(cols, rows);
            }
            Action::Quit => return Ok(()),
        }
    }
}
