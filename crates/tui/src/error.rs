//! Error types for the parley engine.
//!
//! Responsibilities:
//! - Define typed errors for layout computation and the external collaborators.
//!
//! Does NOT handle:
//! - Configuration errors (see `parley_config::ConfigError`).
//! - Presenting errors to the user (the app writes them to the status line).
//!
//! Invariants:
//! - Error messages never include chat or command buffer contents beyond what
//!   the collaborator itself reported.

use thiserror::Error;

use crate::ui::layout::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};

/// Errors produced while computing the region layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The terminal cannot hold the four regions.
    #[error(
        "terminal too small: {cols}x{rows} (need at least {min_cols}x{min_rows})",
        min_cols = MIN_TERMINAL_COLS,
        min_rows = MIN_TERMINAL_ROWS
    )]
    TerminalTooSmall { cols: u16, rows: u16 },
}

/// Errors returned by a [`CommandExecutor`](crate::collab::CommandExecutor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The executor does not recognize the command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The command ran but failed.
    #[error("{0}")]
    Failed(String),
}

/// Errors returned by a [`ChatTransport`](crate::collab::ChatTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("not connected")]
    NotConnected,

    #[error("message rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small_message_names_both_sizes() {
        let err = LayoutError::TerminalTooSmall { cols: 1, rows: 2 };
        let message = err.to_string();
        assert!(message.contains("1x2"));
        assert!(message.contains(&format!("{MIN_TERMINAL_COLS}x{MIN_TERMINAL_ROWS}")));
    }

    #[test]
    fn test_transport_io_error_is_transparent() {
        let err = TransportError::from(std::io::Error::other("socket closed"));
        assert_eq!(err.to_string(), "socket closed");
    }
}
