//! External collaborators: command execution and chat transport.
//!
//! Responsibilities:
//! - Define the seams through which committed input leaves the UI engine.
//! - Provide the default implementations used when nothing else is wired in.
//!
//! Does NOT handle:
//! - Networking or protocol framing; a real transport lives outside this crate.
//! - Drawing results (the app writes them into the main region).
//!
//! Invariants:
//! - Collaborators are called synchronously from the single input consumer
//!   and must not block on terminal input.

use crate::error::{CommandError, TransportError};

/// Executes committed command-line text.
pub trait CommandExecutor: Send {
    /// Run `command` (without the leading ':') and return lines for the main
    /// region.
    fn execute(&mut self, command: &str) -> Result<Vec<String>, CommandError>;
}

/// Default executor: acknowledges the command without running anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoExecutor;

impl CommandExecutor for EchoExecutor {
    fn execute(&mut self, command: &str) -> Result<Vec<String>, CommandError> {
        Ok(vec![format!("process command {command}")])
    }
}

/// Sends committed chat text somewhere.
pub trait ChatTransport: Send {
    fn send(&mut self, message: &str) -> Result<(), TransportError>;
}

/// Default transport: logs the message length and discards it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

impl ChatTransport for NullTransport {
    fn send(&mut self, message: &str) -> Result<(), TransportError> {
        tracing::debug!(chars = message.chars().count(), "Discarding chat message");
        Ok(())
    }
}
