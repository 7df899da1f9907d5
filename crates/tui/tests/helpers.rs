//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the TUI application.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parley::collab::{ChatTransport, CommandExecutor};
use parley::error::{CommandError, TransportError};
use parley::{Action, App};
use parley_config::Config;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create a Shift+Enter key event.
pub fn shift_enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Build an app on a `cols` x `rows` terminal with default configuration.
pub fn app(cols: u16, rows: u16) -> App {
    App::new(&Config::default(), Rect::new(0, 0, cols, rows)).expect("terminal large enough")
}

/// Feed every character of `text` as a key press. Returns the last action.
pub fn type_str(app: &mut App, text: &str) -> Option<Action> {
    let mut last = None;
    for c in text.chars() {
        last = app.handle_input(key(c));
    }
    last
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_app(app(width, height), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Text of one terminal row after the last render, trailing blanks trimmed.
    pub fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area();
        let text: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect();
        text.trim_end().to_string()
    }

    /// Resize both the mock terminal and the app.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
        self.app.resize(width, height);
    }
}

/// Convert a ratatui Buffer to a string for rendering assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Executor that records every command and answers with fixed lines.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    pub commands: Arc<Mutex<Vec<String>>>,
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: &str) -> Result<Vec<String>, CommandError> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(vec![format!("ran {command}")])
    }
}

/// Executor that rejects every command.
pub struct FailingExecutor;

impl CommandExecutor for FailingExecutor {
    fn execute(&mut self, command: &str) -> Result<Vec<String>, CommandError> {
        Err(CommandError::Unknown(command.to_string()))
    }
}

/// Transport that records every message sent.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl ChatTransport for RecordingTransport {
    fn send(&mut self, message: &str) -> Result<(), TransportError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Transport with no peer.
pub struct FailingTransport;

impl ChatTransport for FailingTransport {
    fn send(&mut self, _message: &str) -> Result<(), TransportError> {
        Err(TransportError::NotConnected)
    }
}
