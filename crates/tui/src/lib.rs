//! Parley Library
//!
//! This library provides the modal UI engine behind the `parley` binary:
//! regions and their layout, the COMMAND/CHAT mode machine, key dispatch and
//! frame composition.
//!
//! # Example
//!
//! ```rust
//! use parley::{Action, App};
//! use parley_config::Config;
//! use crossterm::event::{KeyCode, KeyEvent};
//! use ratatui::layout::Rect;
//!
//! let mut app = App::new(&Config::default(), Rect::new(0, 0, 80, 24)).unwrap();
//! app.handle_input(KeyEvent::from(KeyCode::Char('c')));
//! assert_eq!(app.status_text(), "-- CHAT --");
//! assert_eq!(app.handle_input(KeyEvent::from(KeyCode::Esc)), None);
//! assert_eq!(app.handle_input(KeyEvent::from(KeyCode::Esc)), Some(Action::Quit));
//! ```

pub mod action;
pub mod app;
pub mod buffer;
pub mod cli;
pub mod collab;
pub mod error;
pub mod input;
pub mod mode;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::App;
pub use buffer::TextBuffer;
pub use collab::{ChatTransport, CommandExecutor, EchoExecutor, NullTransport};
pub use error::{CommandError, LayoutError, TransportError};
pub use mode::{CursorPosition, CursorVisibility, Mode};
