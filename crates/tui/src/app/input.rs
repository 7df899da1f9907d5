//! Key dispatch for the TUI app.
//!
//! Responsibilities:
//! - Classify each key and route it to the handler for the current mode.
//! - Run keybindings resolved from the keymap in COMMAND mode.
//!
//! Non-responsibilities:
//! - Buffer and echo details (see `app::command` and `app::chat`).
//! - Tracking shift press/release (see `runtime::shift`).
//!
//! Invariants:
//! - Every key is fully processed before the next one is read.
//! - Only `Action::Quit` is ever returned.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::input::{Binding, KeyClass, classify_code, classify_key};
use crate::mode::Mode;

impl App {
    /// Handle a key event from the terminal.
    ///
    /// Returns `Some(Action::Quit)` when the key requests program exit.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release || matches!(key.code, KeyCode::Modifier(_)) {
            return None;
        }
        let shift_modifier = key.modifiers.contains(KeyModifiers::SHIFT);
        self.dispatch(classify_key(&key), shift_modifier)
    }

    /// Handle a raw key code in the curses convention.
    pub fn handle_code(&mut self, code: u32) -> Option<Action> {
        self.dispatch(classify_code(code), false)
    }

    fn dispatch(&mut self, class: KeyClass, shift_modifier: bool) -> Option<Action> {
        tracing::trace!(mode = ?self.session.mode, "Dispatching key");
        match class {
            KeyClass::Escape => return self.key_escape(),
            KeyClass::Enter => {
                let shift = shift_modifier || self.session.shift.is_held();
                self.key_enter(shift);
            }
            KeyClass::Backspace => self.key_backspace(),
            KeyClass::Tab => {}
            KeyClass::Printable(ch) => return self.key_printable(ch),
            KeyClass::Other(key) => self.show_warning(format!("unknown key {key} (non-ascii)")),
        }
        None
    }

    fn key_escape(&mut self) -> Option<Action> {
        match self.session.mode {
            Mode::Chat => self.leave_chat(),
            Mode::Command { composing: true } => self.abort_command(),
            Mode::Command { composing: false } => {
                tracing::info!("Exit requested");
                return Some(Action::Quit);
            }
        }
        None
    }

    fn key_enter(&mut self, shift: bool) {
        match self.session.mode {
            Mode::Chat if shift => self.chat_insert('\n'),
            Mode::Chat => self.submit_chat(),
            Mode::Command { composing: true } => self.commit_command(),
            Mode::Command { composing: false } => {}
        }
    }

    fn key_backspace(&mut self) {
        match self.session.mode {
            Mode::Chat => self.chat_backspace(),
            Mode::Command { composing: true } => self.command_backspace(),
            Mode::Command { composing: false } => {}
        }
    }

    fn key_printable(&mut self, ch: char) -> Option<Action> {
        match self.session.mode {
            Mode::Chat => self.chat_insert(ch),
            Mode::Command { composing: true } => self.command_insert(ch),
            Mode::Command { composing: false } => {
                return match self.keymap.resolve(ch) {
                    Some(binding) => self.run_binding(binding),
                    None => {
                        self.show_warning(format!("unknown key {ch}"));
                        None
                    }
                };
            }
        }
        None
    }

    /// Execute a keybinding as if its key had been pressed in COMMAND mode.
    pub fn run_binding(&mut self, binding: Binding) -> Option<Action> {
        match binding {
            Binding::ToggleSidePanel => self.toggle_side_panel(),
            Binding::EnterChat => self.enter_chat(),
            Binding::StartCommand => self.start_command(),
            Binding::Quit => {
                tracing::info!("Exit requested");
                return Some(Action::Quit);
            }
        }
        None
    }

    fn toggle_side_panel(&mut self) {
        let visible = !self.session.side_panel_visible;
        self.session.side_panel_visible = visible;
        self.layout
            .set_side_panel_visible(visible, &mut self.renderer);
    }
}
