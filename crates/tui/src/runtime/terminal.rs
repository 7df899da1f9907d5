//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, pushing keyboard enhancement
//!   flags when the terminal supports them.
//! - Ensure terminal state is restored on application exit, even during panics
//!   (guard drop on unwind, panic hook when panics abort).
//! - Map cursor visibility onto a cursor shape.
//!
//! Does NOT handle:
//! - Drawing (see `ratatui::Terminal` in `main.rs`).
//!
//! Invariants / Assumptions:
//! - The guard exists from the moment raw mode is enabled.
//! - Enhancement flags are popped only if they were pushed.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    cursor::{SetCursorStyle, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};

use crate::mode::CursorVisibility;

/// Flags pushed on terminals that speak the kitty keyboard protocol.
///
/// `REPORT_ALL_KEYS_AS_ESCAPE_CODES` sends shifted keys as their base key plus
/// SHIFT; `REPORT_ALTERNATE_KEYS` brings back the shifted character so `:` and
/// uppercase letters arrive as typed.
pub const KEYBOARD_ENHANCEMENT_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        .union(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        .union(KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS)
        .union(KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES);

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Must live for the duration of the TUI session
/// - Drop implementation must not panic
pub struct TerminalGuard {
    keyboard_enhancement: bool,
}

impl TerminalGuard {
    /// Whether shift press/release events will be reported.
    pub fn keyboard_enhancement(&self) -> bool {
        self.keyboard_enhancement
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.keyboard_enhancement);
    }
}

/// Undo everything `setup_terminal` did. Errors are ignored: this runs from
/// drop and from the panic hook.
fn restore_terminal(keyboard_enhancement: bool) {
    let mut stdout = io::stdout();
    if keyboard_enhancement {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(
        stdout,
        SetCursorStyle::DefaultUserShape,
        Show,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

/// Restore the terminal before the default panic message is printed.
///
/// Release builds abort on panic, so the guard's drop never runs there.
fn install_panic_hook(keyboard_enhancement: bool) {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(keyboard_enhancement);
        default_panic(info);
    }));
}

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let mut guard = TerminalGuard {
        keyboard_enhancement: false,
    };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KEYBOARD_ENHANCEMENT_FLAGS)
        )?;
        guard.keyboard_enhancement = true;
    } else {
        tracing::info!("Keyboard enhancement unsupported; Shift+Enter detection limited");
    }
    install_panic_hook(guard.keyboard_enhancement);
    Ok(guard)
}

/// Cursor shape for a visibility level. Invisible is handled by not placing
/// the cursor in the frame.
pub fn cursor_style(visibility: CursorVisibility) -> SetCursorStyle {
    match visibility {
        CursorVisibility::VeryVisible => SetCursorStyle::SteadyBlock,
        CursorVisibility::Normal | CursorVisibility::Invisible => SetCursorStyle::DefaultUserShape,
    }
}

/// Apply the cursor shape for `visibility` to stdout.
pub fn apply_cursor_style(visibility: CursorVisibility) -> io::Result<()> {
    execute!(io::stdout(), cursor_style(visibility))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasized_cursor_is_steady_block() {
        assert!(matches!(
            cursor_style(CursorVisibility::VeryVisible),
            SetCursorStyle::SteadyBlock
        ));
        assert!(matches!(
            cursor_style(CursorVisibility::Normal),
            SetCursorStyle::DefaultUserShape
        ));
    }

    #[test]
    fn test_enhancement_flags_report_shifted_characters() {
        let flags = KEYBOARD_ENHANCEMENT_FLAGS;
        assert!(flags.contains(KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS));
        assert!(flags.contains(KeyboardEnhancementFlags::REPORT_EVENT_TYPES));
        assert!(flags.contains(KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES));
    }
}
