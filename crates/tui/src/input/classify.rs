//! Mapping of key input into the classes the dispatcher understands.
//!
//! Two sources feed the dispatcher: raw numeric codes in the curses
//! convention, and crossterm `KeyEvent`s from the live terminal. Both
//! collapse into [`KeyClass`].

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const CODE_TAB: u32 = 9;
pub const CODE_LINE_FEED: u32 = 10;
pub const CODE_CARRIAGE_RETURN: u32 = 13;
pub const CODE_ESCAPE: u32 = 27;
pub const CODE_ASCII_BACKSPACE: u32 = 8;
pub const CODE_DELETE: u32 = 127;
/// `KEY_BACKSPACE` as reported by curses keypad mode.
pub const CODE_KEYPAD_BACKSPACE: u32 = 263;

/// Dispatcher class of a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Escape,
    Enter,
    Backspace,
    Tab,
    Printable(char),
    Other(UnknownKey),
}

/// A key with no meaning to the dispatcher, kept for the status-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKey {
    Code(u32),
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Key { code, modifiers } => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    write!(f, "Ctrl+")?;
                }
                if modifiers.contains(KeyModifiers::ALT) {
                    write!(f, "Alt+")?;
                }
                match code {
                    KeyCode::Char(c) => write!(f, "{c}"),
                    KeyCode::F(n) => write!(f, "F{n}"),
                    other => write!(f, "{other:?}"),
                }
            }
        }
    }
}

/// Printable means ASCII space through tilde.
pub fn is_printable(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

/// Classify a raw key code.
pub fn classify_code(code: u32) -> KeyClass {
    match code {
        CODE_ESCAPE => KeyClass::Escape,
        CODE_LINE_FEED | CODE_CARRIAGE_RETURN => KeyClass::Enter,
        CODE_TAB => KeyClass::Tab,
        CODE_ASCII_BACKSPACE | CODE_DELETE | CODE_KEYPAD_BACKSPACE => KeyClass::Backspace,
        _ => match char::from_u32(code) {
            Some(ch) if is_printable(ch) => KeyClass::Printable(ch),
            _ => KeyClass::Other(UnknownKey::Code(code)),
        },
    }
}

/// Classify a crossterm key event.
///
/// Shift on its own does not disqualify a character; Control and Alt do.
pub fn classify_key(key: &KeyEvent) -> KeyClass {
    match key.code {
        KeyCode::Esc => KeyClass::Escape,
        KeyCode::Enter => KeyClass::Enter,
        KeyCode::Tab => KeyClass::Tab,
        KeyCode::Backspace => KeyClass::Backspace,
        KeyCode::Char(ch)
            if is_printable(ch)
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyClass::Printable(ch)
        }
        code => KeyClass::Other(UnknownKey::Key {
            code,
            modifiers: key.modifiers,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_codes() {
        assert_eq!(classify_code(27), KeyClass::Escape);
        assert_eq!(classify_code(10), KeyClass::Enter);
        assert_eq!(classify_code(13), KeyClass::Enter);
        assert_eq!(classify_code(9), KeyClass::Tab);
        for code in [8, 127, 263] {
            assert_eq!(classify_code(code), KeyClass::Backspace);
        }
    }

    #[test]
    fn test_printable_range_bounds() {
        assert_eq!(classify_code(32), KeyClass::Printable(' '));
        assert_eq!(classify_code(126), KeyClass::Printable('~'));
        assert_eq!(
            classify_code(31),
            KeyClass::Other(UnknownKey::Code(31))
        );
        assert_eq!(
            classify_code(0xE9),
            KeyClass::Other(UnknownKey::Code(0xE9))
        );
    }

    #[test]
    fn test_key_event_classification() {
        let plain = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(classify_key(&plain), KeyClass::Printable('a'));

        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(classify_key(&shifted), KeyClass::Printable('A'));

        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(classify_key(&ctrl), KeyClass::Other(_)));

        let accented = KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE);
        assert!(matches!(classify_key(&accented), KeyClass::Other(_)));

        let colon = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT);
        assert_eq!(classify_key(&colon), KeyClass::Printable(':'));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(classify_key(&enter), KeyClass::Enter);
    }

    #[test]
    fn test_shifted_base_key_is_taken_as_reported() {
        // Without alternate-key reports the terminal sends Shift+';' as ';'.
        // The character is classified as delivered; the layout is not guessed.
        let base = KeyEvent::new(KeyCode::Char(';'), KeyModifiers::SHIFT);
        assert_eq!(classify_key(&base), KeyClass::Printable(';'));
    }

    #[test]
    fn test_unknown_key_display() {
        assert_eq!(UnknownKey::Code(300).to_string(), "300");
        let key = UnknownKey::Key {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(key.to_string(), "Ctrl+x");
        let key = UnknownKey::Key {
            code: KeyCode::F(5),
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(key.to_string(), "F5");
        let key = UnknownKey::Key {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(key.to_string(), "Up");
    }
}
