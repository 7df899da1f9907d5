//! Shared shift-held flag.
//!
//! The flag has exactly one writer (the shift listener task) and one reader
//! (the main loop). Races between the two are benign: the main loop only
//! consults it when Enter arrives in CHAT mode.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, ModifierKeyCode};

/// Cheaply cloneable handle to the shift flag.
#[derive(Debug, Clone, Default)]
pub struct ShiftState(Arc<AtomicBool>);

impl ShiftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, held: bool) {
        self.0.store(held, Ordering::Relaxed);
    }
}

/// Press or release of a shift key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftEvent {
    Pressed,
    Released,
}

impl ShiftEvent {
    /// Extract a shift transition from a key event.
    ///
    /// Only terminals that report modifier keys on their own (keyboard
    /// enhancement) ever produce these events.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => Some(Self::Pressed),
                    KeyEventKind::Release => Some(Self::Released),
                }
            }
            _ => None,
        }
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn modifier_event(code: ModifierKeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Modifier(code),
            modifiers: KeyModifiers::SHIFT,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_clones_share_flag() {
        let state = ShiftState::new();
        let reader = state.clone();
        assert!(!reader.is_held());
        state.set(true);
        assert!(reader.is_held());
        state.set(false);
        assert!(!reader.is_held());
    }

    #[test]
    fn test_shift_transitions_from_modifier_events() {
        let press = modifier_event(ModifierKeyCode::LeftShift, KeyEventKind::Press);
        assert_eq!(ShiftEvent::from_key(&press), Some(ShiftEvent::Pressed));

        let release = modifier_event(ModifierKeyCode::RightShift, KeyEventKind::Release);
        assert_eq!(ShiftEvent::from_key(&release), Some(ShiftEvent::Released));

        let ctrl = modifier_event(ModifierKeyCode::LeftControl, KeyEventKind::Press);
        assert_eq!(ShiftEvent::from_key(&ctrl), None);
    }

    #[test]
    fn test_plain_keys_are_not_shift_events() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(ShiftEvent::from_key(&key), None);
    }
}
