//! Append-only text buffer backing the command line and the chat input.
//!
//! Responsibilities:
//! - Store typed characters in insertion order.
//! - Support removal of the last character and full clearing.
//!
//! Does NOT handle:
//! - Echoing characters to a region (see `app::chat`).
//! - Deciding which buffer receives a keystroke (see `app::input`).
//!
//! Invariants:
//! - `as_string()` always equals the concatenation of every appended
//!   character not yet removed, in order.
//! - `pop_last()` on an empty buffer is a no-op that returns `None`.

use std::fmt;

/// Mutable ordered sequence of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Remove and return the last character, if any.
    pub fn pop_last(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// The buffer contents as an owned string.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromIterator<char> for TextBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
