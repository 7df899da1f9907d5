//! Keybinding catalog for COMMAND mode.
//!
//! Responsibilities:
//! - Define the single-character bindings and their descriptions.
//! - Resolve a printable character into a [`Binding`].
//! - Render the catalog as help lines for the side panel.
//!
//! Non-responsibilities:
//! - Executing bindings (handled by `App::run_binding`).
//! - Text entry in CHAT or while composing (those never consult the table).
//!
//! Invariants:
//! - At most one binding per character; rebinding replaces the old entry.
//! - Catalog order is stable so the help listing is deterministic.

/// Zero-argument operation a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    ToggleSidePanel,
    EnterChat,
    StartCommand,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: char,
    pub description: &'static str,
    pub binding: Binding,
}

/// Ordered mapping from a character to a binding.
#[derive(Debug, Clone)]
pub struct KeyBindingTable {
    bindings: Vec<Keybinding>,
}

impl Default for KeyBindingTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind('s', Binding::ToggleSidePanel, "Toggle side panel");
        table.bind('c', Binding::EnterChat, "Enter chat mode");
        table.bind(':', Binding::StartCommand, "Start a command");
        table.bind('q', Binding::Quit, "Quit");
        table
    }
}

impl KeyBindingTable {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `key`, replacing any existing binding for it in place.
    pub fn bind(&mut self, key: char, binding: Binding, description: &'static str) {
        let entry = Keybinding {
            key,
            description,
            binding,
        };
        match self.bindings.iter_mut().find(|b| b.key == key) {
            Some(existing) => *existing = entry,
            None => self.bindings.push(entry),
        }
    }

    pub fn resolve(&self, key: char) -> Option<Binding> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.binding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keybinding> {
        self.bindings.iter()
    }

    /// One `"<key>  <description>"` line per binding, in catalog order.
    pub fn help_lines(&self) -> Vec<String> {
        self.bindings
            .iter()
            .map(|b| format!("{}  {}", b.key, b.description))
            .collect()
    }
}
