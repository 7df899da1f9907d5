//! Chat input settings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHAT_LEFT_MARGIN, DEFAULT_CHAT_PROMPT};

/// Echo settings for the chat input panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Column at which wrapped lines start.
    pub left_margin: u16,
    /// Prompt drawn before the first input column.
    pub prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            left_margin: DEFAULT_CHAT_LEFT_MARGIN,
            prompt: DEFAULT_CHAT_PROMPT.to_string(),
        }
    }
}
