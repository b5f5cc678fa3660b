//! Chat history and live chat message types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class fragment used for this sender
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A past conversation entry, shown read-only in the history panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub id: u32,
    /// Display name ("You", "Bot")
    pub sender: String,
    pub message: String,
    /// Pre-formatted display time
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: Sender,
}

impl ChatHistoryEntry {
    pub fn user(id: u32, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            sender: "You".to_string(),
            message: message.into(),
            timestamp: timestamp.into(),
            kind: Sender::User,
        }
    }

    pub fn bot(id: u32, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            sender: "Bot".to_string(),
            message: message.into(),
            timestamp: timestamp.into(),
            kind: Sender::Bot,
        }
    }
}

/// A message exchanged in the live chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    pub sender: Sender,
    /// Local hour:minute at the time the bubble was rendered
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sender: Sender::User,
            timestamp: timestamp.into(),
        }
    }

    pub fn bot(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sender: Sender::Bot,
            timestamp: timestamp.into(),
        }
    }
}
