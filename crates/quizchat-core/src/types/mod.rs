//! Core type definitions for QuizChat
//!
//! Record types for the two read-only panels and the live chat message type.

mod chat_types;
mod question_types;

pub use chat_types::*;
pub use question_types::*;

use serde::{Deserialize, Serialize};

/// Count badges shown next to the panel toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCounts {
    pub incorrect: usize,
    pub history: usize,
}

/// Which badge slot a count goes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    Incorrect,
    History,
}

impl Badge {
    /// Element id of the badge slot
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Incorrect => "incorrect-count",
            Self::History => "history-count",
        }
    }
}

/// Container regions that receive list markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    IncorrectQuestions,
    ChatHistory,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::IncorrectQuestions => "incorrect-questions-list",
            Self::ChatHistory => "chat-history-list",
        }
    }
}
