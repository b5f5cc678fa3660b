//! Sample data standing in for a backend
//!
//! The built-in set is embedded at compile time. A JSON file with the same
//! shape can replace it through the `fixturesPath` setting.

use crate::error::{FixtureError, Result};
use crate::types::{BadgeCounts, ChatHistoryEntry, IncorrectQuestion};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

const SAMPLE_JSON: &str = include_str!("sample.json");

static BUILTIN: Lazy<std::result::Result<Fixtures, String>> =
    Lazy::new(|| Fixtures::parse(SAMPLE_JSON).map_err(|e| e.to_string()));

/// Read-only seed data for both panels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    #[serde(default)]
    pub incorrect_questions: Vec<IncorrectQuestion>,
    #[serde(default)]
    pub chat_history: Vec<ChatHistoryEntry>,
}

impl Fixtures {
    /// The embedded sample set
    pub fn builtin() -> Result<Self> {
        BUILTIN
            .clone()
            .map_err(|e| FixtureError::Malformed(e).into())
    }

    /// Parse and validate fixture JSON
    pub fn parse(json: &str) -> Result<Self> {
        let fixtures: Fixtures = serde_json::from_str(json)
            .map_err(|e| FixtureError::Malformed(e.to_string()))?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Load fixtures from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| FixtureError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let fixtures = Self::parse(&json)?;
        info!(
            "Loaded fixtures from {:?}: {} questions, {} history entries",
            path,
            fixtures.incorrect_questions.len(),
            fixtures.chat_history.len()
        );
        Ok(fixtures)
    }

    /// Use the override file if one is configured, otherwise the built-in set
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => {
                debug!("Using built-in fixtures");
                Self::builtin()
            }
        }
    }

    /// Badge counts, taken once at startup
    pub fn badge_counts(&self) -> BadgeCounts {
        BadgeCounts {
            incorrect: self.incorrect_questions.len(),
            history: self.chat_history.len(),
        }
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for q in &self.incorrect_questions {
            if !seen.insert(q.id) {
                return Err(FixtureError::DuplicateId {
                    kind: "question",
                    id: q.id,
                }
                .into());
            }
        }

        seen.clear();
        for entry in &self.chat_history {
            if !seen.insert(entry.id) {
                return Err(FixtureError::DuplicateId {
                    kind: "history",
                    id: entry.id,
                }
                .into());
            }
        }

        Ok(())
    }
}
