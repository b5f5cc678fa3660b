//! Application settings
//!
//! Read from `<config dir>/quizchat/settings.json` when the file exists,
//! then overridden by `QUIZCHAT_*` environment variables.

use crate::chat::{ChatConfig, ClockStyle};
use crate::error::{Result, SettingsError};
use crate::render::EscapePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const ENV_REPLY_DELAY_MS: &str = "QUIZCHAT_REPLY_DELAY_MS";
pub const ENV_OUTPUT: &str = "QUIZCHAT_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Pause before the canned bot reply
    pub reply_delay_ms: u64,
    pub clock: ClockStyle,
    /// HTML-escape record fields and chat text
    pub escape_markup: bool,
    /// Panel shown at startup
    pub default_panel: Option<String>,
    /// Replacement for the built-in sample data
    pub fixtures_path: Option<PathBuf>,
    /// Where the page host writes its HTML snapshot
    pub output_path: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            clock: ClockStyle::Auto,
            escape_markup: true,
            default_panel: Some("incorrect".to_string()),
            fixtures_path: None,
            output_path: PathBuf::from("quizchat.html"),
        }
    }
}

impl AppSettings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quizchat").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let mut settings = match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => {
                debug!("No settings file, using defaults");
                Self::default()
            }
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let settings: AppSettings =
            serde_json::from_str(&json).map_err(|e| SettingsError::Malformed(e.to_string()))?;

        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_REPLY_DELAY_MS) {
            self.reply_delay_ms = value.trim().parse().map_err(|_| SettingsError::InvalidValue {
                key: ENV_REPLY_DELAY_MS,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output_path = PathBuf::from(value);
        }

        Ok(())
    }

    pub fn escape_policy(&self) -> EscapePolicy {
        EscapePolicy::from_flag(self.escape_markup)
    }

    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            clock: self.clock,
            escape: self.escape_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.reply_delay_ms, 500);
        assert_eq!(settings.default_panel.as_deref(), Some("incorrect"));
        assert_eq!(settings.escape_policy(), EscapePolicy::Escape);
        assert_eq!(settings.chat_config().reply_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"replyDelayMs": 250, "clock": "twentyFourHour", "escapeMarkup": false}}"#).unwrap();

        let settings = AppSettings::from_path(file.path()).unwrap();
        assert_eq!(settings.reply_delay_ms, 250);
        assert_eq!(settings.clock, ClockStyle::TwentyFourHour);
        assert_eq!(settings.escape_policy(), EscapePolicy::Raw);
        assert_eq!(settings.output_path, PathBuf::from("quizchat.html"));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            AppSettings::from_path(file.path()),
            Err(Error::Settings(SettingsError::Malformed(_)))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_REPLY_DELAY_MS, " 1200 "),
            (ENV_OUTPUT, "/tmp/page.html"),
        ]
        .into_iter()
        .collect();

        let mut settings = AppSettings::default();
        settings
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(settings.reply_delay_ms, 1200);
        assert_eq!(settings.output_path, PathBuf::from("/tmp/page.html"));
    }

    #[test]
    fn test_invalid_delay_override() {
        let mut settings = AppSettings::default();
        let result = settings.apply_overrides(|key| {
            (key == ENV_REPLY_DELAY_MS).then(|| "soon".to_string())
        });

        assert!(matches!(
            result,
            Err(Error::Settings(SettingsError::InvalidValue { key: ENV_REPLY_DELAY_MS, .. }))
        ));
    }
}
