//! Hour:minute timestamps for chat bubbles

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Regions whose conventions use a 12-hour clock
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "IN", "PH", "PK", "BD", "EG", "SA", "MY", "CO",
];

/// 12- or 24-hour display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockStyle {
    /// Follow the host locale
    #[default]
    Auto,
    /// `09:05 PM`
    TwelveHour,
    /// `21:05`
    TwentyFourHour,
}

impl ClockStyle {
    /// Resolve `Auto` against the host locale environment
    pub fn resolve(self) -> Self {
        self.resolve_for_locale(host_locale().as_deref())
    }

    /// Resolve `Auto` against a POSIX locale name such as `en_US.UTF-8`
    pub fn resolve_for_locale(self, locale: Option<&str>) -> Self {
        match self {
            Self::Auto => match locale.and_then(region_of) {
                Some(region) if TWELVE_HOUR_REGIONS.contains(&region) => Self::TwelveHour,
                _ => Self::TwentyFourHour,
            },
            explicit => explicit,
        }
    }

    pub fn format(&self, time: NaiveTime) -> String {
        match self.resolve() {
            Self::TwelveHour => time.format("%I:%M %p").to_string(),
            _ => time.format("%H:%M").to_string(),
        }
    }

    /// Current local time in this style
    pub fn now(&self) -> String {
        self.format(Local::now().time())
    }
}

fn host_locale() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// `en_US.UTF-8@euro` -> `US`
fn region_of(locale: &str) -> Option<&str> {
    let base = locale.split(['.', '@']).next()?;
    let (_, region) = base.split_once(['_', '-'])?;
    (!region.is_empty()).then_some(region)
}
