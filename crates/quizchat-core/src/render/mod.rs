//! Markup rendering
//!
//! Everything here is a pure function of its input: records go in, markup
//! strings come out. Applying markup to a view happens in [`crate::bootstrap`]
//! and [`crate::chat`].

mod chat;
mod lists;

pub use chat::{render_chat_bubble, render_welcome};
pub use lists::{render_chat_history, render_incorrect_questions};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How record fields are interpolated into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EscapePolicy {
    /// HTML-escape `& < > " '`
    #[default]
    Escape,
    /// Interpolate field content verbatim
    Raw,
}

impl EscapePolicy {
    pub fn from_flag(escape: bool) -> Self {
        if escape {
            Self::Escape
        } else {
            Self::Raw
        }
    }

    /// Apply the policy to one field value
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(text),
            Self::Escape => escape_html(text),
        }
    }
}

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Placeholder shown instead of an empty list
pub(crate) fn empty_state(icon: &str, text: &str) -> String {
    format!(
        r#"
<div class="empty-state">
    <div class="empty-icon">{icon}</div>
    <div class="empty-text">{text}</div>
</div>
"#
    )
}
