//! Theme system for QuizChat
//!
//! Colors, spacing and typography, emitted as the page's inline stylesheet.

mod colors;

pub use colors::*;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            colors: ThemeColors::light(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// Inline stylesheet for the page
    pub fn stylesheet(&self) -> String {
        let c = &self.colors;
        let s = &self.spacing;
        let t = &self.typography;

        format!(
            r#"
* {{ box-sizing: border-box; margin: 0; padding: 0; }}
body {{ font-family: {font}; font-size: {base}px; line-height: {lh}; background: {page_bg}; color: {text}; }}
.container {{ display: flex; gap: {lg}px; padding: {lg}px; height: 100vh; }}
.sidebar {{ width: {sidebar}px; background: {surface}; border-radius: {radius}px; padding: {md}px; overflow-y: auto; }}
.toggle-buttons {{ display: flex; gap: {sm}px; margin-bottom: {md}px; }}
.toggle-btn {{ flex: 1; padding: {sm}px; border: 1px solid {border}; border-radius: {radius}px; background: {input_bg}; color: {text}; cursor: pointer; }}
.toggle-btn.active {{ background: linear-gradient(135deg, {primary}, {primary_deep}); color: #ffffff; }}
.badge {{ display: inline-block; min-width: 20px; padding: 0 6px; border-radius: 10px; background: {border}; font-size: {small}px; }}
.menu-panel {{ display: none; }}
.menu-panel.active {{ display: block; }}
.question-item, .chat-item {{ padding: {md}px; margin-bottom: {sm}px; border: 1px solid {border}; border-radius: {radius}px; }}
.incorrect-answer {{ color: {incorrect}; }}
.correct-answer {{ color: {correct}; }}
.question-meta, .chat-header {{ display: flex; gap: {md}px; color: {text_secondary}; font-size: {small}px; }}
.empty-state {{ text-align: center; padding: {xl}px; color: {text_secondary}; }}
.empty-icon {{ font-size: 32px; }}
.chat-container {{ flex: 1; display: flex; flex-direction: column; background: {surface}; border-radius: {radius}px; }}
.chat-messages {{ flex: 1; overflow-y: auto; padding: {lg}px; }}
.welcome-message {{ text-align: center; margin-top: {xl}px; color: {text_secondary}; }}
.chat-message {{ display: flex; flex-direction: column; margin-bottom: {md}px; }}
.chat-message.user {{ align-items: flex-end; }}
.chat-message.bot {{ align-items: flex-start; }}
.message-bubble {{ max-width: 70%; padding: {sm}px {md}px; border-radius: {radius}px; }}
.chat-message.user .message-bubble {{ background: {user_bubble}; color: #ffffff; }}
.chat-message.bot .message-bubble {{ background: {bot_bubble}; color: {text}; }}
.message-time {{ font-size: {small}px; color: {text_secondary}; }}
.chat-form {{ display: flex; gap: {sm}px; padding: {md}px; border-top: 1px solid {border}; }}
.chat-form input {{ flex: 1; padding: {sm}px; border: 1px solid {border}; border-radius: {radius}px; background: {input_bg}; }}
"#,
            font = t.font_family,
            base = t.base_size,
            small = t.small_size,
            lh = t.line_height,
            page_bg = c.page_bg,
            surface = c.surface,
            input_bg = c.input_bg,
            text = c.text_primary,
            text_secondary = c.text_secondary,
            primary = c.primary,
            primary_deep = c.primary_deep,
            incorrect = c.incorrect,
            correct = c.correct,
            user_bubble = c.user_bubble,
            bot_bubble = c.bot_bubble,
            border = c.border,
            sm = s.sm,
            md = s.md,
            lg = s.lg,
            xl = s.xl,
            sidebar = layout::SIDEBAR_WIDTH,
            radius = layout::BORDER_RADIUS,
        )
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Small spacing (8px)
    pub sm: u32,
    /// Medium spacing (12px)
    pub md: u32,
    /// Large spacing (16px)
    pub lg: u32,
    /// Extra large spacing (24px)
    pub xl: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            sm: 8,
            md: 12,
            lg: 16,
            xl: 24,
        }
    }
}

/// Typography settings
#[derive(Debug, Clone)]
pub struct Typography {
    pub font_family: &'static str,
    pub base_size: u32,
    pub small_size: u32,
    pub line_height: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
            base_size: 14,
            small_size: 12,
            line_height: 1.5,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Sidebar width in pixels
    pub const SIDEBAR_WIDTH: u32 = 380;
    pub const BORDER_RADIUS: u32 = 8;
}
