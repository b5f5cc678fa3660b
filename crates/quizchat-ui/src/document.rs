//! In-memory HTML page
//!
//! Holds the element state the core drives through [`View`] and serializes
//! the whole page on demand.

use crate::theme::Theme;
use quizchat_core::render::escape_html;
use quizchat_core::{Badge, Region, View};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// A trigger/panel pair on the page
#[derive(Debug, Clone)]
pub struct PanelSpec {
    /// Shared key: `data-menu` on the trigger, `{key}-menu` id on the panel
    pub key: String,
    pub label: String,
    /// List region rendered inside the panel
    pub region: Option<Region>,
    pub badge: Option<Badge>,
    /// Whether the page actually contains the panel element
    pub has_panel: bool,
}

impl PanelSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            region: None,
            badge: None,
            has_panel: true,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Trigger without a matching panel element
    pub fn trigger_only(mut self) -> Self {
        self.has_panel = false;
        self
    }
}

#[derive(Debug, Clone)]
struct PanelState {
    spec: PanelSpec,
    trigger_active: bool,
    panel_active: bool,
}

/// The QuizChat page
pub struct HtmlDocument {
    title: String,
    theme: Theme,
    panels: Vec<PanelState>,
    regions: HashMap<Region, String>,
    badges: HashMap<Badge, usize>,
    welcome: Option<String>,
    messages: Vec<String>,
    scroll_top: usize,
    input: String,
    dirty: bool,
}

impl HtmlDocument {
    /// Page with the incorrect-questions and chat-history panels
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_panels(
            title,
            vec![
                PanelSpec::new("incorrect", "Incorrect Questions")
                    .with_region(Region::IncorrectQuestions)
                    .with_badge(Badge::Incorrect),
                PanelSpec::new("history", "Chat History")
                    .with_region(Region::ChatHistory)
                    .with_badge(Badge::History),
            ],
        )
    }

    pub fn with_panels(title: impl Into<String>, panels: Vec<PanelSpec>) -> Self {
        Self {
            title: title.into(),
            theme: Theme::default(),
            panels: panels
                .into_iter()
                .map(|spec| PanelState {
                    spec,
                    trigger_active: false,
                    panel_active: false,
                })
                .collect(),
            regions: HashMap::new(),
            badges: HashMap::new(),
            welcome: None,
            messages: Vec::new(),
            scroll_top: 0,
            input: String::new(),
            dirty: true,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Type into the chat input
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.dirty = true;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn active_trigger(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.trigger_active)
            .map(|p| p.spec.key.as_str())
    }

    pub fn active_panels(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| p.panel_active)
            .map(|p| p.spec.key.as_str())
            .collect()
    }

    pub fn badge(&self, badge: Badge) -> Option<usize> {
        self.badges.get(&badge).copied()
    }

    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    pub fn is_welcome_shown(&self) -> bool {
        self.welcome.is_some()
    }

    /// Bubbles in the message list
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Index of the last bubble scrolled into view
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Serialize the full page
    pub fn render_page(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"container\">\n",
            escape_html(&self.title),
            self.theme.stylesheet()
        );

        html.push_str("<div class=\"sidebar\">\n<div class=\"toggle-buttons\">\n");
        for panel in &self.panels {
            self.write_trigger(&mut html, panel);
        }
        html.push_str("</div>\n");
        for panel in self.panels.iter().filter(|p| p.spec.has_panel) {
            self.write_panel(&mut html, panel);
        }
        html.push_str("</div>\n");

        self.write_chat(&mut html);
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Write the page to disk
    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_page())?;
        debug!("Page written to {:?}", path);
        Ok(())
    }

    fn write_trigger(&self, html: &mut String, panel: &PanelState) {
        let active = if panel.trigger_active { " active" } else { "" };
        let _ = write!(
            html,
            "<button class=\"toggle-btn{}\" data-menu=\"{}\">{}",
            active,
            escape_html(&panel.spec.key),
            escape_html(&panel.spec.label)
        );
        if let Some(badge) = panel.spec.badge {
            let count = self
                .badges
                .get(&badge)
                .map(|c| c.to_string())
                .unwrap_or_default();
            let _ = write!(
                html,
                " <span class=\"badge\" id=\"{}\">{}</span>",
                badge.element_id(),
                count
            );
        }
        html.push_str("</button>\n");
    }

    fn write_panel(&self, html: &mut String, panel: &PanelState) {
        let active = if panel.panel_active { " active" } else { "" };
        let _ = writeln!(
            html,
            "<div class=\"menu-panel{}\" id=\"{}-menu\">",
            active,
            escape_html(&panel.spec.key)
        );
        if let Some(region) = panel.spec.region {
            let _ = write!(
                html,
                "<div class=\"panel-list\" id=\"{}\">{}</div>\n",
                region.element_id(),
                self.regions.get(&region).map(String::as_str).unwrap_or("")
            );
        }
        html.push_str("</div>\n");
    }

    fn write_chat(&self, html: &mut String) {
        let _ = write!(
            html,
            "<div class=\"chat-container\">\n<div class=\"chat-messages\" id=\"chat-messages\" data-scroll-top=\"{}\">\n",
            self.scroll_top
        );
        if let Some(welcome) = &self.welcome {
            html.push_str(welcome);
            html.push('\n');
        }
        for message in &self.messages {
            html.push_str(message);
            html.push('\n');
        }
        let _ = write!(
            html,
            "</div>\n<form class=\"chat-form\" id=\"chat-form\">\n\
             <input type=\"text\" id=\"user-input\" placeholder=\"Type your message...\" value=\"{}\">\n\
             <button type=\"submit\">Send</button>\n</form>\n</div>\n",
            escape_html(&self.input)
        );
    }

    fn panel_mut(&mut self, key: &str) -> Option<&mut PanelState> {
        self.panels.iter_mut().find(|p| p.spec.key == key)
    }
}

impl View for HtmlDocument {
    fn trigger_keys(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.spec.key.clone()).collect()
    }

    fn has_panel(&self, key: &str) -> bool {
        self.panels
            .iter()
            .any(|p| p.spec.key == key && p.spec.has_panel)
    }

    fn set_trigger_active(&mut self, key: &str, active: bool) {
        if let Some(panel) = self.panel_mut(key) {
            panel.trigger_active = active;
            self.dirty = true;
        }
    }

    fn set_panel_active(&mut self, key: &str, active: bool) -> bool {
        match self.panel_mut(key) {
            Some(panel) if panel.spec.has_panel => {
                panel.panel_active = active;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    fn set_region_markup(&mut self, region: Region, markup: &str) {
        self.regions.insert(region, markup.to_string());
        self.dirty = true;
    }

    fn set_badge(&mut self, badge: Badge, count: usize) {
        self.badges.insert(badge, count);
        self.dirty = true;
    }

    fn show_welcome(&mut self, markup: &str) {
        self.messages.clear();
        self.welcome = Some(markup.to_string());
        self.dirty = true;
    }

    fn remove_welcome(&mut self) -> bool {
        let removed = self.welcome.take().is_some();
        self.dirty |= removed;
        removed
    }

    fn append_message(&mut self, markup: &str) {
        self.messages.push(markup.to_string());
        self.dirty = true;
    }

    fn scroll_messages_to_bottom(&mut self) {
        self.scroll_top = self.messages.len();
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.dirty = true;
    }
}
