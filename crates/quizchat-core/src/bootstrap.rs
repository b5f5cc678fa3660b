//! Startup wiring and event dispatch

use crate::chat::{ChatSession, ReplySource};
use crate::fixtures::Fixtures;
use crate::panel::PanelToggle;
use crate::render::{render_chat_history, render_incorrect_questions, EscapePolicy};
use crate::scheduler::ReplyHandle;
use crate::settings::AppSettings;
use crate::types::{Badge, BadgeCounts, Region};
use crate::view::{SharedView, View};
use std::sync::Arc;
use tracing::{debug, info};

/// Input the view forwards to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A panel trigger was clicked
    TriggerClicked(String),
    /// The chat form was submitted with this input text
    Submit(String),
}

/// The wired-up page
pub struct App {
    view: SharedView,
    panels: PanelToggle,
    chat: ChatSession,
    badges: BadgeCounts,
}

impl App {
    /// Wire panels, render both lists, set badges and open the chat in its
    /// welcome state.
    pub fn bootstrap(
        view: SharedView,
        fixtures: &Fixtures,
        settings: &AppSettings,
        replies: Arc<dyn ReplySource>,
    ) -> Self {
        let escape = settings.escape_policy();

        let (panels, badges) = {
            let mut v = view.lock();
            let panels = PanelToggle::from_view(&*v, settings.default_panel.as_deref());
            panels.apply(&mut *v);

            render_lists(&mut *v, fixtures, escape);
            let badges = fixtures.badge_counts();
            update_badges(&mut *v, badges);
            (panels, badges)
        };

        let chat = ChatSession::new(view.clone(), replies, settings.chat_config());
        chat.show_welcome();

        info!(
            "Page ready: {} panels, {} incorrect questions, {} history entries",
            panels.triggers().len(),
            badges.incorrect,
            badges.history
        );

        Self {
            view,
            panels,
            chat,
            badges,
        }
    }

    /// Route one UI event. Returns the reply handle for chat submissions.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<ReplyHandle> {
        match event {
            UiEvent::TriggerClicked(key) => {
                self.activate_panel(&key);
                None
            }
            UiEvent::Submit(text) => self.chat.submit(&text),
        }
    }

    pub fn activate_panel(&mut self, key: &str) {
        if self.panels.activate(key) {
            debug!("Switching to panel {}", key);
            self.panels.apply(&mut *self.view.lock());
        }
    }

    pub fn panels(&self) -> &PanelToggle {
        &self.panels
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Counts taken at startup. Not updated as the live chat grows.
    pub fn badges(&self) -> BadgeCounts {
        self.badges
    }

    pub fn shutdown(&self) {
        self.chat.shutdown();
    }
}

/// Render both read-only lists into their regions
pub fn render_lists(view: &mut dyn View, fixtures: &Fixtures, escape: EscapePolicy) {
    view.set_region_markup(
        Region::IncorrectQuestions,
        &render_incorrect_questions(&fixtures.incorrect_questions, escape),
    );
    view.set_region_markup(
        Region::ChatHistory,
        &render_chat_history(&fixtures.chat_history, escape),
    );
}

pub fn update_badges(view: &mut dyn View, counts: BadgeCounts) {
    view.set_badge(Badge::Incorrect, counts.incorrect);
    view.set_badge(Badge::History, counts.history);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::CannedReplies;
    use crate::types::Sender;
    use crate::view::{self, MockView};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Minimal page model: triggers, panels, regions, badges, message list
    #[derive(Default)]
    struct Page {
        triggers: Vec<(String, bool)>,
        panels: Vec<(String, bool)>,
        regions: HashMap<Region, String>,
        badges: HashMap<Badge, usize>,
        welcome: bool,
        messages: Vec<String>,
    }

    impl Page {
        fn with_panels(keys: &[&str], panels: &[&str]) -> Self {
            Self {
                triggers: keys.iter().map(|k| (k.to_string(), false)).collect(),
                panels: panels.iter().map(|k| (k.to_string(), false)).collect(),
                ..Self::default()
            }
        }

        fn active_triggers(&self) -> Vec<&str> {
            self.triggers
                .iter()
                .filter(|(_, a)| *a)
                .map(|(k, _)| k.as_str())
                .collect()
        }

        fn active_panels(&self) -> Vec<&str> {
            self.panels
                .iter()
                .filter(|(_, a)| *a)
                .map(|(k, _)| k.as_str())
                .collect()
        }
    }

    impl View for Page {
        fn trigger_keys(&self) -> Vec<String> {
            self.triggers.iter().map(|(k, _)| k.clone()).collect()
        }
        fn has_panel(&self, key: &str) -> bool {
            self.panels.iter().any(|(k, _)| k == key)
        }
        fn set_trigger_active(&mut self, key: &str, active: bool) {
            if let Some(t) = self.triggers.iter_mut().find(|(k, _)| k == key) {
                t.1 = active;
            }
        }
        fn set_panel_active(&mut self, key: &str, active: bool) -> bool {
            match self.panels.iter_mut().find(|(k, _)| k == key) {
                Some(p) => {
                    p.1 = active;
                    true
                }
                None => false,
            }
        }
        fn set_region_markup(&mut self, region: Region, markup: &str) {
            self.regions.insert(region, markup.to_string());
        }
        fn set_badge(&mut self, badge: Badge, count: usize) {
            self.badges.insert(badge, count);
        }
        fn show_welcome(&mut self, _markup: &str) {
            self.messages.clear();
            self.welcome = true;
        }
        fn remove_welcome(&mut self) -> bool {
            std::mem::replace(&mut self.welcome, false)
        }
        fn append_message(&mut self, markup: &str) {
            self.messages.push(markup.to_string());
        }
        fn scroll_messages_to_bottom(&mut self) {}
        fn clear_input(&mut self) {}
    }

    fn boot(page: Page) -> (App, Arc<Mutex<Page>>) {
        let page = Arc::new(Mutex::new(page));
        let shared: SharedView = page.clone();
        let app = App::bootstrap(
            shared,
            &Fixtures::builtin().unwrap(),
            &AppSettings::default(),
            Arc::new(CannedReplies::with_seed(3)),
        );
        (app, page)
    }

    #[tokio::test]
    async fn test_bootstrap_renders_page() {
        let (app, page) = boot(Page::with_panels(&["incorrect", "history"], &["incorrect", "history"]));
        let page = page.lock();

        assert_eq!(page.badges[&Badge::Incorrect], 3);
        assert_eq!(page.badges[&Badge::History], 5);
        assert_eq!(app.badges(), BadgeCounts { incorrect: 3, history: 5 });

        assert_eq!(page.regions[&Region::IncorrectQuestions].matches("question-item").count(), 3);
        assert_eq!(page.regions[&Region::ChatHistory].matches("chat-item ").count(), 5);

        assert_eq!(page.active_triggers(), vec!["incorrect"]);
        assert_eq!(page.active_panels(), vec!["incorrect"]);
        assert!(page.welcome);
    }

    #[tokio::test]
    async fn test_toggle_events() {
        let (mut app, page) = boot(Page::with_panels(&["incorrect", "history"], &["incorrect", "history"]));

        for key in ["history", "history", "incorrect", "bogus", "history"] {
            app.dispatch(UiEvent::TriggerClicked(key.to_string()));
            let page = page.lock();
            assert_eq!(page.active_panels().len(), 1);
            assert_eq!(page.active_triggers().len(), 1);
        }

        let page = page.lock();
        assert_eq!(page.active_panels(), vec!["history"]);
        assert_eq!(app.panels().active(), Some("history"));
    }

    #[tokio::test]
    async fn test_missing_panel_tolerated() {
        let (mut app, page) = boot(Page::with_panels(&["incorrect", "history"], &["incorrect"]));

        app.activate_panel("history");
        let page = page.lock();
        assert_eq!(page.active_triggers(), vec!["history"]);
        assert!(page.active_panels().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_badge_stays_static() {
        let (mut app, page) = boot(Page::with_panels(&["incorrect", "history"], &["incorrect", "history"]));

        let handle = app.dispatch(UiEvent::Submit("hi".to_string())).unwrap();
        assert!(app.dispatch(UiEvent::Submit("   ".to_string())).is_none());
        handle.finished().await;

        assert_eq!(app.chat().len(), 2);
        assert_eq!(app.chat().messages()[1].sender, Sender::Bot);

        let page = page.lock();
        assert_eq!(page.messages.len(), 2);
        assert_eq!(page.badges[&Badge::History], 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_reply() {
        let (mut app, _page) = boot(Page::with_panels(&["incorrect"], &["incorrect"]));

        app.dispatch(UiEvent::Submit("bye".to_string()));
        app.shutdown();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(app.chat().len(), 1);
    }

    #[test]
    fn test_update_badges_calls_view() {
        let mut view = MockView::new();
        view.expect_set_badge()
            .withf(|badge: &Badge, count: &usize| *badge == Badge::Incorrect && *count == 3)
            .times(1)
            .return_const(());
        view.expect_set_badge()
            .withf(|badge: &Badge, count: &usize| *badge == Badge::History && *count == 5)
            .times(1)
            .return_const(());

        update_badges(&mut view, BadgeCounts { incorrect: 3, history: 5 });
    }

    #[test]
    fn test_render_lists_empty_fixtures() {
        let mut view = MockView::new();
        view.expect_set_region_markup()
            .withf(|region: &Region, markup: &str| {
                *region == Region::IncorrectQuestions && markup.contains("No incorrect questions yet")
            })
            .times(1)
            .return_const(());
        view.expect_set_region_markup()
            .withf(|region: &Region, markup: &str| {
                *region == Region::ChatHistory && markup.contains("No chat history yet")
            })
            .times(1)
            .return_const(());

        render_lists(&mut view, &Fixtures::default(), EscapePolicy::Escape);
    }

    #[test]
    fn test_shared_view_helper() {
        let shared = view::share(Page::with_panels(&["a"], &["a"]));
        assert_eq!(shared.lock().trigger_keys(), vec!["a".to_string()]);
    }
}
