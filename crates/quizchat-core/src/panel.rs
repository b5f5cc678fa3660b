//! Panel toggle controller
//!
//! Single-selection state machine over a fixed set of trigger/panel pairs.
//! Activating a trigger deactivates every trigger and panel, then activates
//! the matching pair. A trigger whose panel is missing still becomes active;
//! the panel selection silently fails.

use crate::view::View;
use std::collections::HashSet;
use tracing::debug;

/// Panel selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelToggle {
    triggers: Vec<String>,
    panels: HashSet<String>,
    active_trigger: Option<String>,
}

impl PanelToggle {
    /// Create a controller. `default` is selected if it names a known trigger.
    pub fn new<I, P>(triggers: I, panels: P, default: Option<&str>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut toggle = Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            panels: panels.into_iter().map(Into::into).collect(),
            active_trigger: None,
        };
        if let Some(key) = default {
            toggle.activate(key);
        }
        toggle
    }

    /// Build from whatever triggers and panels the view exposes
    pub fn from_view(view: &dyn View, default: Option<&str>) -> Self {
        let triggers = view.trigger_keys();
        let panels: Vec<String> = triggers
            .iter()
            .filter(|key| view.has_panel(key))
            .cloned()
            .collect();
        Self::new(triggers, panels, default)
    }

    /// Select the pair for `key`. Returns false for an unknown trigger.
    pub fn activate(&mut self, key: &str) -> bool {
        if !self.triggers.iter().any(|t| t == key) {
            debug!("Ignoring activation of unknown panel trigger: {}", key);
            return false;
        }
        self.active_trigger = Some(key.to_string());
        true
    }

    /// Key of the active trigger
    pub fn active(&self) -> Option<&str> {
        self.active_trigger.as_deref()
    }

    /// Key of the visible panel, if the active trigger has one
    pub fn active_panel(&self) -> Option<&str> {
        self.active_trigger
            .as_deref()
            .filter(|key| self.panels.contains(*key))
    }

    pub fn is_panel_active(&self, key: &str) -> bool {
        self.active_panel() == Some(key)
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Push the current selection to the view
    pub fn apply(&self, view: &mut dyn View) {
        for key in &self.triggers {
            view.set_trigger_active(key, false);
            view.set_panel_active(key, false);
        }

        if let Some(key) = self.active() {
            view.set_trigger_active(key, true);
            if !view.set_panel_active(key, true) {
                debug!("No panel for trigger {}", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MockView;
    use mockall::Sequence;

    fn toggle() -> PanelToggle {
        PanelToggle::new(["incorrect", "history"], ["incorrect", "history"], Some("incorrect"))
    }

    #[test]
    fn test_default_selection() {
        let t = toggle();
        assert_eq!(t.active(), Some("incorrect"));
        assert!(t.is_panel_active("incorrect"));
        assert!(!t.is_panel_active("history"));

        let none = PanelToggle::new(["a", "b"], ["a", "b"], None);
        assert_eq!(none.active(), None);
        assert_eq!(none.active_panel(), None);
    }

    #[test]
    fn test_exactly_one_panel_active() {
        let mut t = toggle();
        for key in ["history", "incorrect", "history", "history", "incorrect"] {
            assert!(t.activate(key));
            let active: Vec<&String> = t
                .triggers()
                .iter()
                .filter(|k| t.is_panel_active(k))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0], key);
        }
    }

    #[test]
    fn test_unknown_trigger_is_noop() {
        let mut t = toggle();
        assert!(!t.activate("settings"));
        assert_eq!(t.active(), Some("incorrect"));
    }

    #[test]
    fn test_trigger_without_panel() {
        let mut t = PanelToggle::new(["incorrect", "history"], ["incorrect"], Some("incorrect"));
        assert!(t.activate("history"));
        assert_eq!(t.active(), Some("history"));
        assert_eq!(t.active_panel(), None);
        assert!(!t.is_panel_active("incorrect"));
    }

    #[test]
    fn test_from_view() {
        let mut view = MockView::new();
        view.expect_trigger_keys()
            .returning(|| vec!["incorrect".to_string(), "history".to_string()]);
        view.expect_has_panel()
            .returning(|key: &str| key == "incorrect");

        let t = PanelToggle::from_view(&view, Some("history"));
        assert_eq!(t.active(), Some("history"));
        assert_eq!(t.active_panel(), None);
    }

    #[test]
    fn test_apply_clears_then_activates() {
        let mut t = toggle();
        t.activate("history");

        let mut view = MockView::new();
        let mut seq = Sequence::new();

        for key in ["incorrect", "history"] {
            view.expect_set_trigger_active()
                .withf(move |k: &str, active: &bool| k == key && !*active)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
            view.expect_set_panel_active()
                .withf(move |k: &str, active: &bool| k == key && !*active)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(true);
        }
        view.expect_set_trigger_active()
            .withf(|k: &str, active: &bool| k == "history" && *active)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_set_panel_active()
            .withf(|k: &str, active: &bool| k == "history" && *active)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);

        t.apply(&mut view);
    }
}
