//! View boundary
//!
//! The core never touches a concrete UI. It drives anything that implements
//! [`View`]: trigger/panel pairs sharing a key, two list regions, two badge
//! slots, a message list and a text input. Missing elements are tolerated;
//! methods on absent targets are no-ops.

use crate::types::{Badge, Region};
use parking_lot::Mutex;
use std::sync::Arc;

/// Visual surface driven by the core
#[cfg_attr(test, mockall::automock)]
pub trait View {
    /// Keys of the panel triggers present in the view, in display order
    fn trigger_keys(&self) -> Vec<String>;

    /// Whether a panel for `key` exists
    fn has_panel(&self, key: &str) -> bool;

    /// Mark a trigger active or inactive
    fn set_trigger_active(&mut self, key: &str, active: bool);

    /// Mark a panel active or inactive. Returns false if no such panel.
    fn set_panel_active(&mut self, key: &str, active: bool) -> bool;

    /// Replace the content of a list region
    fn set_region_markup(&mut self, region: Region, markup: &str);

    /// Write a count into a badge slot
    fn set_badge(&mut self, badge: Badge, count: usize);

    /// Replace the message list with the welcome placeholder
    fn show_welcome(&mut self, markup: &str);

    /// Remove the welcome placeholder. Returns false if it was not shown.
    fn remove_welcome(&mut self) -> bool;

    /// Append one bubble to the message list
    fn append_message(&mut self, markup: &str);

    fn scroll_messages_to_bottom(&mut self);

    /// Clear the chat text input
    fn clear_input(&mut self);
}

/// A view shared between UI handlers and deferred reply tasks
pub type SharedView = Arc<Mutex<dyn View + Send>>;

/// Wrap a concrete view for sharing
pub fn share<V: View + Send + 'static>(view: V) -> SharedView {
    Arc::new(Mutex::new(view))
}
