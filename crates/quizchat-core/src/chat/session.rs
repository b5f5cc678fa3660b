//! Live chat session

use super::{ClockStyle, ReplySource};
use crate::render::{render_chat_bubble, render_welcome, EscapePolicy};
use crate::scheduler::{ReplyHandle, ReplyScheduler};
use crate::types::ChatMessage;
use crate::view::SharedView;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default pause before the bot answers
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Per-session chat behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    pub reply_delay: Duration,
    pub clock: ClockStyle,
    pub escape: EscapePolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            clock: ClockStyle::Auto,
            escape: EscapePolicy::Escape,
        }
    }
}

/// Append-only message log paired with its rendered bubbles
pub struct ChatSession {
    log: Arc<Mutex<Vec<ChatMessage>>>,
    view: SharedView,
    replies: Arc<dyn ReplySource>,
    scheduler: ReplyScheduler,
    config: ChatConfig,
}

impl ChatSession {
    pub fn new(view: SharedView, replies: Arc<dyn ReplySource>, mut config: ChatConfig) -> Self {
        config.clock = config.clock.resolve();
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            view,
            replies,
            scheduler: ReplyScheduler::new(),
            config,
        }
    }

    /// Put the message list into its welcome state
    pub fn show_welcome(&self) {
        self.view.lock().show_welcome(&render_welcome());
    }

    /// Send a user message and schedule the bot's reply.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn submit(&self, text: &str) -> Option<ReplyHandle> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage::user(text, self.config.clock.now());
        append(&self.log, &self.view, message, self.config.escape);
        self.view.lock().clear_input();

        let log = self.log.clone();
        let view = self.view.clone();
        let replies = self.replies.clone();
        let prompt = text.to_string();
        let config = self.config;

        let handle = self.scheduler.schedule(config.reply_delay, async move {
            let reply = replies.reply(&prompt).await;
            append(&log, &view, ChatMessage::bot(reply, config.clock.now()), config.escape);
        });

        info!("User message submitted, reply {} pending", handle.id());
        Some(handle)
    }

    /// Snapshot of the log in display order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Cancel all replies still waiting on their delay
    pub fn shutdown(&self) {
        debug!("Chat session shutting down, {} replies pending", self.pending_replies());
        self.scheduler.shutdown();
    }
}

/// Record and render one message. Log and view are updated under both locks
/// so bubble order always matches log order.
fn append(
    log: &Mutex<Vec<ChatMessage>>,
    view: &SharedView,
    message: ChatMessage,
    escape: EscapePolicy,
) {
    let markup = render_chat_bubble(&message, escape);
    let mut log = log.lock();
    let mut view = view.lock();

    if view.remove_welcome() {
        debug!("Welcome placeholder removed");
    }
    view.append_message(&markup);
    view.scroll_messages_to_bottom();
    log.push(message);
}
