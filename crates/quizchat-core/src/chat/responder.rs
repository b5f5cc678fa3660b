//! Reply sources for the chat widget
//!
//! [`ReplySource`] is the seam a real chatbot client would plug into. The
//! only implementation here picks a canned template at random.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Canned reply openers, chosen uniformly
pub const REPLY_TEMPLATES: [&str; 5] = [
    "That's an interesting question! Let me help you with that.",
    "I understand what you're asking. Here's what I think...",
    "Great question! Based on what you've shared, I'd suggest...",
    "I can help you with that. Let me explain...",
    "That's a good point. Here's my perspective on it...",
];

/// Sentence appended to every canned reply
pub const DEMO_DISCLAIMER: &str =
    "This is a demo response. In production, this would connect to your chatbot API.";

/// Produces the bot's answer to a user message
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn reply(&self, prompt: &str) -> String;
}

/// Random canned replies
pub struct CannedReplies {
    rng: Mutex<StdRng>,
}

impl CannedReplies {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self) -> &'static str {
        let index = self.rng.lock().gen_range(0..REPLY_TEMPLATES.len());
        REPLY_TEMPLATES[index]
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplySource for CannedReplies {
    async fn reply(&self, _prompt: &str) -> String {
        compose_reply(self.pick())
    }
}

/// Template followed by the disclaimer
pub fn compose_reply(template: &str) -> String {
    format!("{} {}", template, DEMO_DISCLAIMER)
}

/// Whether `text` has the shape of a canned reply
pub fn is_canned_reply(text: &str) -> bool {
    REPLY_TEMPLATES
        .iter()
        .any(|template| text == compose_reply(template))
}
