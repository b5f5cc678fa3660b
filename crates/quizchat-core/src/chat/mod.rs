//! Mock chat widget
//!
//! - `session`   - message log, submit handling, deferred replies
//! - `responder` - reply source trait and canned replies
//! - `clock`     - bubble timestamps

mod clock;
mod responder;
mod session;

pub use clock::ClockStyle;
pub use responder::{
    compose_reply, is_canned_reply, CannedReplies, ReplySource, DEMO_DISCLAIMER, REPLY_TEMPLATES,
};
pub use session::{ChatConfig, ChatSession, DEFAULT_REPLY_DELAY};
