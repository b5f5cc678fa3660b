//! QuizChat Core Library
//!
//! This crate provides the core functionality for QuizChat, including:
//! - Sample data for the incorrect-questions and chat-history panels
//! - Pure markup renderers for both lists and for chat bubbles
//! - The panel toggle state machine
//! - A mock chat session with deferred canned replies
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     quizchat-core                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  bootstrap.rs  - Startup wiring, UI event dispatch          │
//! │  chat/         - Chat session, reply sources, timestamps    │
//! │  panel.rs      - Single-selection panel toggle              │
//! │  render/       - records -> markup                          │
//! │  scheduler.rs  - Cancellable deferred replies               │
//! │  view.rs       - View boundary trait                        │
//! │  fixtures/     - Built-in sample data                       │
//! │  settings.rs   - Configuration                              │
//! │  types/        - Shared type definitions                    │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod bootstrap;
pub mod chat;
pub mod error;
pub mod fixtures;
pub mod panel;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use bootstrap::{App, UiEvent};
pub use chat::{CannedReplies, ChatConfig, ChatSession, ClockStyle, ReplySource};
pub use fixtures::Fixtures;
pub use panel::PanelToggle;
pub use render::EscapePolicy;
pub use scheduler::{ReplyHandle, ReplyScheduler};
pub use settings::AppSettings;
pub use view::{SharedView, View};
