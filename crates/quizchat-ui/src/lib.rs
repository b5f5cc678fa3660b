//! QuizChat UI Library
//!
//! HTML page host for QuizChat.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────┬─────────────────────────────────────┐
//! │ Sidebar                       │ ChatContainer                       │
//! │                               │                                     │
//! │ ┌───────────┐ ┌─────────────┐ │ ┌─────────────────────────────────┐ │
//! │ │Incorrect 3│ │Chat History5│ │ │MessageList                      │ │
//! │ └───────────┘ └─────────────┘ │ │  welcome / bubbles              │ │
//! │                               │ │                                 │ │
//! │ ┌───────────────────────────┐ │ │                                 │ │
//! │ │MenuPanel (one active)     │ │ └─────────────────────────────────┘ │
//! │ │  question / history items │ │ ┌─────────────────────────────────┐ │
//! │ └───────────────────────────┘ │ │ChatForm [input] [Send]          │ │
//! │                               │ └─────────────────────────────────┘ │
//! └───────────────────────────────┴─────────────────────────────────────┘
//! ```

pub mod document;
pub mod host;
pub mod theme;

// Re-exports
pub use document::{HtmlDocument, PanelSpec};
pub use host::{Command, Host};
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors, Typography};
