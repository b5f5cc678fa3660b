//! Terminal host
//!
//! Feeds stdin lines to the page as UI events and keeps an HTML snapshot of
//! the page on disk. `/quit` exits, `/<panel key>` clicks that panel's
//! trigger, anything else (including unknown `/words`) is typed into the chat
//! input and submitted.

use crate::document::HtmlDocument;
use parking_lot::Mutex;
use quizchat_core::{App, ChatMessage, UiEvent};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// How often pending replies are picked up
const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Toggle(String),
    Submit(String),
}

impl Command {
    /// Parse a line against the page's trigger keys. A slash word that names
    /// no trigger is chat text.
    pub fn parse(line: &str, triggers: &[String]) -> Self {
        match line.trim().strip_prefix('/') {
            Some("quit") | Some("q") => Self::Quit,
            Some(key) if triggers.iter().any(|t| t == key) => Self::Toggle(key.to_string()),
            _ => Self::Submit(line.to_string()),
        }
    }
}

pub struct Host {
    app: App,
    document: Arc<Mutex<HtmlDocument>>,
    output: PathBuf,
    echoed: usize,
}

impl Host {
    pub fn new(app: App, document: Arc<Mutex<HtmlDocument>>, output: PathBuf) -> Self {
        Self {
            app,
            document,
            output,
            echoed: 0,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Apply one input line. Returns false when the host should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line, self.app.panels().triggers()) {
            Command::Quit => false,
            Command::Toggle(key) => {
                self.app.dispatch(UiEvent::TriggerClicked(key));
                true
            }
            Command::Submit(text) => {
                let typed = {
                    let mut doc = self.document.lock();
                    doc.set_input(text);
                    doc.input().to_string()
                };
                self.app.dispatch(UiEvent::Submit(typed));
                true
            }
        }
    }

    /// Messages added since the last call
    pub fn new_messages(&mut self) -> Vec<ChatMessage> {
        let messages = self.app.chat().messages();
        let fresh = messages.get(self.echoed..).unwrap_or_default().to_vec();
        self.echoed = messages.len();
        fresh
    }

    /// Echo new messages and rewrite the page if it changed
    pub fn flush(&mut self) -> std::io::Result<()> {
        for message in self.new_messages() {
            println!("[{}] {}: {}", message.timestamp, message.sender, message.message);
        }

        let mut doc = self.document.lock();
        if doc.take_dirty() {
            doc.write_to(&self.output)?;
        }
        Ok(())
    }

    /// Run until `/quit` or end of input.
    ///
    /// At end of input, pending replies are allowed to land before exiting.
    /// `/quit` cancels them.
    pub async fn run<R>(mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        info!("Writing page to {:?}", self.output);
        self.flush()?;

        let mut lines = input.lines();
        let mut refresh = tokio::time::interval(REFRESH_INTERVAL);
        let mut quit = false;

        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => {
                        if !self.handle_line(&line) {
                            quit = true;
                            break;
                        }
                        self.flush()?;
                    }
                    None => break,
                },
                _ = refresh.tick() => self.flush()?,
            }
        }

        if quit {
            self.app.shutdown();
        } else {
            while self.app.chat().pending_replies() > 0 {
                refresh.tick().await;
                self.flush()?;
            }
        }

        self.flush()?;
        debug!("Host stopped after {} messages", self.echoed);
        Ok(())
    }
}
