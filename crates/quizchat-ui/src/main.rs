//! QuizChat page host
//!
//! Builds the page, then drives it from stdin and keeps an HTML snapshot on
//! disk.

use parking_lot::Mutex;
use quizchat_core::{App, AppSettings, CannedReplies, Fixtures, SharedView};
use quizchat_ui::{HtmlDocument, Host};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("QuizChat v{}", env!("CARGO_PKG_VERSION"));

    let settings = AppSettings::load()?;
    let fixtures = Fixtures::load(settings.fixtures_path.as_deref())?;

    let document = Arc::new(Mutex::new(HtmlDocument::new("QuizChat")));
    let view: SharedView = document.clone();
    let app = App::bootstrap(view, &fixtures, &settings, Arc::new(CannedReplies::new()));

    println!("Type a message to chat, /incorrect or /history to switch panels, /quit to exit.");

    Host::new(app, document, settings.output_path.clone())
        .run(BufReader::new(tokio::io::stdin()))
        .await
}
