//! # Feedline Main Entry Point
//!
//! Wires the production implementations together and runs the controller.

use anyhow::Result;
use feedline::{
    cmd_args::CommandLineArgs, config, ApiClient, FeedController, FeedScreen, LoadingIndicator,
    TerminalBusyVisual, TerminalEventStream, TerminalSurface,
};

/// Log to a file when `RUST_LOG` is set; stdout belongs to the TUI.
fn init_tracing() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let log_file = std::fs::File::create(config::LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing()?;

    let loading = LoadingIndicator::new(Box::new(TerminalBusyVisual::new()));
    let remote = ApiClient::new(config::get_base_url(), loading.clone());
    let screen = FeedScreen::new(TerminalSurface::stdout());
    let events = TerminalEventStream::new();

    let mut app = FeedController::new(
        remote,
        screen,
        events,
        loading,
        cmd_args.user(),
        cmd_args.limit(),
    );
    app.run().await
}
