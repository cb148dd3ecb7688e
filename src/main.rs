//! Terminal typing practice (default binary).
//!
//! Enters raw mode, runs rounds until Ctrl+C / SIGINT / SIGTERM or an input
//! failure, then restores the terminal before reporting any error.

use anyhow::Result;

use tui_typing::app;
use tui_typing::config::GameConfig;
use tui_typing::logging;
use tui_typing::term::TerminalSession;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    let (session, geometry) = TerminalSession::open().inspect_err(|e| log::error!("{e}"))?;

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|rt| rt.block_on(app::run(&config, geometry)));

    // Always restore the terminal before reporting.
    TerminalSession::close(session);
    if let Err(e) = &result {
        log::error!("session ended with error: {e:#}");
    }
    result
}
