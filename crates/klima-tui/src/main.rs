//! `klima-tui` — terminal admin console for a conditioner fleet.
//!
//! Built on [ratatui](https://ratatui.rs) over the shared store in
//! `klima-core`: one browse screen (filterable table + detail panel), a
//! create/edit form, and a delete confirmation, with transient toasts for
//! mutation outcomes.
//!
//! Logs are written to a file (default `/tmp/klima-tui.log`) to avoid
//! corrupting the terminal UI.

mod app;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use klima_core::Console;

use crate::app::App;

/// Terminal admin console for managing air-conditioning units.
#[derive(Parser, Debug)]
#[command(name = "klima-tui", version, about)]
struct Cli {
    /// API base URL (e.g., https://localhost:7063)
    #[arg(short = 'u', long, env = "KLIMA_API_URL")]
    api_url: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/klima-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application so logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("klima_tui={log_level},klima_core={log_level}")));

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("klima-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Build the session [`Console`] from config file + environment + flags.
fn build_console(cli: &Cli) -> Result<Console> {
    let cfg = klima_config::load_config_or_default();
    let console_config = klima_config::to_console_config(&cfg, cli.api_url.as_deref())
        .map_err(|e| eyre!("{e}"))?;
    info!(url = %console_config.base_url, "starting klima-tui");
    Console::new(console_config).map_err(|e| eyre!("{e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let console = build_console(&cli)?;

    let mut app = App::new(console);
    app.run().await?;

    Ok(())
}
