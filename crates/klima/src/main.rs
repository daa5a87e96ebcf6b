mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use klima_core::Console;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let console = build_console(&cli.global)?;
    let global = cli.global;

    match cli.command {
        Command::List(args) => commands::conditioners::list(&console, args, &global).await,
        Command::Show(args) => commands::conditioners::show(&console, args, &global).await,
        Command::Create(args) => commands::conditioners::create(&console, args, &global).await,
        Command::Update(args) => commands::conditioners::update(&console, args, &global).await,
        Command::Delete(args) => commands::conditioners::delete(&console, args, &global).await,
        Command::Statuses => commands::lookups::statuses(&console, &global).await,
        Command::Types => commands::lookups::types(&console, &global).await,
        Command::Manufacturers => commands::lookups::manufacturers(&console, &global).await,
    }
}

/// Build the per-session `Console` from config file, environment, and
/// CLI flag overrides.
fn build_console(global: &cli::GlobalOpts) -> Result<Console, CliError> {
    let mut cfg = klima_config::load_config_or_default();
    if let Some(timeout) = global.timeout {
        cfg.defaults.timeout = timeout;
    }

    let console_config = klima_config::to_console_config(&cfg, global.api_url.as_deref())?;
    tracing::debug!(url = %console_config.base_url, "using API base URL");

    Ok(Console::new(console_config)?)
}
