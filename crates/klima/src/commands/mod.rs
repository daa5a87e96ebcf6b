//! Command handlers.

pub mod conditioners;
pub mod lookups;

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use klima_core::Console;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Spinner shown while the store's loading flag would be up. Hidden when
/// quiet or when stderr is not a terminal.
pub fn fetch_spinner(global: &GlobalOpts, message: &'static str) -> ProgressBar {
    if global.quiet || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner().with_message(message);
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("spinner template is valid"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Surface a recorded store fetch error as a CLI failure.
pub fn check_store_error(console: &Console) -> Result<(), CliError> {
    match console.store().error() {
        Some(message) => Err(CliError::Fetch { message }),
        None => Ok(()),
    }
}
