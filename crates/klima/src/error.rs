//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use klima_core::{CoreError, FieldError};

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const FETCH: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// A list/lookup fetch failed; the store recorded this message.
    #[error("{message}")]
    #[diagnostic(
        code(klima::fetch_failed),
        help("Check that the fleet API is reachable, then retry.")
    )]
    Fetch { message: String },

    /// A mutation or direct fetch failed with a normalized API message.
    #[error("{message}")]
    #[diagnostic(code(klima::api_error))]
    Api { message: String },

    /// Draft input failed client-side validation; nothing was sent.
    #[error("Invalid input")]
    #[diagnostic(code(klima::validation), help("{details}"))]
    Validation { details: String },

    /// Bad or missing configuration.
    #[error("{message}")]
    #[diagnostic(
        code(klima::config),
        help("Set KLIMA_API_URL, pass --api-url, or edit the config file.")
    )]
    Config { message: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::USAGE,
            Self::Fetch { .. } => exit_code::FETCH,
            _ => exit_code::GENERAL,
        }
    }

    /// Build a validation error listing one line per failing field.
    pub fn validation(fields: &[FieldError]) -> Self {
        let details = fields
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join("\n");
        Self::Validation { details }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(fields) => Self::validation(&fields),
            CoreError::Config { message } => Self::Config { message },
            other => Self::Api {
                message: other.user_message(),
            },
        }
    }
}

impl From<klima_config::ConfigError> for CliError {
    fn from(err: klima_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
