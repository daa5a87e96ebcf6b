// ── Core error types ──
//
// User-facing errors from klima-core. Gateway failures arrive already
// normalized by `klima_api::Error::user_message`, so consumers never see
// HTTP status codes or JSON parse failures — only on a message they can
// display, and the presence or absence of a failure.

use thiserror::Error;

use crate::validation::FieldError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A gateway failure, carrying the one normalized user message.
    #[error("API error: {message}")]
    Api { message: String },

    /// Client-side, field-level validation failure. Never produced by a
    /// network call — validation runs before submission.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Configuration problem (bad base URL, unreadable config file).
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// The single user-facing message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message } | Self::Config { message } => message.clone(),
            Self::Validation(fields) => fields
                .iter()
                .map(|f| f.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl From<klima_api::Error> for CoreError {
    fn from(err: klima_api::Error) -> Self {
        Self::Api {
            message: err.user_message(),
        }
    }
}
