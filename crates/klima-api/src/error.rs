use thiserror::Error;

/// Top-level error type for the `klima-api` crate.
///
/// Every failure mode at the HTTP boundary collapses into one of these
/// variants, and [`Error::user_message`] reduces all of them to the single
/// user-facing string the rest of the system displays. Callers above this
/// crate never branch on the failure kind, only on presence of a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server responded with a non-2xx status. `message` is already
    /// normalized: the structured body's `message` field when present,
    /// otherwise `"Server error: {status}"`.
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body failed to deserialize, with the raw body
    /// kept for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The one normalized user-facing message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Unable to reach the server. Please check your connection.".into()
            }
            Self::Server { message, .. } => message.clone(),
            _ => "An unexpected error occurred".into(),
        }
    }

    /// Returns `true` if this is a "not found" server response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}
