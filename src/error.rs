//! Client error type.

use thiserror::Error;

/// Error returned by every client operation.
///
/// The FastGPT API does not expose a usable error taxonomy, so all
/// failures — transport, serialization, and non-success responses —
/// collapse into this one kind. The original cause, when there is one,
/// is available through [`std::error::Error::source`]; non-success
/// responses carry the HTTP status and body text in the message.
#[derive(Debug, Error)]
#[error("request failed: {message}")]
pub struct Error {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create an error with a message and no underlying cause.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    pub(crate) fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a non-success HTTP response.
    pub(crate) fn status(status: u16, body: String) -> Self {
        Self::new(format!("HTTP {}: {}", status, body))
    }

    /// The error message, without the `request failed:` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::with_source("transport error", err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::with_source("invalid URL", err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source("JSON error", err)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
