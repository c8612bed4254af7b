//! Error types for loading gallery items.

use gallery_model::ItemId;
use thiserror::Error;

/// Errors that can occur while fetching the initial collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Transport failure (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Request failed! Could not fetch data! (status {status})")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// I/O error while reading a local source.
    #[error("I/O error: {0}")]
    Io(String),

    /// The payload is not a JSON array of items.
    #[error("JSON parse error: {0}")]
    Decode(String),

    /// The payload lists the same id twice.
    #[error("duplicate item id {0} in payload")]
    DuplicateId(ItemId),
}

impl IngestError {
    /// Whether asking again might succeed. Loads are never retried
    /// automatically; this only informs the caller.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Io(_) => true,
            Self::Status { status } => *status >= 500,
            Self::Decode(_) | Self::DuplicateId(_) => false,
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
