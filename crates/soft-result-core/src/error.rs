// Rust guideline compliant 2026-02-06

//! Error types for the SoftResult core library.

use thiserror::Error;

/// Result type alias for SoftResult operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SoftResult operations.
///
/// These are programmer or deployment errors. Client-facing failures such as
/// "bad request" or "not found" are ordinary [`Envelope`](crate::Envelope)
/// values and never travel through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor received input that would break an envelope invariant.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A decoded wire envelope is inconsistent.
    #[error("Invalid envelope: {0}")]
    Envelope(String),

    /// Configuration is missing, malformed, or out of range.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
