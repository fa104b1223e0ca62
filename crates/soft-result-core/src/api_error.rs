// Rust guideline compliant 2026-02-06

//! Client-facing error values carried inside failure envelopes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structured context for an [`ApiError`], keyed by the offending field or item.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Message used by [`ApiError::new`].
pub const DEFAULT_ERROR_MESSAGE: &str = "Error";

/// One client-facing failure: a message plus structured metadata.
///
/// Values are immutable once built. Every constructor that takes user input
/// validates it, so an `ApiError` always has a non-blank message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ApiErrorRepr")]
pub struct ApiError {
    message: String,
    metadata: Metadata,
}

#[derive(Deserialize)]
struct ApiErrorRepr {
    message: String,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<ApiErrorRepr> for ApiError {
    type Error = crate::Error;

    fn try_from(repr: ApiErrorRepr) -> crate::Result<Self> {
        Self::with_metadata(repr.message, repr.metadata)
    }
}

impl ApiError {
    /// Creates the sentinel error with message `"Error"` and no metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: DEFAULT_ERROR_MESSAGE.to_string(),
            metadata: Metadata::new(),
        }
    }

    /// Creates an error with the given message and no metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is empty or whitespace only.
    pub fn with_message(message: impl Into<String>) -> crate::Result<Self> {
        Self::with_metadata(message, Metadata::new())
    }

    /// Creates an error with an explicit message and metadata.
    ///
    /// Unlike [`ApiError::from_metadata`], the metadata may be empty here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is empty or whitespace only.
    pub fn with_metadata(message: impl Into<String>, metadata: Metadata) -> crate::Result<Self> {
        let message = message.into();
        require_message(&message)?;
        Ok(Self { message, metadata })
    }

    /// Creates an error whose message is derived from its metadata.
    ///
    /// The message is one `"key: value"` line per entry, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// metadata is empty.
    pub fn from_metadata(metadata: Metadata) -> crate::Result<Self> {
        let message = metadata_to_string(&metadata)?;
        Ok(Self { message, metadata })
    }

    /// Creates an error for a single offending key.
    ///
    /// The message is `"{key}: {value}"` and the metadata holds the one pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// key is blank or the value is JSON `null`.
    pub fn from_key_value(
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> crate::Result<Self> {
        let key = key.into();
        let value = value.into();
        if key.trim().is_empty() {
            return Err(crate::Error::invalid_argument("metadata key cannot be empty"));
        }
        if value.is_null() {
            return Err(crate::Error::invalid_argument(format!(
                "metadata value for '{}' cannot be null",
                key
            )));
        }

        let message = format!("{}: {}", key, display_value(&value));
        let mut metadata = Metadata::new();
        metadata.insert(key, value);
        Ok(Self { message, metadata })
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the structured metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Splits the error into its message and metadata.
    #[must_use]
    pub fn into_parts(self) -> (String, Metadata) {
        (self.message, self.metadata)
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

pub(crate) fn require_message(message: &str) -> crate::Result<()> {
    if message.trim().is_empty() {
        return Err(crate::Error::invalid_argument("message cannot be empty"));
    }
    Ok(())
}

/// Joins metadata entries into `"key: value"` lines.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// metadata is empty.
pub fn metadata_to_string(metadata: &Metadata) -> crate::Result<String> {
    if metadata.is_empty() {
        return Err(crate::Error::invalid_argument(
            "metadata cannot be empty when deriving an error message",
        ));
    }

    Ok(metadata
        .iter()
        .map(|(key, value)| format!("{}: {}", key, display_value(value)))
        .collect::<Vec<_>>()
        .join("\n"))
}

// Strings print bare; everything else prints as compact JSON.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
