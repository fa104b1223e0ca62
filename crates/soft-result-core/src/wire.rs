// Rust guideline compliant 2026-02-06

//! Reading envelopes back from their wire form.

use crate::api_error::ApiError;
use crate::envelope::{Envelope, ErrorList, Outcome};
use crate::locale::Locale;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The JSON body of a rendered envelope, field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEnvelope<T> {
    /// Success flag as written by the server.
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    /// Locale, in either wire encoding.
    pub locale: Locale,
    /// Messages in order.
    pub messages: Vec<String>,
    /// Payload, absent on failures and no-content successes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    /// Errors, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,
}

impl<T> Envelope<T> {
    /// Rebuilds an envelope from its wire body and the response status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Envelope`](crate::Error::Envelope) if the body
    /// carries no messages, carries both a value and errors, carries an
    /// empty error list, reports a success flag that disagrees with its
    /// errors, or pairs an outcome with a status of the wrong class.
    pub fn from_wire(wire: WireEnvelope<T>, status: StatusCode) -> crate::Result<Self> {
        if wire.messages.is_empty() {
            return Err(crate::Error::Envelope("messages cannot be empty".to_string()));
        }

        let outcome = match (wire.value, wire.errors) {
            (Some(_), Some(_)) => {
                return Err(crate::Error::Envelope(
                    "value and errors cannot both be present".to_string(),
                ))
            }
            (_, Some(errors)) if errors.is_empty() => {
                return Err(crate::Error::Envelope(
                    "errors must be omitted rather than empty".to_string(),
                ))
            }
            (None, Some(errors)) => Outcome::Failure {
                errors: ErrorList::try_from(errors)?,
            },
            (value, None) => Outcome::Success { value },
        };

        let failing = matches!(outcome, Outcome::Failure { .. });
        if wire.is_success == failing {
            return Err(crate::Error::Envelope(format!(
                "isSuccess is {} but errors are {}",
                wire.is_success,
                if failing { "present" } else { "absent" }
            )));
        }

        let status_matches = if failing {
            status.is_client_error() || status.is_server_error()
        } else {
            status.is_success()
        };
        if !status_matches {
            return Err(crate::Error::Envelope(format!(
                "status {} does not match a {} envelope",
                status.as_u16(),
                if failing { "failure" } else { "success" }
            )));
        }

        Ok(Self::from_parts(
            status,
            wire.messages,
            outcome,
            Some(wire.locale),
        ))
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parses a JSON body and rebuilds the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) for
    /// malformed JSON and [`Error::Envelope`](crate::Error::Envelope) for a
    /// body that violates the envelope rules.
    pub fn from_json(body: &[u8], status: StatusCode) -> crate::Result<Self> {
        let wire: WireEnvelope<T> = serde_json::from_slice(body)?;
        Self::from_wire(wire, status)
    }
}
