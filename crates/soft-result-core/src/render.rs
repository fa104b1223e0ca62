// Rust guideline compliant 2026-02-06

//! Turning envelopes into HTTP responses.
//!
//! Rendering is split in two: [`Envelope::render`] produces status, content
//! type and body bytes without touching any framework, and a
//! [`ResponseWriter`] supplied by the host puts those on the wire.

use crate::api_error::ApiError;
use crate::envelope::Envelope;
use crate::locale::{EncodedLocale, Locale, LocaleEncoding};
use http::StatusCode;
use serde::Serialize;
use std::convert::Infallible;
use std::future::Future;

/// Content type of every rendered body.
pub const APPLICATION_JSON: &str = "application/json";

/// Knobs that affect the wire form of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// How the locale field is written.
    pub locale_encoding: LocaleEncoding,
    /// Locale written for envelopes that never had one set.
    pub default_locale: Locale,
    /// Pretty-print the JSON body.
    pub pretty: bool,
}

/// A fully rendered response, ready for a [`ResponseWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    /// HTTP status line.
    pub status: StatusCode,
    /// Value of the `content-type` header.
    pub content_type: &'static str,
    /// Response body.
    pub body: Vec<u8>,
}

impl RenderedResponse {
    fn json(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: APPLICATION_JSON,
            body,
        }
    }

    /// Minimal 500 response reported when the payload cannot be encoded.
    #[must_use]
    pub fn serialization_failure(error: &crate::Error) -> Self {
        let body = serde_json::json!({ "error": error.to_string() });
        Self::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::to_vec(&body).unwrap_or_default(),
        )
    }
}

/// The host framework's side of response writing.
///
/// Given a rendered response, write it to the client. Implementations live
/// in framework adapters; this crate never names framework types.
pub trait ResponseWriter {
    /// Failure reported by the underlying transport.
    type Error;

    /// Writes status, content type and body.
    fn write_response(
        &mut self,
        response: RenderedResponse,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Keeps the last written response in memory.
#[derive(Debug, Default)]
pub struct BufferedWriter {
    response: Option<RenderedResponse>,
}

impl BufferedWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The response written so far, if any.
    #[must_use]
    pub fn response(&self) -> Option<&RenderedResponse> {
        self.response.as_ref()
    }

    /// Takes the written response out of the writer.
    pub fn take(&mut self) -> Option<RenderedResponse> {
        self.response.take()
    }
}

impl ResponseWriter for BufferedWriter {
    type Error = Infallible;

    fn write_response(
        &mut self,
        response: RenderedResponse,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        self.response = Some(response);
        std::future::ready(Ok(()))
    }
}

#[derive(Serialize)]
struct WireRef<'a, T> {
    #[serde(rename = "isSuccess")]
    is_success: bool,
    locale: EncodedLocale,
    messages: &'a [String],
    #[serde(skip_serializing_if = "value_is_absent")]
    value: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [ApiError]>,
}

// A payload that encodes as null is written the same as no payload.
// Encoding errors fall through so the real serialization reports them.
fn value_is_absent<T: Serialize>(value: &Option<&T>) -> bool {
    match value {
        None => true,
        Some(value) => matches!(serde_json::to_value(value), Ok(serde_json::Value::Null)),
    }
}

impl<T: Serialize> Envelope<T> {
    /// Encodes the envelope body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if the
    /// payload cannot be represented as JSON.
    pub fn to_json(&self, options: &RenderOptions) -> crate::Result<Vec<u8>> {
        let wire = WireRef {
            is_success: self.is_success(),
            locale: EncodedLocale {
                locale: self.locale().unwrap_or(options.default_locale),
                encoding: options.locale_encoding,
            },
            messages: self.messages(),
            value: self.value(),
            errors: self.errors(),
        };

        let body = if options.pretty {
            serde_json::to_vec_pretty(&wire)?
        } else {
            serde_json::to_vec(&wire)?
        };
        Ok(body)
    }

    /// Renders the envelope as an HTTP response.
    ///
    /// A payload that cannot be encoded downgrades the response to a 500
    /// with body `{"error": "Serialization error: ..."}`.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> RenderedResponse {
        match self.to_json(options) {
            Ok(body) => RenderedResponse::json(self.status(), body),
            Err(err) => {
                tracing::warn!(
                    status = self.status().as_u16(),
                    error = %err,
                    "envelope payload could not be serialized, responding with 500"
                );
                RenderedResponse::serialization_failure(&err)
            }
        }
    }

    /// Renders the envelope and hands it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the writer reports. Serialization failures are
    /// not errors here; they become a 500 response.
    pub async fn write_to<W>(self, writer: &mut W, options: &RenderOptions) -> Result<(), W::Error>
    where
        W: ResponseWriter,
    {
        let response = self.render(options);
        tracing::debug!(
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "writing envelope response"
        );
        writer.write_response(response).await
    }
}
