// Rust guideline compliant 2026-02-09

//! axum integration for SoftResult envelopes.
//!
//! Handlers return [`Reply<T>`] (or convert an [`Envelope<T>`] into one) and
//! axum writes the rendered envelope with its status and JSON content type.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use soft_result_core::{Envelope, RenderOptions, RenderedResponse, ResponseWriter};
use std::convert::Infallible;
use std::future::Future;

/// An envelope on its way out of an axum handler.
#[derive(Debug, Clone)]
#[must_use]
pub struct Reply<T> {
    envelope: Envelope<T>,
    options: RenderOptions,
}

impl<T> Reply<T> {
    /// Wraps an envelope, rendered with default options.
    pub fn new(envelope: Envelope<T>) -> Self {
        Self::with_options(envelope, RenderOptions::default())
    }

    /// Wraps an envelope, rendered with deployment options.
    pub fn with_options(envelope: Envelope<T>, options: RenderOptions) -> Self {
        Self { envelope, options }
    }

    /// The wrapped envelope.
    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }
}

impl<T> From<Envelope<T>> for Reply<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self::new(envelope)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        into_axum_response(self.envelope.render(&self.options))
    }
}

/// Converts a rendered envelope into an axum response.
pub fn into_axum_response(rendered: RenderedResponse) -> Response {
    let mut resp = Response::new(Body::from(rendered.body));
    *resp.status_mut() = rendered.status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(rendered.content_type));
    resp
}

/// [`ResponseWriter`] that builds an axum [`Response`].
///
/// For hosts that drive [`Envelope::write_to`] instead of returning a
/// [`Reply`] from the handler.
#[derive(Debug, Default)]
pub struct AxumWriter {
    response: Option<Response>,
}

impl AxumWriter {
    /// Creates a writer with nothing written yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the built response. `None` until something was written.
    pub fn into_response(self) -> Option<Response> {
        self.response
    }
}

impl ResponseWriter for AxumWriter {
    type Error = Infallible;

    fn write_response(
        &mut self,
        response: RenderedResponse,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        tracing::trace!(status = response.status.as_u16(), "building axum response");
        self.response = Some(into_axum_response(response));
        std::future::ready(Ok(()))
    }
}
