// Rust guideline compliant 2026-02-06

//! The response envelope and its named constructors.
//!
//! Every handler outcome is one of a small set of canonical shapes: `200 Ok`
//! with a value, `204 No Content`, `400 Bad Request` or `404 Not Found`. Each
//! shape has its own constructor so call sites cannot build an envelope that
//! is both successful and failing, or failing without an error.

use crate::api_error::{require_message, ApiError, Metadata};
use crate::locale::Locale;
use futures::{Stream, StreamExt};
use http::StatusCode;
use std::future::{ready, Ready};

/// Message used by [`Envelope::ok`].
pub const OK_MESSAGE: &str = "Ok";

/// A non-empty, ordered list of errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorList(Vec<ApiError>);

impl ErrorList {
    /// Creates a list holding exactly one error.
    #[must_use]
    pub fn single(error: ApiError) -> Self {
        Self(vec![error])
    }

    /// Returns the errors as a slice. Never empty.
    #[must_use]
    pub fn as_slice(&self) -> &[ApiError] {
        &self.0
    }

    /// Returns the first error.
    #[must_use]
    pub fn first(&self) -> &ApiError {
        &self.0[0]
    }

    /// Returns the number of errors. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `Vec`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }

    /// Converts the list back into a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<ApiError> {
        self.0
    }
}

impl TryFrom<Vec<ApiError>> for ErrorList {
    type Error = crate::Error;

    fn try_from(errors: Vec<ApiError>) -> crate::Result<Self> {
        if errors.is_empty() {
            return Err(crate::Error::invalid_argument(
                "a failure envelope requires at least one error",
            ));
        }
        Ok(Self(errors))
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The success-or-failure state of an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request succeeded, optionally with a payload.
    Success {
        /// Payload, absent for no-content responses.
        value: Option<T>,
    },
    /// The request failed with at least one error.
    Failure {
        /// Errors in the order they were reported.
        errors: ErrorList,
    },
}

/// Standard response envelope returned by every handler.
///
/// The status code is fixed at construction and only becomes observable when
/// the envelope is rendered. The locale is the one field callers may change
/// afterwards; while unset, rendering uses the deployment default.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Envelope<T> {
    status: StatusCode,
    messages: Vec<String>,
    outcome: Outcome<T>,
    locale: Option<Locale>,
}

impl<T> Envelope<T> {
    fn success(status: StatusCode, message: String, value: Option<T>) -> Self {
        Self {
            status,
            messages: vec![message],
            outcome: Outcome::Success { value },
            locale: None,
        }
    }

    fn failure(status: StatusCode, messages: Vec<String>, errors: ErrorList) -> Self {
        Self {
            status,
            messages,
            outcome: Outcome::Failure { errors },
            locale: None,
        }
    }

    pub(crate) fn from_parts(
        status: StatusCode,
        messages: Vec<String>,
        outcome: Outcome<T>,
        locale: Option<Locale>,
    ) -> Self {
        Self {
            status,
            messages,
            outcome,
            locale,
        }
    }

    /// `200 OK` carrying `value`, with the message `"Ok"`.
    pub fn ok(value: T) -> Self {
        Self::success(StatusCode::OK, OK_MESSAGE.to_string(), Some(value))
    }

    /// `200 OK` carrying `value` with a custom message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is blank.
    pub fn ok_with_message(message: impl Into<String>, value: T) -> crate::Result<Self> {
        let message = message.into();
        require_message(&message)?;
        Ok(Self::success(StatusCode::OK, message, Some(value)))
    }

    /// `204 No Content` without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is blank.
    pub fn no_content(message: impl Into<String>) -> crate::Result<Self> {
        let message = message.into();
        require_message(&message)?;
        Ok(Self::success(StatusCode::NO_CONTENT, message, None))
    }

    /// `400 Bad Request` with a single error built from `message`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is blank.
    pub fn bad_request(message: impl Into<String>) -> crate::Result<Self> {
        Self::fail_with_message(StatusCode::BAD_REQUEST, message.into())
    }

    /// `400 Bad Request` carrying `error`.
    pub fn bad_request_error(error: ApiError) -> Self {
        Self::fail_with_error(StatusCode::BAD_REQUEST, error)
    }

    /// `400 Bad Request` carrying every error in `errors`, one message each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `errors` is empty.
    pub fn bad_request_errors(
        errors: impl IntoIterator<Item = ApiError>,
    ) -> crate::Result<Self> {
        Self::fail_with_errors(StatusCode::BAD_REQUEST, errors)
    }

    /// `400 Bad Request` with one error whose metadata is `{key: value}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message or key is blank.
    pub fn bad_request_with(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> crate::Result<Self> {
        Self::fail_with_entry(StatusCode::BAD_REQUEST, message.into(), key.into(), value.into())
    }

    /// `404 Not Found` with a single error built from `message`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message is blank.
    pub fn not_found(message: impl Into<String>) -> crate::Result<Self> {
        Self::fail_with_message(StatusCode::NOT_FOUND, message.into())
    }

    /// `404 Not Found` carrying `error`.
    pub fn not_found_error(error: ApiError) -> Self {
        Self::fail_with_error(StatusCode::NOT_FOUND, error)
    }

    /// `404 Not Found` carrying every error in `errors`, one message each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `errors` is empty.
    pub fn not_found_errors(errors: impl IntoIterator<Item = ApiError>) -> crate::Result<Self> {
        Self::fail_with_errors(StatusCode::NOT_FOUND, errors)
    }

    /// `404 Not Found` with one error whose metadata is `{key: value}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// message or key is blank.
    pub fn not_found_with(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> crate::Result<Self> {
        Self::fail_with_entry(StatusCode::NOT_FOUND, message.into(), key.into(), value.into())
    }

    fn fail_with_message(status: StatusCode, message: String) -> crate::Result<Self> {
        let error = ApiError::with_message(message.clone())?;
        Ok(Self::failure(status, vec![message], ErrorList::single(error)))
    }

    fn fail_with_error(status: StatusCode, error: ApiError) -> Self {
        let messages = vec![error.message().to_string()];
        Self::failure(status, messages, ErrorList::single(error))
    }

    fn fail_with_errors(
        status: StatusCode,
        errors: impl IntoIterator<Item = ApiError>,
    ) -> crate::Result<Self> {
        let errors = ErrorList::try_from(errors.into_iter().collect::<Vec<_>>())?;
        let messages = errors.iter().map(|e| e.message().to_string()).collect();
        Ok(Self::failure(status, messages, errors))
    }

    fn fail_with_entry(
        status: StatusCode,
        message: String,
        key: String,
        value: serde_json::Value,
    ) -> crate::Result<Self> {
        if key.trim().is_empty() {
            return Err(crate::Error::invalid_argument("metadata key cannot be empty"));
        }
        let mut metadata = Metadata::new();
        metadata.insert(key, value);
        let error = ApiError::with_metadata(message.clone(), metadata)?;
        Ok(Self::failure(status, vec![message], ErrorList::single(error)))
    }

    /// Whether the envelope reports success. True iff it carries no errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// Messages in the order they were produced. Never empty.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Joins all messages with line breaks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// there are no messages, which only happens for hand-decoded envelopes
    /// that bypassed validation.
    pub fn messages_to_string(&self) -> crate::Result<String> {
        if self.messages.is_empty() {
            return Err(crate::Error::invalid_argument(
                "message list cannot be empty when joining messages",
            ));
        }
        Ok(self.messages.join("\n"))
    }

    /// Errors, present only on failure.
    #[must_use]
    pub fn errors(&self) -> Option<&[ApiError]> {
        match &self.outcome {
            Outcome::Failure { errors } => Some(errors.as_slice()),
            Outcome::Success { .. } => None,
        }
    }

    /// Payload, present only on successes that return data.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success { value } => value.as_ref(),
            Outcome::Failure { .. } => None,
        }
    }

    /// Consumes the envelope and returns its payload.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self.outcome {
            Outcome::Success { value } => value,
            Outcome::Failure { .. } => None,
        }
    }

    /// The success-or-failure state.
    #[must_use]
    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Locale explicitly set on this envelope, if any.
    #[must_use]
    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Overrides the locale, e.g. to re-localize before re-emitting.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    /// Builder-style variant of [`Envelope::set_locale`].
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    /// Async counterpart of [`Envelope::ok`]; resolves immediately.
    pub fn ok_async(value: T) -> Ready<Self> {
        ready(Self::ok(value))
    }

    /// Async counterpart of [`Envelope::ok_with_message`]; resolves immediately.
    pub fn ok_with_message_async(
        message: impl Into<String>,
        value: T,
    ) -> Ready<crate::Result<Self>> {
        ready(Self::ok_with_message(message, value))
    }

    /// Async counterpart of [`Envelope::no_content`]; resolves immediately.
    pub fn no_content_async(message: impl Into<String>) -> Ready<crate::Result<Self>> {
        ready(Self::no_content(message))
    }

    /// Async counterpart of [`Envelope::bad_request`]; resolves immediately.
    pub fn bad_request_async(message: impl Into<String>) -> Ready<crate::Result<Self>> {
        ready(Self::bad_request(message))
    }

    /// Async counterpart of [`Envelope::bad_request_error`]; resolves immediately.
    pub fn bad_request_error_async(error: ApiError) -> Ready<Self> {
        ready(Self::bad_request_error(error))
    }

    /// Async counterpart of [`Envelope::bad_request_errors`]; resolves immediately.
    pub fn bad_request_errors_async(
        errors: impl IntoIterator<Item = ApiError>,
    ) -> Ready<crate::Result<Self>> {
        ready(Self::bad_request_errors(errors))
    }

    /// Async counterpart of [`Envelope::bad_request_with`]; resolves immediately.
    pub fn bad_request_with_async(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Ready<crate::Result<Self>> {
        ready(Self::bad_request_with(message, key, value))
    }

    /// Async counterpart of [`Envelope::not_found`]; resolves immediately.
    pub fn not_found_async(message: impl Into<String>) -> Ready<crate::Result<Self>> {
        ready(Self::not_found(message))
    }

    /// Async counterpart of [`Envelope::not_found_error`]; resolves immediately.
    pub fn not_found_error_async(error: ApiError) -> Ready<Self> {
        ready(Self::not_found_error(error))
    }

    /// Async counterpart of [`Envelope::not_found_errors`]; resolves immediately.
    pub fn not_found_errors_async(
        errors: impl IntoIterator<Item = ApiError>,
    ) -> Ready<crate::Result<Self>> {
        ready(Self::not_found_errors(errors))
    }

    /// Async counterpart of [`Envelope::not_found_with`]; resolves immediately.
    pub fn not_found_with_async(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Ready<crate::Result<Self>> {
        ready(Self::not_found_with(message, key, value))
    }
}

impl<T> Envelope<Vec<T>> {
    /// `200 OK` carrying every item the stream yields, in order.
    pub async fn ok_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T>,
    {
        let items = stream.collect::<Vec<_>>().await;
        Self::ok(items)
    }
}
