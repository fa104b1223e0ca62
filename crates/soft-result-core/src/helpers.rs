// Rust guideline compliant 2026-02-06

//! Free-function shortcuts for the [`Envelope`] constructors.
//!
//! These let handlers write `helpers::ok(user)` or
//! `helpers::not_found::<User>("no such user")` where the payload type is
//! otherwise inferred from the handler's return type.

use crate::api_error::ApiError;
use crate::envelope::Envelope;
use crate::Result;
use futures::Stream;
use std::future::Ready;

/// See [`Envelope::ok`].
pub fn ok<T>(value: T) -> Envelope<T> {
    Envelope::ok(value)
}

/// See [`Envelope::ok_with_message`].
pub fn ok_with_message<T>(message: impl Into<String>, value: T) -> Result<Envelope<T>> {
    Envelope::ok_with_message(message, value)
}

/// See [`Envelope::no_content`].
pub fn no_content<T>(message: impl Into<String>) -> Result<Envelope<T>> {
    Envelope::no_content(message)
}

/// See [`Envelope::bad_request`].
pub fn bad_request<T>(message: impl Into<String>) -> Result<Envelope<T>> {
    Envelope::bad_request(message)
}

/// See [`Envelope::bad_request_error`].
pub fn bad_request_error<T>(error: ApiError) -> Envelope<T> {
    Envelope::bad_request_error(error)
}

/// See [`Envelope::bad_request_errors`].
pub fn bad_request_errors<T>(errors: impl IntoIterator<Item = ApiError>) -> Result<Envelope<T>> {
    Envelope::bad_request_errors(errors)
}

/// See [`Envelope::bad_request_with`].
pub fn bad_request_with<T>(
    message: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) -> Result<Envelope<T>> {
    Envelope::bad_request_with(message, key, value)
}

/// See [`Envelope::not_found`].
pub fn not_found<T>(message: impl Into<String>) -> Result<Envelope<T>> {
    Envelope::not_found(message)
}

/// See [`Envelope::not_found_error`].
pub fn not_found_error<T>(error: ApiError) -> Envelope<T> {
    Envelope::not_found_error(error)
}

/// See [`Envelope::not_found_errors`].
pub fn not_found_errors<T>(errors: impl IntoIterator<Item = ApiError>) -> Result<Envelope<T>> {
    Envelope::not_found_errors(errors)
}

/// See [`Envelope::not_found_with`].
pub fn not_found_with<T>(
    message: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) -> Result<Envelope<T>> {
    Envelope::not_found_with(message, key, value)
}

/// See [`Envelope::ok_async`].
pub fn ok_async<T>(value: T) -> Ready<Envelope<T>> {
    Envelope::ok_async(value)
}

/// See [`Envelope::ok_with_message_async`].
pub fn ok_with_message_async<T>(
    message: impl Into<String>,
    value: T,
) -> Ready<Result<Envelope<T>>> {
    Envelope::ok_with_message_async(message, value)
}

/// See [`Envelope::no_content_async`].
pub fn no_content_async<T>(message: impl Into<String>) -> Ready<Result<Envelope<T>>> {
    Envelope::no_content_async(message)
}

/// See [`Envelope::bad_request_async`].
pub fn bad_request_async<T>(message: impl Into<String>) -> Ready<Result<Envelope<T>>> {
    Envelope::bad_request_async(message)
}

/// See [`Envelope::bad_request_error_async`].
pub fn bad_request_error_async<T>(error: ApiError) -> Ready<Envelope<T>> {
    Envelope::bad_request_error_async(error)
}

/// See [`Envelope::bad_request_errors_async`].
pub fn bad_request_errors_async<T>(
    errors: impl IntoIterator<Item = ApiError>,
) -> Ready<Result<Envelope<T>>> {
    Envelope::bad_request_errors_async(errors)
}

/// See [`Envelope::bad_request_with_async`].
pub fn bad_request_with_async<T>(
    message: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) -> Ready<Result<Envelope<T>>> {
    Envelope::bad_request_with_async(message, key, value)
}

/// See [`Envelope::not_found_async`].
pub fn not_found_async<T>(message: impl Into<String>) -> Ready<Result<Envelope<T>>> {
    Envelope::not_found_async(message)
}

/// See [`Envelope::not_found_error_async`].
pub fn not_found_error_async<T>(error: ApiError) -> Ready<Envelope<T>> {
    Envelope::not_found_error_async(error)
}

/// See [`Envelope::not_found_errors_async`].
pub fn not_found_errors_async<T>(
    errors: impl IntoIterator<Item = ApiError>,
) -> Ready<Result<Envelope<T>>> {
    Envelope::not_found_errors_async(errors)
}

/// See [`Envelope::not_found_with_async`].
pub fn not_found_with_async<T>(
    message: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) -> Ready<Result<Envelope<T>>> {
    Envelope::not_found_with_async(message, key, value)
}

/// See [`Envelope::ok_stream`].
pub async fn ok_stream<T, S>(stream: S) -> Envelope<Vec<T>>
where
    S: Stream<Item = T>,
{
    Envelope::ok_stream(stream).await
}
