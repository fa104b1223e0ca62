// Rust guideline compliant 2026-02-09

//! Implementation of the `srt render` command.
//!
//! Builds an envelope through the public constructors and prints the
//! response a handler returning it would produce.

use anyhow::{Context, Result};
use serde_json::Value;
use soft_result_core::{Envelope, Locale, RenderOptions};

/// Outcome category to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    /// 200 OK with a value.
    Ok,
    /// 204 No Content.
    NoContent,
    /// 400 Bad Request.
    BadRequest,
    /// 404 Not Found.
    NotFound,
}

/// Inputs for [`build_envelope`].
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Message text.
    pub message: Option<String>,
    /// Payload as JSON text, for `ok`.
    pub value: Option<String>,
    /// Metadata key for failures.
    pub error_key: Option<String>,
    /// Metadata value for failures; JSON text, or a bare string.
    pub error_value: Option<String>,
    /// Locale override.
    pub locale: Option<Locale>,
}

/// Message used by `no-content` when none is given.
const NO_CONTENT_MESSAGE: &str = "No Content";

/// Builds the envelope described by `kind` and `args`.
///
/// # Errors
///
/// Returns an error if:
/// - `ok` is missing `--value`, or the value is not valid JSON
/// - A failure kind is missing `--message`
/// - `--error-key` and `--error-value` are not given together
/// - The constructor rejects the input (blank message or key)
pub fn build_envelope(kind: Kind, args: RenderArgs) -> Result<Envelope<Value>> {
    let envelope = match kind {
        Kind::Ok => {
            let raw = args
                .value
                .context("'ok' requires --value with a JSON payload")?;
            let value: Value =
                serde_json::from_str(&raw).context("--value must be valid JSON")?;
            match args.message {
                Some(message) => Envelope::ok_with_message(message, value)?,
                None => Envelope::ok(value),
            }
        }
        Kind::NoContent => {
            Envelope::no_content(args.message.as_deref().unwrap_or(NO_CONTENT_MESSAGE))?
        }
        Kind::BadRequest | Kind::NotFound => {
            let message = args
                .message
                .context("failure kinds require --message")?;
            match (args.error_key, args.error_value) {
                (Some(key), Some(raw)) => {
                    let value = parse_loose_json(&raw);
                    if kind == Kind::BadRequest {
                        Envelope::bad_request_with(message, key, value)?
                    } else {
                        Envelope::not_found_with(message, key, value)?
                    }
                }
                (None, None) => {
                    if kind == Kind::BadRequest {
                        Envelope::bad_request(message)?
                    } else {
                        Envelope::not_found(message)?
                    }
                }
                _ => anyhow::bail!("--error-key and --error-value must be given together"),
            }
        }
    };

    Ok(match args.locale {
        Some(locale) => envelope.with_locale(locale),
        None => envelope,
    })
}

// Accepts `42` or `{"a":1}` as JSON and anything else as a plain string.
fn parse_loose_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Builds, renders and prints an envelope.
///
/// # Errors
///
/// Returns an error if the envelope cannot be built.
pub fn execute(kind: Kind, args: RenderArgs, options: &RenderOptions) -> Result<()> {
    let envelope = build_envelope(kind, args)?;
    let response = envelope.render(options);
    tracing::info!(status = response.status.as_u16(), "rendered envelope");
    println!("{}", super::format_response(&response));
    Ok(())
}
