// Rust guideline compliant 2026-02-09

//! Implementation of the `srt check` command.
//!
//! Reads an envelope body, validates it against the envelope rules and prints
//! its canonical re-encoding.

use anyhow::{Context, Result};
use serde_json::Value;
use soft_result_core::{Envelope, RenderOptions, StatusCode, WireEnvelope};
use std::io::Read;

/// Status assumed for a body when none is given on the command line.
///
/// Successes with a value are 200, successes without one are 204 and
/// failures are 400.
pub fn infer_status(wire: &WireEnvelope<Value>) -> StatusCode {
    if wire.errors.is_some() || !wire.is_success {
        StatusCode::BAD_REQUEST
    } else if wire.value.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Parses and validates an envelope body.
///
/// # Errors
///
/// Returns an error if the body is not JSON, does not have the envelope
/// shape, or violates the envelope rules for the given status.
pub fn check_body(body: &[u8], status: Option<u16>) -> Result<Envelope<Value>> {
    let wire: WireEnvelope<Value> =
        serde_json::from_slice(body).context("body is not a valid envelope document")?;

    let status = match status {
        Some(code) => StatusCode::from_u16(code)
            .with_context(|| format!("{} is not a valid HTTP status", code))?,
        None => infer_status(&wire),
    };

    Ok(Envelope::from_wire(wire, status)?)
}

/// Checks the envelope in `source` (`-` for stdin) and prints its canonical form.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the envelope is invalid.
pub fn execute(source: &str, status: Option<u16>, options: &RenderOptions) -> Result<()> {
    let body = read_source(source)?;
    let envelope = check_body(&body, status)?;

    let response = envelope.render(options);
    tracing::info!(
        source,
        status = response.status.as_u16(),
        success = envelope.is_success(),
        "envelope is valid"
    );
    println!("{}", String::from_utf8_lossy(&response.body));
    Ok(())
}

fn read_source(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read envelope from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(source).with_context(|| format!("failed to read {}", source))
    }
}
