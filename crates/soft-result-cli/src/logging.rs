// Rust guideline compliant 2026-02-09

//! Tracing setup for the `srt` binary.
//!
//! Logs always go to stderr so stdout carries only rendered envelopes.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines.
    Plain,
}

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if `level` is not one of error, warn, info, debug, trace.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<(), LoggingError> {
    let level = parse_log_level(level)?;
    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded in tests.
    let _ = match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Plain => tracing::subscriber::set_global_default(builder.finish()),
    };
    Ok(())
}

/// Parses a log level name, ignoring case.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(LoggingError::InvalidLogLevel(other.to_string())),
    }
}
