// Rust guideline compliant 2026-02-09

//! SoftResult CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;

pub use commands::format_response;
pub use logging::{init_tracing, LogFormat};
