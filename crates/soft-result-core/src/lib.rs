// Rust guideline compliant 2026-02-06

//! SoftResult Core Library
//!
//! Standard response envelopes for web API handlers:
//! - Client-facing error values with structured metadata
//! - The envelope type and its canonical constructors (200, 204, 400, 404)
//! - Rendering to a JSON HTTP response behind a framework-neutral writer trait
//! - Decoding envelopes back from the wire
//! - Deployment configuration (default locale, locale encoding)
//! - Error types and result handling

pub mod api_error;
pub mod config;
pub mod envelope;
pub mod error;
pub mod helpers;
pub mod locale;
pub mod render;
pub mod wire;

pub use api_error::{metadata_to_string, ApiError, Metadata};
pub use config::Config;
pub use envelope::{Envelope, ErrorList, Outcome};
pub use error::{Error, Result};
pub use locale::{Locale, LocaleEncoding};
pub use render::{BufferedWriter, RenderOptions, RenderedResponse, ResponseWriter, APPLICATION_JSON};
pub use wire::WireEnvelope;

pub use http::StatusCode;
