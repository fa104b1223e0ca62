// Rust guideline compliant 2026-02-09

//! Command implementations for `srt`.

pub mod check;
pub mod render;

use soft_result_core::RenderedResponse;

/// Formats a rendered response as a status line, a content-type header, a
/// blank line and the body.
pub fn format_response(response: &RenderedResponse) -> String {
    format!(
        "HTTP/1.1 {} {}\ncontent-type: {}\n\n{}",
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or(""),
        response.content_type,
        String::from_utf8_lossy(&response.body)
    )
}
