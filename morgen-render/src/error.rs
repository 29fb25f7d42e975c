//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering the dashboard image.
///
/// Any of these makes the run fall back to the plain-text composition.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable font found on the system.
    #[error("No usable font found: {0}")]
    Font(String),

    /// The generated SVG failed to parse.
    #[error("SVG parsing failed: {0}")]
    Svg(String),

    /// Pixel buffer allocation failed.
    #[error("Failed to create pixmap: {0}")]
    Pixmap(String),

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
