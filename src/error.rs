//! Error taxonomy for the frame-facing API.
//!
//! Only input-shape problems are surfaced as errors; degenerate numeric cases
//! inside the pipeline (uniform saliency map, fully eroded mask, zero-sized
//! frame) short-circuit to empty results instead.

pub type Result<T> = std::result::Result<T, DetectError>;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// Buffer lengths do not match the declared width × height grid.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Tool configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}
