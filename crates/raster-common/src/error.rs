//! Error types for the raster-viz crates.

use thiserror::Error;

/// Result type alias for construction-time validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Renderer and legend configuration errors.
///
/// All variants are raised while a renderer or legend is being constructed,
/// never while one is applied. They indicate a fixable input, not a
/// transient condition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed color entry: {0}")]
    MalformedColorEntry(String),

    #[error("Malformed stretch range: {0}")]
    MalformedStretchRange(String),

    #[error("Duplicate stop value: {0}")]
    DuplicateStopValue(f64),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Degenerate value range: [{lo}, {hi}]")]
    DegenerateRange { lo: f64, hi: f64 },

    #[error("{kind} requires at least {required} color stops, got {actual}")]
    InsufficientStops {
        kind: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("Legend tick {value} is outside the renderer domain [{min}, {max}]")]
    TickOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Expected {stops} labels to match the color stops, got {labels}")]
    LabelCountMismatch { stops: usize, labels: usize },

    #[error("Invalid colorspace: {0}")]
    InvalidColorspace(String),

    #[error("Unknown renderer kind: {0}")]
    UnknownRendererKind(String),
}

/// Errors raised while reading or writing a persisted renderer document.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed renderer document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid renderer document (field '{field}'): {source}")]
    InvalidDocument {
        field: &'static str,
        source: ConfigError,
    },
}

impl CodecError {
    /// Attach the offending document field to a validation error.
    pub fn invalid(field: &'static str, source: ConfigError) -> Self {
        CodecError::InvalidDocument { field, source }
    }
}
