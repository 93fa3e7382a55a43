//! Error and diagnostic types for easel-rs.

use easel_canvas2d::Canvas2dError;
use thiserror::Error;

/// Result type alias using EaselError.
pub type EaselResult<T> = Result<T, EaselError>;

/// Fatal errors. Returned as `Err` and abort the operation.
#[derive(Debug, Error)]
pub enum EaselError {
    /// The drawing context could not be created.
    #[error("Unable to create drawing context: {0}")]
    Context(#[from] Canvas2dError),

    /// Pixel buffer does not match the declared dimensions.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Malformed `data:` URI.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Encoded image could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Surface could not be encoded.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for EaselError {
    fn from(err: image::ImageError) -> Self {
        EaselError::Decode(err.to_string())
    }
}

/// Non-fatal conditions. The offending operation is skipped, the condition is
/// logged and recorded on the surface, and the call chain continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("Composite operation: '{0}' does not exist.")]
    UnknownCompositeOperation(String),

    #[error("Polygon requires either a radius or a side length")]
    MissingPolygonSize,

    #[error("Polygon requires at least 3 sides, got {0}")]
    TooFewPolygonSides(u32),

    #[error("Polyline requires at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Image has degenerate size {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },

    #[error("Target region has no drawable area")]
    EmptyTarget,

    #[error("Pattern repeat counts must be positive and finite, with at most 16777216 tiles")]
    InvalidRepeat,

    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Alpha must be in [0, 1], got {0}")]
    InvalidAlpha(f32),
}
