//! Fatal backend errors. Recoverable misuse is ignored and logged instead.

use thiserror::Error;

pub type Canvas2dResult<T> = Result<T, Canvas2dError>;

#[derive(Debug, Error)]
pub enum Canvas2dError {
    /// Zero, or larger than tiny-skia can allocate.
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("PNG encoding error: {0}")]
    PngError(String),

    #[error("JPEG encoding error: {0}")]
    JpegError(String),
}

impl From<png::EncodingError> for Canvas2dError {
    fn from(err: png::EncodingError) -> Self {
        Canvas2dError::PngError(err.to_string())
    }
}

impl From<image::ImageError> for Canvas2dError {
    fn from(err: image::ImageError) -> Self {
        Canvas2dError::JpegError(err.to_string())
    }
}
