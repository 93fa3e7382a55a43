//! Encoded output formats.

/// Quality used when the requested JPEG quality is out of range, as a canvas does.
const DEFAULT_JPEG_QUALITY: f32 = 0.92;

/// Encoded image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Resolve a mime type. Unsupported types fall back to PNG.
    pub fn from_mime(mime: &str) -> Self {
        if mime.eq_ignore_ascii_case("image/jpeg") {
            ImageFormat::Jpeg
        } else {
            if !mime.eq_ignore_ascii_case("image/png") {
                log::debug!(target: "easel", "unsupported mime type {mime:?}, using image/png");
            }
            ImageFormat::Png
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Map a `[0, 1]` quality to the encoder's `1..=100` scale.
pub(crate) fn jpeg_quality(quality: f32) -> u8 {
    let quality = if (0.0..=1.0).contains(&quality) {
        quality
    } else {
        DEFAULT_JPEG_QUALITY
    };
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}
