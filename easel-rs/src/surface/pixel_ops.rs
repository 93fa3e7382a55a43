//! Pixel effects and encoded export.

use super::Surface;
use crate::bitmap::to_data_uri;
use crate::context::DrawingContext;
use crate::error::{Diagnostic, EaselResult};
use crate::export::ImageFormat;
use std::path::Path;

/// Mime type used when the caller does not pick one.
pub const DEFAULT_EXPORT_MIME: &str = "image/jpeg";

/// File name used by [`Surface::trigger_download`] when none is given.
pub const DEFAULT_DOWNLOAD_NAME: &str = "export.jpg";

const MIN_CHROMA_THRESHOLD: f32 = 0.01;

/// Target color for [`Surface::chroma_key_remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromaKeyColor {
    /// Any CSS color string, e.g. `"#00ff00"`.
    Css(String),
    Rgb([u8; 3]),
}

impl ChromaKeyColor {
    fn to_rgb(&self) -> Option<[u8; 3]> {
        match self {
            ChromaKeyColor::Css(css) => csscolorparser::parse(css).ok().map(|color| {
                let [r, g, b, _] = color.to_rgba8();
                [r, g, b]
            }),
            ChromaKeyColor::Rgb(rgb) => Some(*rgb),
        }
    }
}

impl From<&str> for ChromaKeyColor {
    fn from(css: &str) -> Self {
        ChromaKeyColor::Css(css.to_string())
    }
}

impl From<String> for ChromaKeyColor {
    fn from(css: String) -> Self {
        ChromaKeyColor::Css(css)
    }
}

impl From<[u8; 3]> for ChromaKeyColor {
    fn from(rgb: [u8; 3]) -> Self {
        ChromaKeyColor::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for ChromaKeyColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ChromaKeyColor::Rgb([r, g, b])
    }
}

/// Squared RGB distance limit for a threshold in `[0.01, 1]`.
fn chroma_limit(threshold: f32) -> f32 {
    let threshold = if threshold.is_nan() {
        MIN_CHROMA_THRESHOLD
    } else {
        threshold.clamp(MIN_CHROMA_THRESHOLD, 1.0)
    };
    3.0 * 255.0 * 255.0 * threshold * threshold
}

impl<C: DrawingContext> Surface<C> {
    /// Make every pixel within `threshold` of `color` fully transparent.
    ///
    /// Pixels are removed when their squared RGB distance to `color` is at most
    /// `3 * 255^2 * threshold^2`, with `threshold` clamped to `[0.01, 1]`.
    pub fn chroma_key_remove(
        &mut self,
        color: impl Into<ChromaKeyColor>,
        threshold: f32,
    ) -> &mut Self {
        let color = color.into();
        let Some([r, g, b]) = color.to_rgb() else {
            let name = match color {
                ChromaKeyColor::Css(css) => css,
                ChromaKeyColor::Rgb(rgb) => format!("{:?}", rgb),
            };
            self.report(Diagnostic::InvalidColor(name));
            return self;
        };

        let limit = chroma_limit(threshold);
        let (width, height) = (self.width(), self.height());
        let mut data = self.ctx.get_image_data(0, 0, width, height);
        let mut removed = 0usize;
        for px in data.chunks_exact_mut(4) {
            let dr = px[0] as f32 - r as f32;
            let dg = px[1] as f32 - g as f32;
            let db = px[2] as f32 - b as f32;
            if dr * dr + dg * dg + db * db <= limit {
                px[3] = 0;
                removed += 1;
            }
        }
        log::debug!(target: "easel", "chroma_key_remove: {} pixels cleared", removed);
        self.ctx.put_image_data(&data, width, height, 0, 0);
        self
    }

    /// Encode the surface. Unsupported mime types produce PNG.
    pub fn encode(&self, mime: &str, quality: f32) -> EaselResult<Vec<u8>> {
        self.ctx.encode(ImageFormat::from_mime(mime), quality)
    }

    /// Encode the surface as a `data:<mime>;base64,...` URI.
    ///
    /// The URI names the format actually produced, which is PNG for
    /// unsupported mime types.
    pub fn export_as_data_uri(&self, mime: &str, quality: f32) -> EaselResult<String> {
        let format = ImageFormat::from_mime(mime);
        let bytes = self.ctx.encode(format, quality)?;
        Ok(to_data_uri(format.mime_type(), &bytes))
    }

    /// Write the encoded surface to `path` at full quality.
    pub fn trigger_download(&mut self, mime: &str, path: impl AsRef<Path>) -> EaselResult<&mut Self> {
        let path = path.as_ref();
        let bytes = self.encode(mime, 1.0)?;
        std::fs::write(path, bytes)?;
        log::debug!(target: "easel", "wrote {}", path.display());
        Ok(self)
    }
}
