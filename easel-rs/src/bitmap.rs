//! Decoded raster images used as draw sources.

use crate::error::{EaselError, EaselResult};
use base64::Engine;
use easel_canvas2d::CanvasImageDataRef;
use std::fmt;
use std::path::Path;

/// A non-premultiplied RGBA8 image.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Wrap raw RGBA pixels. `data` must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> EaselResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(EaselError::InvalidImage(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap pixels already known to match the dimensions.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// An image filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            data: rgba.repeat((width as usize) * (height as usize)),
        }
    }

    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> EaselResult<Self> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            data: decoded.into_raw(),
        })
    }

    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> EaselResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Decode a base64 `data:` URI.
    pub fn from_data_uri(uri: &str) -> EaselResult<Self> {
        let (_, payload) = parse_data_uri(uri)?;
        Self::decode(&payload)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Height over width.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub(crate) fn as_canvas_data(&self) -> CanvasImageDataRef<'_> {
        CanvasImageDataRef {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Split a `data:<mime>;base64,<payload>` URI into its mime type and decoded payload.
pub(crate) fn parse_data_uri(uri: &str) -> EaselResult<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| EaselError::InvalidDataUri("missing 'data:' scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| EaselError::InvalidDataUri("missing ',' separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| EaselError::InvalidDataUri("only base64 payloads are supported".to_string()))?;

    let bytes = base64::prelude::BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|err| EaselError::InvalidDataUri(err.to_string()))?;
    Ok((mime.to_string(), bytes))
}

pub(crate) fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mut uri = format!("data:{};base64,", mime);
    base64::prelude::BASE64_STANDARD.encode_string(bytes, &mut uri);
    uri
}
