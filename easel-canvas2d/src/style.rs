//! Paint styles for fill and stroke operations.

use crate::error::{Canvas2dError, Canvas2dResult};
use crate::gradient::{CanvasGradient, GradientType};

/// Fill or stroke paint.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    /// Solid color fill.
    Color(tiny_skia::Color),
    /// Linear gradient fill.
    LinearGradient(CanvasGradient),
    /// Radial gradient fill.
    RadialGradient(CanvasGradient),
}

impl FillStyle {
    /// Parse a CSS color string (`#rgb`, `#rrggbb`, `rgb(...)`, named colors, ...).
    pub fn from_css(style: &str) -> Canvas2dResult<Self> {
        parse_color(style).map(FillStyle::Color)
    }

    /// Solid color from 8-bit RGBA components.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        FillStyle::Color(tiny_skia::Color::from_rgba8(r, g, b, a))
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        // Default is opaque black
        FillStyle::Color(tiny_skia::Color::BLACK)
    }
}

impl From<tiny_skia::Color> for FillStyle {
    fn from(color: tiny_skia::Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<CanvasGradient> for FillStyle {
    fn from(gradient: CanvasGradient) -> Self {
        match gradient.gradient_type {
            GradientType::Linear { .. } => FillStyle::LinearGradient(gradient),
            GradientType::Radial(_) => FillStyle::RadialGradient(gradient),
        }
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
pub(crate) fn parse_color(s: &str) -> Canvas2dResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| Canvas2dError::ColorParseError(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    tiny_skia::Color::from_rgba(r, g, b, a)
        .ok_or_else(|| Canvas2dError::ColorParseError(s.to_string()))
}
