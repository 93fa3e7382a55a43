//! Argument bundles for context calls that would otherwise take six or more
//! positional floats.

/// `x`, `y`, `width`, `height` in user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectParams {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Circular arc around (`x`, `y`). Angles are radians, clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anticlockwise: bool,
}

/// Elliptical arc; `rotation` turns the radii axes before the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    pub x: f32,
    pub y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotation: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anticlockwise: bool,
}

impl From<&ArcParams> for EllipseParams {
    fn from(arc: &ArcParams) -> Self {
        Self {
            x: arc.x,
            y: arc.y,
            radius_x: arc.radius,
            radius_y: arc.radius,
            rotation: 0.0,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            anticlockwise: arc.anticlockwise,
        }
    }
}

/// Two-circle radial gradient: (`x0`, `y0`, `r0`) to (`x1`, `y1`, `r1`).
///
/// tiny-skia only supports a point start, so `r0` is kept for callers but
/// not rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradientParams {
    pub x0: f32,
    pub y0: f32,
    pub r0: f32,
    pub x1: f32,
    pub y1: f32,
    pub r1: f32,
}

/// Borrowed straight-alpha RGBA8 pixels, row-major.
#[derive(Debug, Clone, Copy)]
pub struct CanvasImageDataRef<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}
