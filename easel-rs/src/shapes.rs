//! Shape options and point generators for the path builders.

use crate::context::DrawingContext;
use crate::geometry::{CornerRadii, Corners, Rect, Vector2};
use easel_canvas2d::ArcParams;
use std::f32::consts::{FRAC_PI_2, PI};

/// Options for [`Surface::rect`](crate::Surface::rect).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectOptions {
    pub offset: Vector2,
    /// Defaults to the surface width.
    pub width: Option<f32>,
    /// Defaults to the surface height.
    pub height: Option<f32>,
    pub fill: bool,
    pub stroke: bool,
}

/// Options for [`Surface::arc`](crate::Surface::arc).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcOptions {
    /// Defaults to the surface center.
    pub center: Option<Vector2>,
    /// Defaults to half the shorter surface side.
    pub radius: Option<f32>,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anticlockwise: bool,
    pub fill: bool,
    pub stroke: bool,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            center: None,
            radius: None,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            anticlockwise: false,
            fill: false,
            stroke: false,
        }
    }
}

/// Options for [`Surface::ellipse`](crate::Surface::ellipse).
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseOptions {
    /// Defaults to the surface center.
    pub center: Option<Vector2>,
    /// Defaults to half the surface size on each axis.
    pub radius: Option<Vector2>,
    pub rotation: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub anticlockwise: bool,
    pub fill: bool,
    pub stroke: bool,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            center: None,
            radius: None,
            rotation: 0.0,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            anticlockwise: false,
            fill: false,
            stroke: false,
        }
    }
}

/// Options for [`Surface::rounded_rectangle`](crate::Surface::rounded_rectangle).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundedRectOptions {
    pub offset: Vector2,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub radius: CornerRadii,
    pub fill: bool,
    pub stroke: bool,
}

/// Options for [`Surface::polyline`](crate::Surface::polyline).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineOptions {
    pub closed: bool,
    pub fill: bool,
    pub stroke: bool,
}

/// Options for [`Surface::polygon`](crate::Surface::polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOptions {
    pub sides: u32,
    pub side_length: Option<f32>,
    /// Circumradius. Takes precedence over `side_length`.
    pub radius: Option<f32>,
    /// Defaults to the surface center.
    pub center: Option<Vector2>,
    pub rotation: f32,
    pub closed: bool,
    pub fill: bool,
    pub stroke: bool,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            sides: 3,
            side_length: None,
            radius: None,
            center: None,
            rotation: 0.0,
            closed: true,
            fill: false,
            stroke: false,
        }
    }
}

/// Options for [`Surface::rectangle_as_polygon`](crate::Surface::rectangle_as_polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct RectanglePolygonOptions {
    pub width: f32,
    pub height: f32,
    pub center: Option<Vector2>,
    pub rotation: f32,
    pub closed: bool,
    pub fill: bool,
    pub stroke: bool,
}

impl Default for RectanglePolygonOptions {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            center: None,
            rotation: 0.0,
            closed: true,
            fill: false,
            stroke: false,
        }
    }
}

impl PolygonOptions {
    pub(crate) fn polyline(&self) -> PolylineOptions {
        PolylineOptions {
            closed: self.closed,
            fill: self.fill,
            stroke: self.stroke,
        }
    }
}

impl RectanglePolygonOptions {
    pub(crate) fn polyline(&self) -> PolylineOptions {
        PolylineOptions {
            closed: self.closed,
            fill: self.fill,
            stroke: self.stroke,
        }
    }
}

/// Circumradius from an explicit radius or a side length.
///
/// The side length conversion is `side_length * sin(PI / sides)`.
pub fn polygon_radius(radius: Option<f32>, side_length: Option<f32>, sides: u32) -> Option<f32> {
    radius.or_else(|| side_length.map(|s| s * (PI / sides as f32).sin()))
}

/// Points of a regular polygon.
///
/// Angles are measured from the +y axis: `(cx + r*sin(a), cy + r*cos(a))` for
/// `a = rotation + i * 2PI / sides`.
pub fn regular_polygon_points(sides: u32, radius: f32, center: Vector2, rotation: f32) -> Vec<Vector2> {
    let step = 2.0 * PI / sides as f32;
    (0..sides)
        .map(|i| {
            let (sin, cos) = (rotation + i as f32 * step).sin_cos();
            Vector2::new(center.x + radius * sin, center.y + radius * cos)
        })
        .collect()
}

/// The four corners of a `width` x `height` rectangle centred on `center` and
/// rotated by `rotation`, generated the same way as polygon points.
pub fn rectangle_polygon_points(width: f32, height: f32, center: Vector2, rotation: f32) -> [Vector2; 4] {
    let radius = (width / 2.0).hypot(height / 2.0);
    let angle = width.atan2(height);
    let reflect = PI - angle;
    std::array::from_fn(|i| {
        let corner = if i % 2 == 1 { reflect } else { angle };
        let a = rotation + (i / 2) as f32 * PI + corner;
        let (sin, cos) = a.sin_cos();
        Vector2::new(center.x + radius * sin, center.y + radius * cos)
    })
}

/// Append a closed rounded rectangle to the current path, clockwise from the
/// end of the top-left corner. Zero radii produce sharp corners.
pub fn trace_rounded_rect<C: DrawingContext + ?Sized>(ctx: &mut C, rect: &Rect, radii: &Corners) {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = *rect;
    let Corners {
        top_left: tl,
        top_right: tr,
        bottom_left: bl,
        bottom_right: br,
    } = *radii;

    ctx.move_to(x + tl, y);
    ctx.line_to(x + w - tr, y);
    corner(ctx, x + w - tr, y + tr, tr, -FRAC_PI_2, (x + w, y));
    ctx.line_to(x + w, y + h - br);
    corner(ctx, x + w - br, y + h - br, br, 0.0, (x + w, y + h));
    ctx.line_to(x + bl, y + h);
    corner(ctx, x + bl, y + h - bl, bl, FRAC_PI_2, (x, y + h));
    ctx.line_to(x, y + tl);
    corner(ctx, x + tl, y + tl, tl, PI, (x, y));
    ctx.close_path();
}

/// Quarter arc swept clockwise from `start`, or a line to `sharp` for a zero radius.
fn corner<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    cx: f32,
    cy: f32,
    radius: f32,
    start: f32,
    sharp: (f32, f32),
) {
    if radius > 0.0 {
        ctx.arc(&ArcParams {
            x: cx,
            y: cy,
            radius,
            start_angle: start,
            end_angle: start + FRAC_PI_2,
            anticlockwise: false,
        });
    } else {
        ctx.line_to(sharp.0, sharp.1);
    }
}
