//! Value types shared by the solvers and the surface operations.

use easel_canvas2d::RectParams;

/// A 2D point, offset or radius pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` lies inside this rectangle, within `tolerance`.
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

impl From<&Rect> for RectParams {
    fn from(rect: &Rect) -> Self {
        RectParams::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Per-edge margin values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Margin around a target box, either uniform or per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Margin {
    Uniform(f32),
    Edges(Edges),
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Uniform(0.0)
    }
}

impl Margin {
    /// Normalize to per-edge form.
    pub fn resolve(&self) -> Edges {
        match *self {
            Margin::Uniform(m) => Edges {
                top: m,
                left: m,
                right: m,
                bottom: m,
            },
            Margin::Edges(edges) => edges,
        }
    }
}

impl From<f32> for Margin {
    fn from(m: f32) -> Self {
        Margin::Uniform(m)
    }
}

impl From<Edges> for Margin {
    fn from(edges: Edges) -> Self {
        Margin::Edges(edges)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

/// Corner radii for rounded rectangles.
///
/// Radii larger than half the shorter side are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerRadii {
    Uniform(f32),
    Corners(Corners),
}

impl Default for CornerRadii {
    fn default() -> Self {
        CornerRadii::Uniform(0.0)
    }
}

impl CornerRadii {
    pub fn resolve(&self) -> Corners {
        match *self {
            CornerRadii::Uniform(r) => Corners {
                top_left: r,
                top_right: r,
                bottom_left: r,
                bottom_right: r,
            },
            CornerRadii::Corners(corners) => corners,
        }
    }
}

impl From<f32> for CornerRadii {
    fn from(r: f32) -> Self {
        CornerRadii::Uniform(r)
    }
}

impl From<Corners> for CornerRadii {
    fn from(corners: Corners) -> Self {
        CornerRadii::Corners(corners)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Alignment of content inside leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors {
    pub x: HorizontalAnchor,
    pub y: VerticalAnchor,
}

impl Anchors {
    pub const fn new(x: HorizontalAnchor, y: VerticalAnchor) -> Self {
        Self { x, y }
    }
}

impl HorizontalAnchor {
    /// Share of `remaining` that goes before the content.
    pub(crate) fn lead(self, remaining: f32) -> f32 {
        match self {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Center => remaining / 2.0,
            HorizontalAnchor::Right => remaining,
        }
    }
}

impl VerticalAnchor {
    pub(crate) fn lead(self, remaining: f32) -> f32 {
        match self {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Center => remaining / 2.0,
            VerticalAnchor::Bottom => remaining,
        }
    }
}

/// Tile repetition counts along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRepeat {
    pub x: f32,
    pub y: f32,
}

impl PatternRepeat {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis along which alternate tiles are shifted by half a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerAxis {
    /// Odd rows shift left by half a tile width.
    X,
    /// Odd columns shift up by half a tile height.
    Y,
}

/// How `fill_image` treats the image's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectMode {
    /// Stretch over the whole surface.
    #[default]
    Stretch,
    /// Letterbox inside the surface.
    Fit,
    /// Cover the surface, cropping the overflow.
    Fill,
}
