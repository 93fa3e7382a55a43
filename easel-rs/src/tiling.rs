//! Pattern tiling: repeated, staggered and rotated tile layouts.

use crate::geometry::{Anchors, PatternRepeat, Rect, StaggerAxis, Vector2};
use std::ops::Range;

/// Options for [`Surface::fill_image_pattern`](crate::Surface::fill_image_pattern).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatternOptions {
    /// Tile counts per axis. Derived from the image size when absent.
    pub repeat: Option<PatternRepeat>,
    pub stagger: Option<StaggerAxis>,
    /// Pattern rotation in radians around the surface center.
    pub rotation: f32,
    pub offset: Vector2,
    /// Gap between tiles, per axis.
    pub margin: Vector2,
    pub anchors: Anchors,
}

/// Layouts needing more tiles than this are rejected as an invalid repeat.
pub const MAX_TILES: usize = 1 << 24;

/// Slack, in tiles, absorbing rounding when a repeat count divides exactly.
const EDGE_EPSILON: f32 = 1e-5;

/// A tile grid in the pattern's own (possibly rotated) frame.
///
/// When `rotation` is non-zero the tiles must be drawn under
/// `translate(W/2, H/2) * rotate(rotation) * translate(-rotated_width/2, -rotated_height/2)`.
/// The surface then maps into `0..rotated_width` x `0..rotated_height`, which
/// the grid covers completely when the margin is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayout {
    pub rotation: f32,
    pub rotated_width: f32,
    pub rotated_height: f32,
    origin: Vector2,
    size: Vector2,
    margin: Vector2,
    stagger: Option<StaggerAxis>,
    columns: Range<i64>,
    rows: Range<i64>,
}

impl TileLayout {
    /// Number of tiles [`tiles`](Self::tiles) yields.
    pub fn tile_count(&self) -> usize {
        (self.columns.end - self.columns.start) as usize * (self.rows.end - self.rows.start) as usize
    }

    /// Tile rectangles, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Rect> + '_ {
        self.columns
            .clone()
            .flat_map(move |i| self.rows.clone().map(move |j| self.tile(i, j)))
    }

    fn tile(&self, i: i64, j: i64) -> Rect {
        let mut x = self.origin.x + self.margin.x + i as f32 * self.size.x;
        let mut y = self.origin.y + self.margin.y + j as f32 * self.size.y;
        match self.stagger {
            Some(StaggerAxis::X) if j.rem_euclid(2) == 1 => x -= self.size.x / 2.0,
            Some(StaggerAxis::Y) if i.rem_euclid(2) == 1 => y -= self.size.y / 2.0,
            _ => {}
        }
        Rect::new(x, y, self.size.x - self.margin.x, self.size.y - self.margin.y)
    }
}

/// Cell indices along one axis whose tiles reach into `0..extent`.
///
/// Cell `i` spans `origin + i * size` to `origin + (i + 1) * size`, with the
/// tile in its trailing `size - margin`. Staggered lines sit `shift` further back.
fn cell_span(origin: f32, size: f32, margin: f32, shift: f32, extent: f32) -> Option<Range<i64>> {
    let first = (-origin / size).floor();
    let end = ((extent - origin + shift - margin) / size - EDGE_EPSILON)
        .ceil()
        .max(first + 1.0);
    if !(first.is_finite() && end.is_finite()) || end - first > MAX_TILES as f32 {
        return None;
    }
    Some(first as i64..end as i64)
}

/// Lay out tiles of a `image_width` x `image_height` image over a `width` x
/// `height` surface.
///
/// Returns `None` when the repeat counts (given or derived) are not positive
/// and finite, or when the grid would exceed [`MAX_TILES`].
pub fn layout_tiles(
    width: f32,
    height: f32,
    image_width: f32,
    image_height: f32,
    options: &PatternOptions,
) -> Option<TileLayout> {
    let rotation = options.rotation;
    let margin = options.margin;
    let (sin, cos) = rotation.sin_cos();
    let rotated_width = cos.abs() * width + sin.abs() * height;
    let rotated_height = cos.abs() * height + sin.abs() * width;

    let repeat = options.repeat.unwrap_or(PatternRepeat {
        x: rotated_width / (image_width + margin.x),
        y: rotated_height / (image_height + margin.y),
    });
    if !(repeat.x.is_finite() && repeat.y.is_finite() && repeat.x > 0.0 && repeat.y > 0.0) {
        return None;
    }

    let size = Vector2::new(width / repeat.x, height / repeat.y);
    let origin = Vector2::new(
        options.offset.x
            - options
                .anchors
                .x
                .lead(repeat.x.ceil() * size.x + margin.x - rotated_width),
        options.offset.y
            - options
                .anchors
                .y
                .lead(repeat.y.ceil() * size.y + margin.y - rotated_height),
    );

    let (shift_x, shift_y) = match options.stagger {
        Some(StaggerAxis::X) => (size.x / 2.0, 0.0),
        Some(StaggerAxis::Y) => (0.0, size.y / 2.0),
        None => (0.0, 0.0),
    };
    let columns = cell_span(origin.x, size.x, margin.x, shift_x, rotated_width)?;
    let rows = cell_span(origin.y, size.y, margin.y, shift_y, rotated_height)?;
    let count = (columns.end - columns.start) as f64 * (rows.end - rows.start) as f64;
    if count > MAX_TILES as f64 {
        return None;
    }

    Some(TileLayout {
        rotation,
        rotated_width,
        rotated_height,
        origin,
        size,
        margin,
        stagger: options.stagger,
        columns,
        rows,
    })
}
