//! Fluent drawing facade over a Canvas 2D style context.
//!
//! `easel-rs` wraps a [`DrawingContext`] in a [`Surface`] with chainable
//! operations for the tedious parts of 2D drawing: fit/fill image placement,
//! rotated and staggered pattern tiling, rounded rectangles, regular polygons,
//! polylines, chroma-key removal, and data URI import/export. Rasterization
//! is left to the context; the bundled backend is
//! [`easel_canvas2d::Canvas2dContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_rs::{FillStyle, FitOptions, Image, Region, StyleSettings, Surface};
//!
//! let logo = Image::open("logo.png")?;
//! let mut surface = Surface::builder().width(640).height(480).build()?;
//! surface
//!     .fill_region(&Region::default(), &StyleSettings::new().with_fill(FillStyle::from_css("#202020")?))
//!     .fill_image_fit_or_fill(&logo, &FitOptions { fill: false, ..Default::default() }, &StyleSettings::default());
//! surface.trigger_download("image/png", "out.png")?;
//! ```

mod bitmap;
mod canvas2d;
mod composite;
mod context;
mod error;
mod export;
mod geometry;
mod placement;
mod recording;
mod settings;
mod shapes;
mod surface;
mod tiling;

// Re-export public API
pub use bitmap::Image;
pub use composite::CompositeOperation;
pub use context::DrawingContext;
pub use error::{Diagnostic, EaselError, EaselResult};
pub use export::ImageFormat;
pub use geometry::{
    Anchors, AspectMode, CornerRadii, Corners, Edges, HorizontalAnchor, Margin, PatternRepeat,
    Rect, StaggerAxis, Vector2, VerticalAnchor,
};
pub use placement::{solve_placement, FitOptions};
pub use recording::{Command, RecordingContext};
pub use settings::{StrokeSettings, StyleSettings};
pub use shapes::{
    polygon_radius, rectangle_polygon_points, regular_polygon_points, trace_rounded_rect,
    ArcOptions, EllipseOptions, PolygonOptions, PolylineOptions, RectOptions,
    RectanglePolygonOptions, RoundedRectOptions,
};
pub use surface::{
    ChromaKeyColor, DrawImageOptions, Region, SizedImageOptions, Surface, SurfaceBuilder,
    SurfaceConfig, DEFAULT_DOWNLOAD_NAME, DEFAULT_EXPORT_MIME, DEFAULT_SIZE,
};
pub use tiling::{layout_tiles, PatternOptions, TileLayout, MAX_TILES};

pub use easel_canvas2d::{ArcParams, Canvas2dContext, EllipseParams, FillStyle};
