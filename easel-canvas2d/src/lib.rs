//! Pure Rust Canvas 2D drawing context using tiny-skia.
//!
//! This crate provides the subset of the Canvas 2D API needed by the `easel-rs`
//! facade without a browser or JavaScript runtime: paths, arcs, ellipses,
//! rectangle fills, image drawing, pixel access and PNG/JPEG export.
//!
//! # Example
//!
//! ```rust,ignore
//! use easel_canvas2d::{Canvas2dContext, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(400, 300)?;
//! ctx.set_fill_style("#ff0000")?;
//! ctx.fill_rect(&RectParams::new(10.0, 10.0, 100.0, 50.0));
//! let png_data = ctx.to_png()?;
//! ```

mod arc;
mod context;
mod drawing_state;
mod error;
mod geometry;
mod gradient;
mod style;

// Re-export public API
pub use context::{Canvas2dContext, Canvas2dContextBuilder, MAX_DIMENSION};
pub use error::{Canvas2dError, Canvas2dResult};
pub use geometry::{ArcParams, CanvasImageDataRef, EllipseParams, RadialGradientParams, RectParams};
pub use gradient::{CanvasGradient, GradientStop, GradientType};
pub use style::FillStyle;
