//! The drawing-context interface the facade is written against.

use crate::composite::CompositeOperation;
use crate::error::EaselResult;
use crate::export::ImageFormat;
use crate::geometry::Rect;
use crate::bitmap::Image;
use easel_canvas2d::{ArcParams, EllipseParams};
use std::fmt::Debug;

/// A Canvas 2D style drawing context.
///
/// The facade never rasterizes anything itself; every pixel is produced by an
/// implementation of this trait. Style state (paints, line width, alpha,
/// composite operation, transform) is saved and restored as a unit by
/// [`save`](DrawingContext::save) / [`restore`](DrawingContext::restore). The
/// current path is not part of that state.
pub trait DrawingContext {
    /// Fill and stroke paint (colors, gradients). Opaque to the facade.
    type Paint: Clone + Debug;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replace both dimensions. Implementations may discard pixels and state.
    fn resize(&mut self, width: u32, height: u32) -> EaselResult<()>;

    fn save(&mut self);
    fn restore(&mut self);

    fn fill_paint(&self) -> Self::Paint;
    fn set_fill_paint(&mut self, paint: Self::Paint);
    fn stroke_paint(&self) -> Self::Paint;
    fn set_stroke_paint(&mut self, paint: Self::Paint);
    fn line_width(&self) -> f32;
    fn set_line_width(&mut self, width: f32);
    fn global_alpha(&self) -> f32;
    fn set_global_alpha(&mut self, alpha: f32);
    fn composite_operation(&self) -> CompositeOperation;
    fn set_composite_operation(&mut self, op: CompositeOperation);

    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rect(&mut self, rect: &Rect);
    fn arc(&mut self, params: &ArcParams);
    fn ellipse(&mut self, params: &EllipseParams);

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, rect: &Rect);
    fn clear_rect(&mut self, rect: &Rect);

    /// Draw `image` scaled into `dest` under the current transform.
    fn draw_image(&mut self, image: &Image, dest: &Rect);

    /// Non-premultiplied RGBA pixels of a region.
    fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8>;

    /// Write non-premultiplied RGBA pixels, bypassing transform and compositing.
    fn put_image_data(&mut self, data: &[u8], width: u32, height: u32, dx: i32, dy: i32);

    /// Encode the current pixels. `quality` in `[0, 1]` applies to lossy formats.
    fn encode(&self, format: ImageFormat, quality: f32) -> EaselResult<Vec<u8>>;
}
