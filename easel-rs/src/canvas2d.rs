//! [`DrawingContext`] for the tiny-skia raster context.

use crate::composite::CompositeOperation;
use crate::context::DrawingContext;
use crate::error::EaselResult;
use crate::export::{jpeg_quality, ImageFormat};
use crate::geometry::Rect;
use crate::bitmap::Image;
use easel_canvas2d::{ArcParams, Canvas2dContext, EllipseParams, FillStyle, RectParams};

impl DrawingContext for Canvas2dContext {
    type Paint = FillStyle;

    fn width(&self) -> u32 {
        Canvas2dContext::width(self)
    }

    fn height(&self) -> u32 {
        Canvas2dContext::height(self)
    }

    fn resize(&mut self, width: u32, height: u32) -> EaselResult<()> {
        Ok(Canvas2dContext::resize(self, width, height)?)
    }

    fn save(&mut self) {
        Canvas2dContext::save(self)
    }

    fn restore(&mut self) {
        Canvas2dContext::restore(self)
    }

    fn fill_paint(&self) -> FillStyle {
        Canvas2dContext::fill_paint(self).clone()
    }

    fn set_fill_paint(&mut self, paint: FillStyle) {
        Canvas2dContext::set_fill_paint(self, paint)
    }

    fn stroke_paint(&self) -> FillStyle {
        Canvas2dContext::stroke_paint(self).clone()
    }

    fn set_stroke_paint(&mut self, paint: FillStyle) {
        Canvas2dContext::set_stroke_paint(self, paint)
    }

    fn line_width(&self) -> f32 {
        Canvas2dContext::line_width(self)
    }

    fn set_line_width(&mut self, width: f32) {
        Canvas2dContext::set_line_width(self, width)
    }

    fn global_alpha(&self) -> f32 {
        Canvas2dContext::global_alpha(self)
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        Canvas2dContext::set_global_alpha(self, alpha)
    }

    fn composite_operation(&self) -> CompositeOperation {
        CompositeOperation::from_canonical(self.global_composite_operation()).unwrap_or_default()
    }

    fn set_composite_operation(&mut self, op: CompositeOperation) {
        self.set_global_composite_operation(op.as_str());
    }

    fn translate(&mut self, x: f32, y: f32) {
        Canvas2dContext::translate(self, x, y)
    }

    fn rotate(&mut self, angle: f32) {
        Canvas2dContext::rotate(self, angle)
    }

    fn begin_path(&mut self) {
        Canvas2dContext::begin_path(self)
    }

    fn close_path(&mut self) {
        Canvas2dContext::close_path(self)
    }

    fn move_to(&mut self, x: f32, y: f32) {
        Canvas2dContext::move_to(self, x, y)
    }

    fn line_to(&mut self, x: f32, y: f32) {
        Canvas2dContext::line_to(self, x, y)
    }

    fn rect(&mut self, rect: &Rect) {
        Canvas2dContext::rect(self, &RectParams::from(rect))
    }

    fn arc(&mut self, params: &ArcParams) {
        Canvas2dContext::arc(self, params)
    }

    fn ellipse(&mut self, params: &EllipseParams) {
        Canvas2dContext::ellipse(self, params)
    }

    fn fill(&mut self) {
        Canvas2dContext::fill(self)
    }

    fn stroke(&mut self) {
        Canvas2dContext::stroke(self)
    }

    fn fill_rect(&mut self, rect: &Rect) {
        Canvas2dContext::fill_rect(self, &RectParams::from(rect))
    }

    fn clear_rect(&mut self, rect: &Rect) {
        Canvas2dContext::clear_rect(self, &RectParams::from(rect))
    }

    fn draw_image(&mut self, image: &Image, dest: &Rect) {
        self.draw_image_data_scaled(
            &image.as_canvas_data(),
            dest.x,
            dest.y,
            dest.width,
            dest.height,
        )
    }

    fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        Canvas2dContext::get_image_data(self, x, y, width, height)
    }

    fn put_image_data(&mut self, data: &[u8], width: u32, height: u32, dx: i32, dy: i32) {
        Canvas2dContext::put_image_data(self, data, width, height, dx, dy)
    }

    fn encode(&self, format: ImageFormat, quality: f32) -> EaselResult<Vec<u8>> {
        let bytes = match format {
            ImageFormat::Png => self.to_png()?,
            ImageFormat::Jpeg => self.to_jpeg(jpeg_quality(quality))?,
        };
        Ok(bytes)
    }
}
