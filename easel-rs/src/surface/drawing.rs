//! Region clearing/filling and whole-path painting.

use super::Surface;
use crate::context::DrawingContext;
use crate::geometry::{Rect, Vector2};
use crate::settings::StyleSettings;

/// A rectangular region. Absent sizes extend to the surface size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub offset: Vector2,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            offset: Vector2::new(x, y),
            width: Some(width),
            height: Some(height),
        }
    }
}

impl<C: DrawingContext> Surface<C> {
    fn region_rect(&self, region: &Region) -> Rect {
        Rect::new(
            region.offset.x,
            region.offset.y,
            region.width.unwrap_or(self.width() as f32),
            region.height.unwrap_or(self.height() as f32),
        )
    }

    /// Clear the whole surface to transparent.
    pub fn clear(&mut self) -> &mut Self {
        self.clear_region(&Region::default())
    }

    pub fn clear_region(&mut self, region: &Region) -> &mut Self {
        let rect = self.region_rect(region);
        log::debug!(target: "easel", "clear_region {:?}", rect);
        self.ctx.clear_rect(&rect);
        self
    }

    /// Fill a region with the current (or given) fill paint.
    pub fn fill_region(&mut self, region: &Region, settings: &StyleSettings<C::Paint>) -> &mut Self {
        let rect = self.region_rect(region);
        log::debug!(target: "easel", "fill_region {:?}", rect);
        self.scoped(settings, |surface| surface.ctx.fill_rect(&rect))
    }

    pub fn begin_path(&mut self) -> &mut Self {
        self.ctx.begin_path();
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.ctx.close_path();
        self
    }

    /// Fill the current path.
    pub fn fill(&mut self, settings: &StyleSettings<C::Paint>) -> &mut Self {
        self.scoped(settings, |surface| surface.ctx.fill())
    }

    /// Stroke the current path.
    pub fn stroke(&mut self, settings: &StyleSettings<C::Paint>) -> &mut Self {
        self.scoped(settings, |surface| surface.ctx.stroke())
    }
}
