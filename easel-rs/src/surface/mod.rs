//! The drawing facade.

mod drawing;
mod image_ops;
mod path_ops;
mod pixel_ops;

pub use drawing::Region;
pub use image_ops::{DrawImageOptions, SizedImageOptions};
pub use pixel_ops::{ChromaKeyColor, DEFAULT_DOWNLOAD_NAME, DEFAULT_EXPORT_MIME};

use crate::composite::CompositeOperation;
use crate::context::DrawingContext;
use crate::error::{Diagnostic, EaselResult};
use crate::geometry::Vector2;
use crate::settings::{StrokeSettings, StyleSettings};
use easel_canvas2d::{Canvas2dContext, FillStyle};

/// Default surface width and height in pixels.
pub const DEFAULT_SIZE: u32 = 1024;

/// Surface construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

/// Builder for a raster-backed [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct SurfaceBuilder {
    config: SurfaceConfig,
    background: Option<FillStyle>,
}

impl SurfaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.config.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = height;
        self
    }

    /// Paint the whole surface with `style` after creation.
    pub fn background(mut self, style: FillStyle) -> Self {
        self.background = Some(style);
        self
    }

    pub fn build(self) -> EaselResult<Surface<Canvas2dContext>> {
        let mut builder = Canvas2dContext::builder(self.config.width, self.config.height);
        if let Some(background) = self.background {
            builder = builder.with_background(background);
        }
        Ok(Surface::new(builder.build()?))
    }
}

/// A drawing target with a fluent, chainable API.
///
/// Every drawing operation takes its style as [`StyleSettings`], applies it
/// inside a `save`/`restore` pair, and returns `&mut Self`. Recoverable
/// problems (unknown composite names, too few points, ...) skip the operation,
/// are logged, and are kept in [`diagnostics`](Surface::diagnostics).
#[derive(Debug)]
pub struct Surface<C: DrawingContext> {
    ctx: C,
    diagnostics: Vec<Diagnostic>,
}

impl Surface<Canvas2dContext> {
    pub fn builder() -> SurfaceBuilder {
        SurfaceBuilder::new()
    }

    /// Create a raster surface. Fails when the dimensions are zero or too large.
    pub fn create(config: &SurfaceConfig) -> EaselResult<Self> {
        log::debug!(target: "easel", "create surface {}x{}", config.width, config.height);
        let ctx = Canvas2dContext::new(config.width, config.height)?;
        Ok(Self::new(ctx))
    }
}

impl<C: DrawingContext> Surface<C> {
    /// Wrap an existing drawing context.
    pub fn new(ctx: C) -> Self {
        Self {
            ctx,
            diagnostics: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.ctx.width()
    }

    pub fn height(&self) -> u32 {
        self.ctx.height()
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    /// Non-fatal problems reported since creation or the last take.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!(target: "easel", "{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn center(&self) -> Vector2 {
        Vector2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    /// Change the surface size. An absent dimension keeps its current value.
    ///
    /// Raster contexts discard their pixels and drawing state, as a canvas does.
    pub fn resize(&mut self, width: Option<u32>, height: Option<u32>) -> &mut Self {
        let width = width.unwrap_or_else(|| self.width());
        let height = height.unwrap_or_else(|| self.height());
        log::debug!(target: "easel", "resize {}x{}", width, height);
        if self.ctx.resize(width, height).is_err() {
            self.report(Diagnostic::InvalidDimensions { width, height });
        }
        self
    }

    pub fn set_fill_color(&mut self, paint: C::Paint) -> &mut Self {
        self.ctx.set_fill_paint(paint);
        self
    }

    /// Set line width and/or stroke paint. Absent fields are left unchanged.
    pub fn set_stroke(&mut self, stroke: &StrokeSettings<C::Paint>) -> &mut Self {
        if let Some(thickness) = stroke.thickness {
            self.ctx.set_line_width(thickness);
        }
        if let Some(color) = &stroke.color {
            self.ctx.set_stroke_paint(color.clone());
        }
        self
    }

    /// Set the composite operation by alias (`"MASK"`) or canonical name
    /// (`"destination-in"`). Unknown names leave the current mode in place.
    pub fn set_composite_operation(&mut self, name: &str) -> &mut Self {
        match CompositeOperation::resolve(name) {
            Some(op) => self.ctx.set_composite_operation(op),
            None => self.report(Diagnostic::UnknownCompositeOperation(name.to_string())),
        }
        self
    }

    pub fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        if (0.0..=1.0).contains(&alpha) {
            self.ctx.set_global_alpha(alpha);
        } else {
            self.report(Diagnostic::InvalidAlpha(alpha));
        }
        self
    }

    fn apply_settings(&mut self, settings: &StyleSettings<C::Paint>) {
        if let Some(fill) = &settings.fill {
            self.ctx.set_fill_paint(fill.clone());
        }
        if let Some(stroke) = &settings.stroke {
            self.set_stroke(stroke);
        }
        if let Some(alpha) = settings.alpha {
            self.set_alpha(alpha);
        }
        if let Some(name) = &settings.composite {
            self.set_composite_operation(name);
        }
    }

    /// Run `draw` with `settings` applied, restoring the context state afterwards.
    fn scoped(
        &mut self,
        settings: &StyleSettings<C::Paint>,
        draw: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.ctx.save();
        self.apply_settings(settings);
        draw(self);
        self.ctx.restore();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Command, RecordingContext};

    fn recording() -> Surface<RecordingContext> {
        Surface::new(RecordingContext::new(100, 100))
    }

    #[test]
    fn test_config_default() {
        let config = SurfaceConfig::default();
        assert_eq!((config.width, config.height), (1024, 1024));
    }

    #[test]
    fn test_create_rejects_zero_size() {
        let config = SurfaceConfig {
            width: 0,
            height: 10,
        };
        assert!(Surface::create(&config).is_err());
    }

    #[test]
    fn test_resize_keeps_absent_dimension() {
        let mut surface = recording();
        surface.resize(Some(40), None);
        assert_eq!((surface.width(), surface.height()), (40, 100));
        surface.resize(None, Some(0));
        assert_eq!((surface.width(), surface.height()), (40, 100));
        assert_eq!(
            surface.take_diagnostics(),
            vec![Diagnostic::InvalidDimensions {
                width: 40,
                height: 0
            }]
        );
        assert!(surface.diagnostics().is_empty());
    }

    #[test]
    fn test_set_composite_operation_alias() {
        let mut surface = recording();
        surface.set_composite_operation("MASK");
        assert_eq!(
            surface.context().composite_operation(),
            CompositeOperation::DestinationIn
        );
        surface.set_composite_operation("xor");
        assert_eq!(surface.context().composite_operation(), CompositeOperation::Xor);
    }

    #[test]
    fn test_unknown_composite_operation_is_reported() {
        let mut surface = recording();
        surface
            .set_composite_operation("MULTIPLY")
            .set_composite_operation("NOPE");
        assert_eq!(
            surface.context().composite_operation(),
            CompositeOperation::Multiply
        );
        assert_eq!(
            surface.diagnostics(),
            &[Diagnostic::UnknownCompositeOperation("NOPE".to_string())]
        );
    }

    #[test]
    fn test_set_alpha_out_of_range() {
        let mut surface = recording();
        surface.set_alpha(0.4).set_alpha(1.5);
        assert_eq!(surface.context().global_alpha(), 0.4);
        assert_eq!(surface.diagnostics(), &[Diagnostic::InvalidAlpha(1.5)]);
    }

    #[test]
    fn test_set_stroke_partial() {
        let mut surface = recording();
        surface.set_stroke(&StrokeSettings {
            thickness: Some(4.0),
            color: None,
        });
        assert_eq!(surface.context().line_width(), 4.0);
        assert_eq!(surface.context().stroke_paint(), "#000000");
    }

    #[test]
    fn test_settings_applied_in_order_and_restored() {
        let mut surface = recording();
        let settings = StyleSettings::new()
            .with_fill("red".to_string())
            .with_stroke(StrokeSettings::new(3.0, "blue".to_string()))
            .with_alpha(0.5)
            .with_composite("ADD");
        surface.fill(&settings);

        let commands = surface.context().commands();
        assert_eq!(
            commands,
            &[
                Command::Save,
                Command::SetFillPaint("red".to_string()),
                Command::SetLineWidth(3.0),
                Command::SetStrokePaint("blue".to_string()),
                Command::SetGlobalAlpha(0.5),
                Command::SetCompositeOperation(CompositeOperation::Lighter),
                Command::Fill,
                Command::Restore,
            ]
        );
        assert_eq!(surface.context().fill_paint(), "#000000");
        assert_eq!(surface.context().global_alpha(), 1.0);
        assert_eq!(surface.context().save_depth(), 0);
    }
}
