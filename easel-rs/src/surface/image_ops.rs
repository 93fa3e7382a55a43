//! Image drawing: stretch, fit/fill placement, pattern tiling and import.

use super::Surface;
use crate::bitmap::Image;
use crate::context::DrawingContext;
use crate::error::{Diagnostic, EaselError, EaselResult};
use crate::geometry::{AspectMode, Rect, Vector2};
use crate::placement::{solve_placement, FitOptions};
use crate::settings::StyleSettings;
use crate::tiling::{layout_tiles, PatternOptions};
use futures::channel::oneshot;
use std::thread;

/// Options for [`Surface::draw_image`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawImageOptions {
    /// Where the image center lands.
    pub center: Vector2,
    /// Rotation around the center, in radians.
    pub rotation: f32,
    pub scale: f32,
}

impl Default for DrawImageOptions {
    fn default() -> Self {
        Self {
            center: Vector2::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// Options for [`Surface::draw_image_with_dimensions`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizedImageOptions {
    pub width: f32,
    pub height: f32,
    pub center: Vector2,
    pub rotation: f32,
}

impl<C: DrawingContext> Surface<C> {
    /// Report and return `false` for zero-sized images.
    fn check_image(&mut self, image: &Image) -> bool {
        if image.is_degenerate() {
            self.report(Diagnostic::DegenerateImage {
                width: image.width(),
                height: image.height(),
            });
            return false;
        }
        true
    }

    /// Draw `image` over the whole surface, stretched or aspect-preserving.
    pub fn fill_image(
        &mut self,
        image: &Image,
        mode: AspectMode,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        match mode {
            AspectMode::Stretch => {
                if !self.check_image(image) {
                    return self;
                }
                let dest = Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32);
                self.scoped(settings, |surface| surface.ctx.draw_image(image, &dest))
            }
            AspectMode::Fit | AspectMode::Fill => {
                let options = FitOptions {
                    fill: mode == AspectMode::Fill,
                    ..Default::default()
                };
                self.fill_image_fit_or_fill(image, &options, settings)
            }
        }
    }

    /// Place `image` so that it fits inside (or covers) the surface minus margins.
    pub fn fill_image_fit_or_fill(
        &mut self,
        image: &Image,
        options: &FitOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        if !self.check_image(image) {
            return self;
        }
        let aspect = options
            .aspect
            .filter(|aspect| aspect.is_finite() && *aspect > 0.0)
            .unwrap_or_else(|| image.aspect());

        let Some(dest) = solve_placement(
            aspect,
            self.width() as f32,
            self.height() as f32,
            options,
        ) else {
            self.report(Diagnostic::EmptyTarget);
            return self;
        };
        log::debug!(target: "easel", "fill_image_fit_or_fill -> {:?}", dest);
        self.scoped(settings, |surface| surface.ctx.draw_image(image, &dest))
    }

    /// Tile `image` over the surface.
    pub fn fill_image_pattern(
        &mut self,
        image: &Image,
        options: &PatternOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        if !self.check_image(image) {
            return self;
        }
        let (width, height) = (self.width() as f32, self.height() as f32);
        let Some(layout) = layout_tiles(
            width,
            height,
            image.width() as f32,
            image.height() as f32,
            options,
        ) else {
            self.report(Diagnostic::InvalidRepeat);
            return self;
        };
        log::debug!(
            target: "easel",
            "fill_image_pattern: {} tiles, rotation {}",
            layout.tile_count(),
            layout.rotation
        );

        self.scoped(settings, |surface| {
            let ctx = &mut surface.ctx;
            if layout.rotation != 0.0 {
                ctx.translate(width / 2.0, height / 2.0);
                ctx.rotate(layout.rotation);
                ctx.translate(-layout.rotated_width / 2.0, -layout.rotated_height / 2.0);
            }
            for tile in layout.tiles() {
                ctx.draw_image(image, &tile);
            }
        })
    }

    /// Draw `image` at its natural size times `scale`, centred on `center`.
    pub fn draw_image(
        &mut self,
        image: &Image,
        options: &DrawImageOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        let options = SizedImageOptions {
            width: image.width() as f32 * options.scale,
            height: image.height() as f32 * options.scale,
            center: options.center,
            rotation: options.rotation,
        };
        self.draw_image_with_dimensions(image, &options, settings)
    }

    /// Draw `image` at an explicit size, centred on `center`.
    pub fn draw_image_with_dimensions(
        &mut self,
        image: &Image,
        options: &SizedImageOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        if !self.check_image(image) {
            return self;
        }
        let dest = Rect::new(
            -options.width / 2.0,
            -options.height / 2.0,
            options.width,
            options.height,
        );
        self.scoped(settings, |surface| {
            let ctx = &mut surface.ctx;
            ctx.translate(options.center.x, options.center.y);
            ctx.rotate(options.rotation);
            ctx.draw_image(image, &dest);
        })
    }

    /// Current pixels as an image, for drawing one surface onto another.
    pub fn snapshot(&self) -> Image {
        let (width, height) = (self.width(), self.height());
        let data = self.ctx.get_image_data(0, 0, width, height);
        Image::from_parts(width, height, data)
    }

    /// Decode a base64 `data:` URI and stretch it over the surface.
    ///
    /// Decoding runs on a separate thread. Dropping the returned future
    /// abandons the result; the decode itself is not interrupted.
    pub async fn load_from_data_uri(&mut self, data: &str) -> EaselResult<&mut Self> {
        let (resp_tx, resp_rx) = oneshot::channel::<EaselResult<Image>>();
        let uri = data.to_string();
        thread::spawn(move || {
            resp_tx.send(Image::from_data_uri(&uri)).ok();
        });

        let image = match resp_rx.await {
            Ok(result) => result?,
            Err(err) => {
                return Err(EaselError::Decode(format!(
                    "decoder thread exited: {}",
                    err
                )))
            }
        };
        log::debug!(target: "easel", "loaded {}x{} image from data URI", image.width(), image.height());
        Ok(self.fill_image(&image, AspectMode::Stretch, &StyleSettings::default()))
    }
}
