//! Shape and path builders.

use super::Surface;
use crate::context::DrawingContext;
use crate::error::Diagnostic;
use crate::geometry::{Rect, Vector2};
use crate::settings::StyleSettings;
use crate::shapes::{
    polygon_radius, rectangle_polygon_points, regular_polygon_points, trace_rounded_rect,
    ArcOptions, EllipseOptions, PolygonOptions, PolylineOptions, RectOptions,
    RectanglePolygonOptions, RoundedRectOptions,
};
use easel_canvas2d::{ArcParams, EllipseParams};

impl<C: DrawingContext> Surface<C> {
    /// Trace a shape and paint it when asked to, either explicitly or because
    /// the settings carry a fill paint or stroke settings. Otherwise the shape
    /// is appended to the current path unpainted.
    fn shape(
        &mut self,
        fill: bool,
        stroke: bool,
        settings: &StyleSettings<C::Paint>,
        trace: impl FnOnce(&mut C),
    ) -> &mut Self {
        let fill = fill || settings.implies_fill();
        let stroke = stroke || settings.implies_stroke();
        self.scoped(settings, |surface| {
            let ctx = &mut surface.ctx;
            if fill || stroke {
                ctx.begin_path();
                trace(ctx);
                if fill {
                    ctx.fill();
                }
                if stroke {
                    ctx.stroke();
                }
            } else {
                trace(ctx);
            }
        })
    }

    pub fn rect(&mut self, options: &RectOptions, settings: &StyleSettings<C::Paint>) -> &mut Self {
        let rect = Rect::new(
            options.offset.x,
            options.offset.y,
            options.width.unwrap_or(self.width() as f32),
            options.height.unwrap_or(self.height() as f32),
        );
        log::debug!(target: "easel", "rect {:?}", rect);
        self.shape(options.fill, options.stroke, settings, |ctx| ctx.rect(&rect))
    }

    pub fn arc(&mut self, options: &ArcOptions, settings: &StyleSettings<C::Paint>) -> &mut Self {
        let center = options.center.unwrap_or_else(|| self.center());
        let params = ArcParams {
            x: center.x,
            y: center.y,
            radius: options
                .radius
                .unwrap_or(self.width().min(self.height()) as f32 / 2.0),
            start_angle: options.start_angle,
            end_angle: options.end_angle,
            anticlockwise: options.anticlockwise,
        };
        log::debug!(target: "easel", "arc {:?}", params);
        self.shape(options.fill, options.stroke, settings, |ctx| ctx.arc(&params))
    }

    pub fn ellipse(
        &mut self,
        options: &EllipseOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        let center = options.center.unwrap_or_else(|| self.center());
        let radius = options.radius.unwrap_or_else(|| self.center());
        let params = EllipseParams {
            x: center.x,
            y: center.y,
            radius_x: radius.x,
            radius_y: radius.y,
            rotation: options.rotation,
            start_angle: options.start_angle,
            end_angle: options.end_angle,
            anticlockwise: options.anticlockwise,
        };
        log::debug!(target: "easel", "ellipse {:?}", params);
        self.shape(options.fill, options.stroke, settings, |ctx| {
            ctx.ellipse(&params)
        })
    }

    /// Rectangle with independently rounded corners.
    pub fn rounded_rectangle(
        &mut self,
        options: &RoundedRectOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        let rect = Rect::new(
            options.offset.x,
            options.offset.y,
            options.width.unwrap_or(self.width() as f32),
            options.height.unwrap_or(self.height() as f32),
        );
        let radii = options.radius.resolve();
        log::debug!(target: "easel", "rounded_rectangle {:?} {:?}", rect, radii);
        self.shape(options.fill, options.stroke, settings, |ctx| {
            trace_rounded_rect(ctx, &rect, &radii)
        })
    }

    /// Connect `points` with straight lines. Needs at least two points.
    ///
    /// The path is closed when `closed` is set or when it gets filled.
    pub fn polyline(
        &mut self,
        points: &[Vector2],
        options: &PolylineOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        let [first, rest @ ..] = points else {
            self.report(Diagnostic::TooFewPoints(0));
            return self;
        };
        if rest.is_empty() {
            self.report(Diagnostic::TooFewPoints(1));
            return self;
        }

        let fill = options.fill || settings.implies_fill();
        let stroke = options.stroke || settings.implies_stroke();
        log::debug!(target: "easel", "polyline of {} points", points.len());
        self.scoped(settings, |surface| {
            let ctx = &mut surface.ctx;
            ctx.begin_path();
            ctx.move_to(first.x, first.y);
            for point in rest {
                ctx.line_to(point.x, point.y);
            }
            if options.closed || fill {
                ctx.close_path();
            }
            if fill {
                ctx.fill();
            }
            if stroke {
                ctx.stroke();
            }
        })
    }

    /// Regular polygon from a circumradius or side length.
    pub fn polygon(
        &mut self,
        options: &PolygonOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        if options.sides < 3 {
            self.report(Diagnostic::TooFewPolygonSides(options.sides));
            return self;
        }
        let Some(radius) = polygon_radius(options.radius, options.side_length, options.sides)
        else {
            self.report(Diagnostic::MissingPolygonSize);
            return self;
        };
        let center = options.center.unwrap_or_else(|| self.center());
        let points = regular_polygon_points(options.sides, radius, center, options.rotation);
        self.polyline(&points, &options.polyline(), settings)
    }

    /// Rotated rectangle drawn as a four-point polygon.
    pub fn rectangle_as_polygon(
        &mut self,
        options: &RectanglePolygonOptions,
        settings: &StyleSettings<C::Paint>,
    ) -> &mut Self {
        let center = options.center.unwrap_or_else(|| self.center());
        let points = rectangle_polygon_points(options.width, options.height, center, options.rotation);
        self.polyline(&points, &options.polyline(), settings)
    }
}
