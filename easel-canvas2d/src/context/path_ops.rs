//! Path building operations for Canvas2dContext.
//!
//! Path coordinates are mapped through the current transform as they are
//! added, so the stored path is always in device space.

use super::Canvas2dContext;
use crate::geometry::{ArcParams, EllipseParams, RectParams};
use tiny_skia::{PathSegment, Transform};

impl Canvas2dContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Transform a point by the current transformation matrix.
    pub(crate) fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        map_point(&self.state.transform, x, y)
    }

    fn set_current_point(&mut self, x: f32, y: f32) {
        self.current_x = x;
        self.current_y = y;
        self.has_current_point = true;
    }

    fn start_subpath(&mut self, x: f32, y: f32) {
        self.path_builder.move_to(x, y);
        self.subpath_start_x = x;
        self.subpath_start_y = y;
        self.set_current_point(x, y);
    }

    /// Append a user-space path built by the arc helpers. When `connect` is
    /// set and a current point exists, its first move becomes a line.
    fn append_user_path(&mut self, path: &tiny_skia::Path, connect: bool) {
        let transform = self.state.transform;
        let mut first = true;

        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    let (x, y) = map_point(&transform, p.x, p.y);
                    if first && connect && self.has_current_point {
                        self.path_builder.line_to(x, y);
                        self.set_current_point(x, y);
                    } else {
                        self.start_subpath(x, y);
                    }
                    first = false;
                }
                PathSegment::LineTo(p) => {
                    let (x, y) = map_point(&transform, p.x, p.y);
                    self.path_builder.line_to(x, y);
                    self.set_current_point(x, y);
                }
                PathSegment::QuadTo(ctrl, p) => {
                    let (cx, cy) = map_point(&transform, ctrl.x, ctrl.y);
                    let (x, y) = map_point(&transform, p.x, p.y);
                    self.path_builder.quad_to(cx, cy, x, y);
                    self.set_current_point(x, y);
                }
                PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                    let (c1x, c1y) = map_point(&transform, ctrl1.x, ctrl1.y);
                    let (c2x, c2y) = map_point(&transform, ctrl2.x, ctrl2.y);
                    let (x, y) = map_point(&transform, p.x, p.y);
                    self.path_builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
                    self.set_current_point(x, y);
                }
                PathSegment::Close => {
                    self.path_builder.close();
                    let (x, y) = (self.subpath_start_x, self.subpath_start_y);
                    self.set_current_point(x, y);
                }
            }
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        let (tx, ty) = self.transform_point(x, y);
        self.start_subpath(tx, ty);
    }

    /// Draw a line to a point. Without a current point this acts as `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        let (tx, ty) = self.transform_point(x, y);
        if self.has_current_point {
            self.path_builder.line_to(tx, ty);
            self.set_current_point(tx, ty);
        } else {
            self.start_subpath(tx, ty);
        }
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        log::debug!(target: "canvas", "closePath");
        if self.has_current_point {
            self.path_builder.close();
            self.current_x = self.subpath_start_x;
            self.current_y = self.subpath_start_y;
        }
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "rect {} {} {} {}", params.x, params.y, params.width, params.height);
        let (x0, y0) = self.transform_point(params.x, params.y);
        let (x1, y1) = self.transform_point(params.x + params.width, params.y);
        let (x2, y2) = self.transform_point(params.x + params.width, params.y + params.height);
        let (x3, y3) = self.transform_point(params.x, params.y + params.height);

        self.start_subpath(x0, y0);
        self.path_builder.line_to(x1, y1);
        self.path_builder.line_to(x2, y2);
        self.path_builder.line_to(x3, y3);
        self.path_builder.close();
    }

    /// Add an arc to the path.
    pub fn arc(&mut self, params: &ArcParams) {
        log::debug!(target: "canvas", "arc {:?}", params);
        let mut arc_builder = tiny_skia::PathBuilder::new();
        crate::arc::arc(&mut arc_builder, params);

        match arc_builder.finish() {
            Some(path) => self.append_user_path(&path, true),
            // Degenerate arc: canvas still connects to its center point
            None => self.line_to(params.x, params.y),
        }
    }

    /// Add an ellipse to the path.
    pub fn ellipse(&mut self, params: &EllipseParams) {
        log::debug!(target: "canvas", "ellipse {:?}", params);
        let mut ellipse_builder = tiny_skia::PathBuilder::new();
        crate::arc::ellipse(&mut ellipse_builder, params);

        match ellipse_builder.finish() {
            Some(path) => self.append_user_path(&path, true),
            None => self.line_to(params.x, params.y),
        }
    }
}

pub(crate) fn map_point(transform: &Transform, x: f32, y: f32) -> (f32, f32) {
    (
        transform.sx * x + transform.kx * y + transform.tx,
        transform.ky * x + transform.sy * y + transform.ty,
    )
}
