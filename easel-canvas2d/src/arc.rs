//! Arc operations using bezier curve approximation.
//!
//! tiny-skia does not support arc primitives directly, so arcs are
//! approximated with one cubic bezier per quarter turn (or less).

use crate::geometry::{ArcParams, EllipseParams};
use std::f32::consts::{FRAC_PI_2, TAU};
use tiny_skia::PathBuilder;

/// Add a circular arc to the path, starting with a `move_to` at the arc start.
pub fn arc(path: &mut PathBuilder, params: &ArcParams) {
    ellipse(path, &EllipseParams::from(params));
}

/// Add an elliptical arc to the path, starting with a `move_to` at the arc start.
///
/// Zero or negative radii add nothing.
pub fn ellipse(path: &mut PathBuilder, params: &EllipseParams) {
    let EllipseParams {
        x,
        y,
        radius_x,
        radius_y,
        rotation,
        start_angle,
        end_angle,
        anticlockwise,
    } = *params;

    if radius_x <= 0.0 || radius_y <= 0.0 {
        return;
    }

    let sweep = sweep_angle(start_angle, end_angle, anticlockwise);
    let num_segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let segment_angle = sweep / num_segments as f32;

    let cos_rot = rotation.cos();
    let sin_rot = rotation.sin();
    let map = |ux: f32, uy: f32| -> (f32, f32) {
        let tx = radius_x * ux;
        let ty = radius_y * uy;
        (x + tx * cos_rot - ty * sin_rot, y + tx * sin_rot + ty * cos_rot)
    };

    let (sx, sy) = map(start_angle.cos(), start_angle.sin());
    path.move_to(sx, sy);

    for i in 0..num_segments {
        let a1 = start_angle + i as f32 * segment_angle;
        let a2 = a1 + segment_angle;
        let k = 4.0 / 3.0 * ((a2 - a1) / 4.0).tan();

        let (x1, y1) = (a1.cos(), a1.sin());
        let (x2, y2) = (a2.cos(), a2.sin());

        let (c1x, c1y) = map(x1 - k * y1, y1 + k * x1);
        let (c2x, c2y) = map(x2 + k * y2, y2 - k * x2);
        let (ex, ey) = map(x2, y2);
        path.cubic_to(c1x, c1y, c2x, c2y, ex, ey);
    }
}

/// Signed sweep between two angles following canvas rules: clockwise sweeps
/// are positive, a sweep of a full turn or more is clamped to one turn.
pub(crate) fn sweep_angle(start: f32, end: f32, anticlockwise: bool) -> f32 {
    let delta = end - start;
    if anticlockwise {
        if -delta >= TAU {
            -TAU
        } else {
            -(-delta).rem_euclid(TAU)
        }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}
