//! The part of the context that `save`/`restore` snapshot.

use crate::style::FillStyle;
use tiny_skia::{BlendMode, Transform};

/// Style and transform state. The current path is deliberately absent: it
/// survives `restore`, as on a canvas.
#[derive(Debug, Clone)]
pub(crate) struct DrawingState {
    pub fill_style: FillStyle,
    pub stroke_style: FillStyle,
    /// User-space width; scaled by the transform at stroke time.
    pub line_width: f32,
    pub global_alpha: f32,
    pub global_composite_operation: BlendMode,
    pub transform: Transform,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: FillStyle::default(),
            stroke_style: FillStyle::default(),
            line_width: 1.0,
            global_alpha: 1.0,
            global_composite_operation: BlendMode::SourceOver,
            transform: Transform::identity(),
        }
    }
}
