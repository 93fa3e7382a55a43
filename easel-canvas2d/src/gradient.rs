//! Gradient paints.

use crate::geometry::RadialGradientParams;

/// One stop; `offset` is already clamped to `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: tiny_skia::Color,
}

/// A gradient paint usable as fill or stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGradient {
    pub gradient_type: GradientType,
    /// Kept ordered by offset.
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradientType {
    Linear { x0: f32, y0: f32, x1: f32, y1: f32 },
    Radial(RadialGradientParams),
}

impl CanvasGradient {
    pub fn new_linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            gradient_type: GradientType::Linear { x0, y0, x1, y1 },
            stops: Vec::new(),
        }
    }

    pub fn new_radial(params: &RadialGradientParams) -> Self {
        Self {
            gradient_type: GradientType::Radial(*params),
            stops: Vec::new(),
        }
    }

    /// Add a color stop. Offsets outside `0.0..=1.0` are clamped.
    pub fn add_color_stop(&mut self, offset: f32, color: tiny_skia::Color) -> &mut Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self.stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self
    }

    /// Build the tiny-skia shader, scaling stop alpha by `global_alpha`.
    pub(crate) fn to_shader(
        &self,
        global_alpha: f32,
        transform: tiny_skia::Transform,
    ) -> Option<tiny_skia::Shader<'static>> {
        if self.stops.is_empty() {
            return None;
        }

        let stops: Vec<tiny_skia::GradientStop> = self
            .stops
            .iter()
            .map(|stop| {
                let mut color = stop.color;
                if global_alpha < 1.0 {
                    color.set_alpha((color.alpha() * global_alpha).clamp(0.0, 1.0));
                }
                tiny_skia::GradientStop::new(stop.offset, color)
            })
            .collect();

        match &self.gradient_type {
            GradientType::Linear { x0, y0, x1, y1 } => tiny_skia::LinearGradient::new(
                tiny_skia::Point::from_xy(*x0, *y0),
                tiny_skia::Point::from_xy(*x1, *y1),
                stops,
                tiny_skia::SpreadMode::Pad,
                transform,
            ),
            GradientType::Radial(params) => tiny_skia::RadialGradient::new(
                tiny_skia::Point::from_xy(params.x0, params.y0),
                tiny_skia::Point::from_xy(params.x1, params.y1),
                params.r1,
                stops,
                tiny_skia::SpreadMode::Pad,
                transform,
            ),
        }
    }
}
