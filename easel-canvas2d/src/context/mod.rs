//! Canvas 2D rendering context implementation.

mod drawing;
mod image_ops;
mod path_ops;
mod transform;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::style::{parse_color, FillStyle};
use tiny_skia::{BlendMode, Pixmap};

/// Maximum canvas dimension (same as Chrome).
pub const MAX_DIMENSION: u32 = 32767;

/// Canonical composite operation names and the blend mode each maps to.
const COMPOSITE_MODES: [(&str, BlendMode); 26] = [
    ("source-over", BlendMode::SourceOver),
    ("source-in", BlendMode::SourceIn),
    ("source-out", BlendMode::SourceOut),
    ("source-atop", BlendMode::SourceAtop),
    ("destination-over", BlendMode::DestinationOver),
    ("destination-in", BlendMode::DestinationIn),
    ("destination-out", BlendMode::DestinationOut),
    ("destination-atop", BlendMode::DestinationAtop),
    ("lighter", BlendMode::Plus),
    ("copy", BlendMode::Source),
    ("xor", BlendMode::Xor),
    ("multiply", BlendMode::Multiply),
    ("screen", BlendMode::Screen),
    ("overlay", BlendMode::Overlay),
    ("darken", BlendMode::Darken),
    ("lighten", BlendMode::Lighten),
    ("color-dodge", BlendMode::ColorDodge),
    ("color-burn", BlendMode::ColorBurn),
    ("hard-light", BlendMode::HardLight),
    ("soft-light", BlendMode::SoftLight),
    ("difference", BlendMode::Difference),
    ("exclusion", BlendMode::Exclusion),
    ("hue", BlendMode::Hue),
    ("saturation", BlendMode::Saturation),
    ("color", BlendMode::Color),
    ("luminosity", BlendMode::Luminosity),
];

/// Builder for Canvas2dContext.
pub struct Canvas2dContextBuilder {
    width: u32,
    height: u32,
    background: Option<FillStyle>,
}

impl Canvas2dContextBuilder {
    /// Create a new builder with specified dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
        }
    }

    /// Paint the whole canvas with `style` after creation.
    pub fn with_background(mut self, style: FillStyle) -> Self {
        self.background = Some(style);
        self
    }

    /// Build the Canvas2dContext.
    pub fn build(self) -> Canvas2dResult<Canvas2dContext> {
        let mut ctx = Canvas2dContext::new(self.width, self.height)?;
        if let Some(background) = self.background {
            ctx.save();
            ctx.set_fill_paint(background);
            ctx.fill_rect(&crate::geometry::RectParams::new(
                0.0,
                0.0,
                self.width as f32,
                self.height as f32,
            ));
            ctx.restore();
        }
        Ok(ctx)
    }
}

/// Canvas 2D rendering context.
pub struct Canvas2dContext {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pub(crate) pixmap: Pixmap,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<DrawingState>,
    /// Current path builder.
    pub(crate) path_builder: tiny_skia::PathBuilder,
    /// Current path position, in device space.
    pub(crate) current_x: f32,
    pub(crate) current_y: f32,
    /// Subpath start position (for closePath).
    pub(crate) subpath_start_x: f32,
    pub(crate) subpath_start_y: f32,
    /// Whether the path has a current point (for arc/ellipse line_to vs move_to).
    pub(crate) has_current_point: bool,
}

impl std::fmt::Debug for Canvas2dContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas2dContext")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .field("saved_states", &self.state_stack.len())
            .finish_non_exhaustive()
    }
}

impl Canvas2dContext {
    /// Create a new Canvas2dContext with the specified dimensions.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        let pixmap = new_pixmap(width, height)?;

        Ok(Self {
            width,
            height,
            pixmap,
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path_builder: tiny_skia::PathBuilder::new(),
            current_x: 0.0,
            current_y: 0.0,
            subpath_start_x: 0.0,
            subpath_start_y: 0.0,
            has_current_point: false,
        })
    }

    /// Create a new builder for more configuration options.
    pub fn builder(width: u32, height: u32) -> Canvas2dContextBuilder {
        Canvas2dContextBuilder::new(width, height)
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize the canvas.
    ///
    /// Like setting `canvas.width`/`canvas.height`, this discards all pixels
    /// and resets the drawing state. On error the canvas is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Canvas2dResult<()> {
        log::debug!(target: "canvas", "resize {} {}", width, height);
        self.pixmap = new_pixmap(width, height)?;
        self.width = width;
        self.height = height;
        self.reset_state();
        Ok(())
    }

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the previously saved drawing state.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    fn reset_state(&mut self) {
        self.state = DrawingState::default();
        self.state_stack.clear();
        self.path_builder = tiny_skia::PathBuilder::new();
        self.current_x = 0.0;
        self.current_y = 0.0;
        self.subpath_start_x = 0.0;
        self.subpath_start_y = 0.0;
        self.has_current_point = false;
    }

    // --- Style setters ---

    /// Set the fill style from a CSS color string.
    pub fn set_fill_style(&mut self, style: &str) -> Canvas2dResult<()> {
        let color = parse_color(style)?;
        self.state.fill_style = FillStyle::Color(color);
        Ok(())
    }

    /// Set the fill paint (color or gradient).
    pub fn set_fill_paint(&mut self, paint: FillStyle) {
        self.state.fill_style = paint;
    }

    /// Current fill paint.
    pub fn fill_paint(&self) -> &FillStyle {
        &self.state.fill_style
    }

    /// Set the stroke style from a CSS color string.
    pub fn set_stroke_style(&mut self, style: &str) -> Canvas2dResult<()> {
        let color = parse_color(style)?;
        self.state.stroke_style = FillStyle::Color(color);
        Ok(())
    }

    /// Set the stroke paint (color or gradient).
    pub fn set_stroke_paint(&mut self, paint: FillStyle) {
        self.state.stroke_style = paint;
    }

    /// Current stroke paint.
    pub fn stroke_paint(&self) -> &FillStyle {
        &self.state.stroke_style
    }

    /// Set the line width.
    /// Non-finite or non-positive widths are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    /// Set the global alpha (opacity).
    /// Non-finite values and values outside [0.0, 1.0] are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    /// Set the global composite operation from its canonical name.
    /// Unknown names are ignored and the previous mode is kept.
    /// Returns true if the value was accepted.
    pub fn set_global_composite_operation(&mut self, op: &str) -> bool {
        match COMPOSITE_MODES.iter().find(|(name, _)| *name == op) {
            Some((_, mode)) => {
                self.state.global_composite_operation = *mode;
                true
            }
            None => false,
        }
    }

    /// Canonical name of the current composite operation.
    pub fn global_composite_operation(&self) -> &'static str {
        COMPOSITE_MODES
            .iter()
            .find(|(_, mode)| *mode == self.state.global_composite_operation)
            .map(|(name, _)| *name)
            .unwrap_or("source-over")
    }
}

fn new_pixmap(width: u32, height: u32) -> Canvas2dResult<Pixmap> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Canvas2dError::InvalidDimensions { width, height });
    }
    Pixmap::new(width, height).ok_or(Canvas2dError::InvalidDimensions { width, height })
}
