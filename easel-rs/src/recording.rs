//! A drawing context that records primitive calls instead of rasterizing.
//!
//! Useful for checking the geometry the facade emits without inspecting
//! pixels. Pixel data is kept only as a plain buffer for get/put round trips.

use crate::composite::CompositeOperation;
use crate::context::DrawingContext;
use crate::error::{EaselError, EaselResult};
use crate::export::ImageFormat;
use crate::geometry::Rect;
use crate::bitmap::Image;
use easel_canvas2d::{ArcParams, EllipseParams};

/// A recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Resize { width: u32, height: u32 },
    Save,
    Restore,
    SetFillPaint(String),
    SetStrokePaint(String),
    SetLineWidth(f32),
    SetGlobalAlpha(f32),
    SetCompositeOperation(CompositeOperation),
    Translate { x: f32, y: f32 },
    Rotate(f32),
    BeginPath,
    ClosePath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Rect(Rect),
    Arc(ArcParams),
    Ellipse(EllipseParams),
    Fill,
    Stroke,
    FillRect(Rect),
    ClearRect(Rect),
    DrawImage { width: u32, height: u32, dest: Rect },
    PutImageData { width: u32, height: u32, dx: i32, dy: i32 },
}

#[derive(Debug, Clone, PartialEq)]
struct RecordedState {
    fill: String,
    stroke: String,
    line_width: f32,
    global_alpha: f32,
    composite: CompositeOperation,
}

impl Default for RecordedState {
    fn default() -> Self {
        Self {
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            line_width: 1.0,
            global_alpha: 1.0,
            composite: CompositeOperation::SourceOver,
        }
    }
}

/// Records every call made through [`DrawingContext`]. Paints are plain strings.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    width: u32,
    height: u32,
    state: RecordedState,
    state_stack: Vec<RecordedState>,
    pixels: Vec<u8>,
    commands: Vec<Command>,
}

impl RecordingContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: RecordedState::default(),
            state_stack: Vec::new(),
            pixels: vec![0; (width as usize) * (height as usize) * 4],
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Destination rectangles of every recorded `DrawImage`.
    pub fn image_draws(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::DrawImage { dest, .. } => Some(*dest),
                _ => None,
            })
            .collect()
    }

    /// Depth of the save stack. Zero when every save was restored.
    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }
}

impl DrawingContext for RecordingContext {
    type Paint = String;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) -> EaselResult<()> {
        if width == 0 || height == 0 {
            return Err(EaselError::Context(
                easel_canvas2d::Canvas2dError::InvalidDimensions { width, height },
            ));
        }
        self.width = width;
        self.height = height;
        self.state = RecordedState::default();
        self.state_stack.clear();
        self.pixels = vec![0; (width as usize) * (height as usize) * 4];
        self.commands.push(Command::Resize { width, height });
        Ok(())
    }

    fn save(&mut self) {
        self.state_stack.push(self.state.clone());
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
        self.commands.push(Command::Restore);
    }

    fn fill_paint(&self) -> String {
        self.state.fill.clone()
    }

    fn set_fill_paint(&mut self, paint: String) {
        self.commands.push(Command::SetFillPaint(paint.clone()));
        self.state.fill = paint;
    }

    fn stroke_paint(&self) -> String {
        self.state.stroke.clone()
    }

    fn set_stroke_paint(&mut self, paint: String) {
        self.commands.push(Command::SetStrokePaint(paint.clone()));
        self.state.stroke = paint;
    }

    fn line_width(&self) -> f32 {
        self.state.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(Command::SetLineWidth(width));
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(Command::SetGlobalAlpha(alpha));
        if (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    fn composite_operation(&self) -> CompositeOperation {
        self.state.composite
    }

    fn set_composite_operation(&mut self, op: CompositeOperation) {
        self.commands.push(Command::SetCompositeOperation(op));
        self.state.composite = op;
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(Command::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(Command::Rotate(angle));
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo { x, y });
    }

    fn rect(&mut self, rect: &Rect) {
        self.commands.push(Command::Rect(*rect));
    }

    fn arc(&mut self, params: &ArcParams) {
        self.commands.push(Command::Arc(*params));
    }

    fn ellipse(&mut self, params: &EllipseParams) {
        self.commands.push(Command::Ellipse(*params));
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }

    fn fill_rect(&mut self, rect: &Rect) {
        self.commands.push(Command::FillRect(*rect));
    }

    fn clear_rect(&mut self, rect: &Rect) {
        self.commands.push(Command::ClearRect(*rect));
    }

    fn draw_image(&mut self, image: &Image, dest: &Rect) {
        self.commands.push(Command::DrawImage {
            width: image.width(),
            height: image.height(),
            dest: *dest,
        });
    }

    fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for row in 0..height as i32 {
            let sy = y + row;
            if sy < 0 || sy >= self.height as i32 {
                continue;
            }
            for col in 0..width as i32 {
                let sx = x + col;
                if sx < 0 || sx >= self.width as i32 {
                    continue;
                }
                let src = (sy as usize * self.width as usize + sx as usize) * 4;
                let dst = (row as usize * width as usize + col as usize) * 4;
                data[dst..dst + 4].copy_from_slice(&self.pixels[src..src + 4]);
            }
        }
        data
    }

    fn put_image_data(&mut self, data: &[u8], width: u32, height: u32, dx: i32, dy: i32) {
        self.commands.push(Command::PutImageData {
            width,
            height,
            dx,
            dy,
        });
        if data.len() < (width as usize) * (height as usize) * 4 {
            return;
        }
        for row in 0..height as i32 {
            let ty = dy + row;
            if ty < 0 || ty >= self.height as i32 {
                continue;
            }
            for col in 0..width as i32 {
                let tx = dx + col;
                if tx < 0 || tx >= self.width as i32 {
                    continue;
                }
                let src = (row as usize * width as usize + col as usize) * 4;
                let dst = (ty as usize * self.width as usize + tx as usize) * 4;
                self.pixels[dst..dst + 4].copy_from_slice(&data[src..src + 4]);
            }
        }
    }

    fn encode(&self, format: ImageFormat, _quality: f32) -> EaselResult<Vec<u8>> {
        Err(EaselError::Encode(format!(
            "recording context cannot produce {} output",
            format.mime_type()
        )))
    }
}
