//! Integration tests for easel-canvas2d.

use easel_canvas2d::{
    ArcParams, CanvasGradient, Canvas2dContext, CanvasImageDataRef, EllipseParams, FillStyle,
    RectParams,
};
use std::f32::consts::PI;

fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let idx = (y * width + x) * 4;
    [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
}

/// Test creating a canvas and drawing basic shapes.
#[test]
fn test_draw_rectangle() {
    let mut ctx = Canvas2dContext::new(200, 200).unwrap();

    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams::new(10.0, 10.0, 100.0, 100.0));

    let data = ctx.get_image_data(0, 0, 200, 200);
    assert_eq!(pixel(&data, 200, 50, 50), [255, 0, 0, 255]);
    assert_eq!(pixel(&data, 200, 150, 150), [0, 0, 0, 0]);
}

/// Test path operations.
#[test]
fn test_path_operations() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_fill_style("#00ff00").unwrap();
    ctx.begin_path();
    ctx.move_to(10.0, 10.0);
    ctx.line_to(90.0, 10.0);
    ctx.line_to(90.0, 90.0);
    ctx.line_to(10.0, 90.0);
    ctx.close_path();
    ctx.fill();

    let data = ctx.get_image_data(0, 0, 100, 100);
    assert_eq!(pixel(&data, 100, 50, 50), [0, 255, 0, 255]);
}

/// Test stroke operations.
#[test]
fn test_stroke_operations() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_stroke_style("#0000ff").unwrap();
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(10.0, 50.0);
    ctx.line_to(90.0, 50.0);
    ctx.stroke();

    let data = ctx.get_image_data(0, 0, 100, 100);
    let px = pixel(&data, 100, 50, 50);
    assert_eq!(&px[0..3], &[0, 0, 255]);
    assert_eq!(pixel(&data, 100, 50, 20)[3], 0);
}

/// Test save/restore state.
#[test]
fn test_save_restore_state() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_fill_style("#ff0000").unwrap();
    ctx.save();
    ctx.set_fill_style("#00ff00").unwrap();
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 50.0, 50.0));
    ctx.restore();
    ctx.fill_rect(&RectParams::new(50.0, 50.0, 50.0, 50.0));

    let data = ctx.get_image_data(0, 0, 100, 100);
    assert_eq!(pixel(&data, 100, 25, 25), [0, 255, 0, 255]);
    assert_eq!(pixel(&data, 100, 75, 75), [255, 0, 0, 255]);
}

/// Test transforms.
#[test]
fn test_transforms() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.translate(50.0, 50.0);
    ctx.rotate(PI / 4.0);
    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams::new(-10.0, -10.0, 20.0, 20.0));

    let data = ctx.get_image_data(0, 0, 100, 100);
    assert_eq!(pixel(&data, 100, 50, 50), [255, 0, 0, 255]);
    // The rotated square's corners are cut away
    assert_eq!(pixel(&data, 100, 41, 41)[3], 0);
    // but its diagonal reaches further along the axes
    assert_eq!(pixel(&data, 100, 50, 37), [255, 0, 0, 255]);
}

/// Test arc and ellipse fills.
#[test]
fn test_arc_and_ellipse_fill() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();
    ctx.set_fill_style("#000000").unwrap();
    ctx.begin_path();
    ctx.arc(&ArcParams {
        x: 25.0,
        y: 25.0,
        radius: 20.0,
        start_angle: 0.0,
        end_angle: 2.0 * PI,
        anticlockwise: false,
    });
    ctx.fill();

    ctx.begin_path();
    ctx.ellipse(&EllipseParams {
        x: 70.0,
        y: 70.0,
        radius_x: 25.0,
        radius_y: 10.0,
        rotation: 0.0,
        start_angle: 0.0,
        end_angle: 2.0 * PI,
        anticlockwise: false,
    });
    ctx.fill();

    let data = ctx.get_image_data(0, 0, 100, 100);
    assert_eq!(pixel(&data, 100, 25, 25)[3], 255);
    assert_eq!(pixel(&data, 100, 3, 3)[3], 0);
    assert_eq!(pixel(&data, 100, 90, 70)[3], 255);
    assert_eq!(pixel(&data, 100, 70, 85)[3], 0);
}

/// Test clearRect.
#[test]
fn test_clear_rect() {
    let mut ctx = Canvas2dContext::new(100, 100).unwrap();

    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 100.0, 100.0));
    ctx.clear_rect(&RectParams::new(25.0, 25.0, 50.0, 50.0));

    let data = ctx.get_image_data(0, 0, 100, 100);
    assert_eq!(pixel(&data, 100, 50, 50)[3], 0);
    assert_eq!(pixel(&data, 100, 10, 10), [255, 0, 0, 255]);
}

/// Test linear gradient fill.
#[test]
fn test_linear_gradient() {
    let mut ctx = Canvas2dContext::new(100, 10).unwrap();

    let mut gradient = CanvasGradient::new_linear(0.0, 0.0, 100.0, 0.0);
    gradient
        .add_color_stop(0.0, tiny_skia::Color::from_rgba8(255, 0, 0, 255))
        .add_color_stop(1.0, tiny_skia::Color::from_rgba8(0, 0, 255, 255));
    ctx.set_fill_paint(FillStyle::from(gradient));
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 100.0, 10.0));

    let data = ctx.get_image_data(0, 0, 100, 10);
    let left = pixel(&data, 100, 2, 5);
    let right = pixel(&data, 100, 97, 5);
    assert!(left[0] > 200 && left[2] < 50);
    assert!(right[2] > 200 && right[0] < 50);
}

/// Test the destination-out composite operation used for masking.
#[test]
fn test_destination_out_erases() {
    let mut ctx = Canvas2dContext::new(20, 20).unwrap();
    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 20.0, 20.0));

    assert!(ctx.set_global_composite_operation("destination-out"));
    ctx.set_fill_style("#000000").unwrap();
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 10.0, 20.0));

    let data = ctx.get_image_data(0, 0, 20, 20);
    assert_eq!(pixel(&data, 20, 5, 10)[3], 0);
    assert_eq!(pixel(&data, 20, 15, 10), [255, 0, 0, 255]);
}

/// Test drawing an image under a translation.
#[test]
fn test_draw_image_with_transform() {
    let mut ctx = Canvas2dContext::new(40, 40).unwrap();
    let blue = [0u8, 0, 255, 255].repeat(16);
    ctx.translate(20.0, 20.0);
    ctx.draw_image_data_scaled(
        &CanvasImageDataRef {
            data: &blue,
            width: 4,
            height: 4,
        },
        0.0,
        0.0,
        8.0,
        8.0,
    );

    let data = ctx.get_image_data(0, 0, 40, 40);
    assert_eq!(pixel(&data, 40, 24, 24), [0, 0, 255, 255]);
    assert_eq!(pixel(&data, 40, 10, 10)[3], 0);
}

/// Test PNG export round trip through the png decoder.
#[test]
fn test_png_export() {
    let mut ctx = Canvas2dContext::new(16, 8).unwrap();
    ctx.set_fill_style("#336699").unwrap();
    ctx.fill_rect(&RectParams::new(0.0, 0.0, 16.0, 8.0));

    let png_data = ctx.to_png().unwrap();
    assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let decoder = png::Decoder::new(std::io::Cursor::new(png_data));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (16, 8));
}
