//! Integration tests for easel-rs.

use easel_rs::{
    layout_tiles, Anchors, AspectMode, Canvas2dContext, CompositeOperation, CornerRadii,
    Diagnostic, DrawingContext, FillStyle, FitOptions, HorizontalAnchor, Image, PatternOptions,
    PatternRepeat, PolygonOptions, PolylineOptions, RecordingContext, Rect, RectOptions, Region,
    RoundedRectOptions, StaggerAxis, StrokeSettings, StyleSettings, Surface, SurfaceConfig,
    Vector2, VerticalAnchor,
};
use rstest::rstest;
use std::f32::consts::PI;

fn raster(width: u32, height: u32) -> Surface<Canvas2dContext> {
    Surface::create(&SurfaceConfig { width, height }).unwrap()
}

fn red() -> FillStyle {
    FillStyle::rgba8(255, 0, 0, 255)
}

fn pixel(surface: &Surface<Canvas2dContext>, x: i32, y: i32) -> [u8; 4] {
    let data = surface.context().get_image_data(x, y, 1, 1);
    [data[0], data[1], data[2], data[3]]
}

/// Fill the whole surface and check state is untouched afterwards.
#[test]
fn test_fill_region_defaults() {
    let mut surface = raster(100, 100);
    surface.fill_region(&Region::default(), &StyleSettings::default());

    let data = surface.context().get_image_data(0, 0, 100, 100);
    assert!(data.chunks(4).all(|px| px == [0, 0, 0, 255]));

    let ctx = surface.context();
    assert_eq!(DrawingContext::global_alpha(ctx), 1.0);
    assert_eq!(ctx.composite_operation(), CompositeOperation::SourceOver);
    assert_eq!(ctx.fill_paint(), &FillStyle::default());
}

#[rstest]
#[case(0.0)]
#[case(0.25)]
#[case(1.0)]
fn test_state_restored_after_draw(#[case] alpha: f32) {
    let mut surface = raster(20, 20);
    surface.set_alpha(0.6).set_composite_operation("MULTIPLY");

    let settings = StyleSettings::new()
        .with_fill(red())
        .with_stroke(StrokeSettings::new(4.0, red()))
        .with_alpha(alpha)
        .with_composite("REMOVE");
    surface
        .rect(&RectOptions::default(), &settings)
        .fill_region(&Region::new(0.0, 0.0, 5.0, 5.0), &settings);

    let ctx = surface.context();
    assert_eq!(DrawingContext::global_alpha(ctx), 0.6);
    assert_eq!(ctx.composite_operation(), CompositeOperation::Multiply);
    assert_eq!(DrawingContext::line_width(ctx), 1.0);
    assert_eq!(ctx.fill_paint(), &FillStyle::default());
    assert!(surface.diagnostics().is_empty());
}

#[test]
fn test_chroma_key_red_removed_blue_kept() {
    let mut surface = raster(16, 16);
    surface
        .fill_region(&Region::default(), &StyleSettings::new().with_fill(red()))
        .chroma_key_remove("#ff0000", 0.01);
    let data = surface.context().get_image_data(0, 0, 16, 16);
    assert!(data.chunks(4).all(|px| px[3] == 0));

    let mut surface = raster(16, 16);
    surface
        .fill_region(
            &Region::default(),
            &StyleSettings::new().with_fill(FillStyle::rgba8(0, 0, 255, 255)),
        )
        .chroma_key_remove("#ff0000", 0.01);
    let data = surface.context().get_image_data(0, 0, 16, 16);
    assert!(data.chunks(4).all(|px| px[3] == 255));
}

#[test]
fn test_sharp_rounded_rectangle_matches_rect() {
    let mut rounded = raster(40, 40);
    rounded.rounded_rectangle(
        &RoundedRectOptions {
            offset: Vector2::new(5.0, 8.0),
            width: Some(20.0),
            height: Some(25.0),
            radius: CornerRadii::Uniform(0.0),
            fill: true,
            ..Default::default()
        },
        &StyleSettings::default(),
    );

    let mut plain = raster(40, 40);
    plain.rect(
        &RectOptions {
            offset: Vector2::new(5.0, 8.0),
            width: Some(20.0),
            height: Some(25.0),
            fill: true,
            ..Default::default()
        },
        &StyleSettings::default(),
    );

    assert_eq!(
        rounded.context().get_image_data(0, 0, 40, 40),
        plain.context().get_image_data(0, 0, 40, 40)
    );
}

#[test]
fn test_rounded_corners_are_cut() {
    let mut surface = raster(40, 40);
    surface.rounded_rectangle(
        &RoundedRectOptions {
            radius: CornerRadii::Uniform(10.0),
            ..Default::default()
        },
        &StyleSettings::new().with_fill(red()),
    );
    assert_eq!(pixel(&surface, 0, 0)[3], 0);
    assert_eq!(pixel(&surface, 39, 39)[3], 0);
    assert_eq!(pixel(&surface, 20, 20), [255, 0, 0, 255]);
    assert_eq!(pixel(&surface, 20, 0), [255, 0, 0, 255]);
}

#[rstest]
#[case(10, 10)]
#[case(30, 10)]
#[case(10, 30)]
#[case(7, 13)]
fn test_fit_stays_inside_and_fill_covers(#[case] image_width: u32, #[case] image_height: u32) {
    let image = Image::solid(image_width, image_height, [0, 255, 0, 255]);
    let target = Rect::new(0.0, 0.0, 64.0, 48.0);

    let mut fit = Surface::new(RecordingContext::new(64, 48));
    fit.fill_image(&image, AspectMode::Fit, &StyleSettings::default());
    let drawn = fit.context().image_draws();
    assert_eq!(drawn.len(), 1);
    assert!(target.contains_rect(&drawn[0], 1e-3), "{:?}", drawn[0]);

    let mut fill = Surface::new(RecordingContext::new(64, 48));
    fill.fill_image(&image, AspectMode::Fill, &StyleSettings::default());
    let drawn = fill.context().image_draws();
    assert_eq!(drawn.len(), 1);
    assert!(drawn[0].contains_rect(&target, 1e-3), "{:?}", drawn[0]);
}

#[test]
fn test_fit_letterbox_pixels() {
    let image = Image::solid(10, 10, [0, 255, 0, 255]);
    let mut surface = raster(100, 50);
    surface.fill_image_fit_or_fill(
        &image,
        &FitOptions {
            fill: false,
            anchors: Anchors::new(HorizontalAnchor::Left, VerticalAnchor::Top),
            ..Default::default()
        },
        &StyleSettings::default(),
    );
    assert_eq!(pixel(&surface, 25, 25), [0, 255, 0, 255]);
    assert_eq!(pixel(&surface, 75, 25)[3], 0);
}

#[rstest]
#[case(PatternRepeat::new(3.0, 3.0), 9)]
#[case(PatternRepeat::new(2.5, 1.5), 6)]
#[case(PatternRepeat::new(4.0, 0.9), 4)]
fn test_pattern_tile_count(#[case] repeat: PatternRepeat, #[case] expected: usize) {
    let mut surface = Surface::new(RecordingContext::new(90, 60));
    surface.fill_image_pattern(
        &Image::solid(8, 8, [0; 4]),
        &PatternOptions {
            repeat: Some(repeat),
            ..Default::default()
        },
        &StyleSettings::default(),
    );
    assert_eq!(surface.context().image_draws().len(), expected);
}

#[test]
fn test_unrotated_pattern_covers_surface() {
    let mut surface = raster(60, 60);
    surface.fill_image_pattern(
        &Image::solid(20, 20, [0, 0, 255, 255]),
        &PatternOptions::default(),
        &StyleSettings::default(),
    );
    let data = surface.context().get_image_data(0, 0, 60, 60);
    assert!(data.chunks(4).all(|px| px == [0, 0, 255, 255]));
}

#[rstest]
fn test_staggered_pattern_covers_surface(
    #[values(StaggerAxis::X, StaggerAxis::Y)] stagger: StaggerAxis,
) {
    let mut surface = raster(100, 100);
    surface.fill_image_pattern(
        &Image::solid(50, 50, [0, 0, 255, 255]),
        &PatternOptions {
            stagger: Some(stagger),
            ..Default::default()
        },
        &StyleSettings::default(),
    );
    let data = surface.context().get_image_data(0, 0, 100, 100);
    let transparent = data.chunks(4).filter(|px| px[3] == 0).count();
    assert_eq!(transparent, 0, "stagger {stagger:?}");
}

/// Every point of the surface, mapped into the rotated pattern frame, lies in a tile.
#[rstest]
#[case(120.0, 80.0, None)]
#[case(1000.0, 10.0, Some(PatternRepeat::new(3.3, 2.7)))]
#[case(10.0, 1000.0, Some(PatternRepeat::new(2.7, 3.3)))]
fn test_rotated_pattern_covers_surface(
    #[case] width: f32,
    #[case] height: f32,
    #[case] repeat: Option<PatternRepeat>,
    #[values(0.0, 0.3, 0.5, PI / 4.0, PI / 2.0, 2.0, PI, 4.5, 2.0 * PI - 0.1)] rotation: f32,
) {
    let horizontal = [HorizontalAnchor::Left, HorizontalAnchor::Center, HorizontalAnchor::Right];
    let vertical = [VerticalAnchor::Top, VerticalAnchor::Center, VerticalAnchor::Bottom];
    for stagger in [None, Some(StaggerAxis::X), Some(StaggerAxis::Y)] {
        for ax in horizontal {
            for ay in vertical {
                let options = PatternOptions {
                    repeat,
                    rotation,
                    stagger,
                    anchors: Anchors::new(ax, ay),
                    ..Default::default()
                };
                let layout = layout_tiles(width, height, 17.0, 11.0, &options).unwrap();
                let (sin, cos) = rotation.sin_cos();

                for sy in 0..=8 {
                    for sx in 0..=8 {
                        let px = sx as f32 * width / 8.0 - width / 2.0;
                        let py = sy as f32 * height / 8.0 - height / 2.0;
                        // Inverse of translate(W/2, H/2) * rotate(r) * translate(-rw/2, -rh/2)
                        let qx = cos * px + sin * py + layout.rotated_width / 2.0;
                        let qy = -sin * px + cos * py + layout.rotated_height / 2.0;
                        let covered = layout.tiles().any(|t| {
                            qx >= t.x - 1e-2
                                && qx <= t.right() + 1e-2
                                && qy >= t.y - 1e-2
                                && qy <= t.bottom() + 1e-2
                        });
                        assert!(
                            covered,
                            "{width}x{height} rotation {rotation} stagger {stagger:?} \
                             anchors {ax:?}/{ay:?}: ({px}, {py}) uncovered"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_polygon_square_edge_length() {
    let mut surface = Surface::new(RecordingContext::new(100, 100));
    surface.polygon(
        &PolygonOptions {
            sides: 4,
            side_length: Some(10.0),
            stroke: true,
            ..Default::default()
        },
        &StyleSettings::default(),
    );
    let points: Vec<(f32, f32)> = surface
        .context()
        .commands()
        .iter()
        .filter_map(|c| match c {
            easel_rs::Command::MoveTo { x, y } | easel_rs::Command::LineTo { x, y } => {
                Some((*x, *y))
            }
            _ => None,
        })
        .collect();
    assert_eq!(points.len(), 4);
    for i in 0..4 {
        let (ax, ay) = points[i];
        let (bx, by) = points[(i + 1) % 4];
        assert!(((ax - bx).hypot(ay - by) - 10.0).abs() < 1e-4);
    }
    let cx = points.iter().map(|p| p.0).sum::<f32>() / 4.0;
    let cy = points.iter().map(|p| p.1).sum::<f32>() / 4.0;
    assert!((cx - 50.0).abs() < 1e-4 && (cy - 50.0).abs() < 1e-4);
}

#[test]
fn test_single_point_polyline_is_noop() {
    let mut surface = raster(10, 10);
    let before = surface.context().get_image_data(0, 0, 10, 10);
    surface.polyline(
        &[Vector2::new(0.0, 0.0)],
        &PolylineOptions {
            closed: true,
            fill: true,
            stroke: true,
        },
        &StyleSettings::default(),
    );
    assert_eq!(surface.context().get_image_data(0, 0, 10, 10), before);
    assert_eq!(surface.diagnostics(), &[Diagnostic::TooFewPoints(1)]);
}

#[test]
fn test_filled_polyline_triangle() {
    let mut surface = raster(40, 40);
    surface.polyline(
        &[(0.0, 0.0).into(), (40.0, 0.0).into(), (0.0, 40.0).into()],
        &PolylineOptions::default(),
        &StyleSettings::new().with_fill(red()),
    );
    assert_eq!(pixel(&surface, 5, 5), [255, 0, 0, 255]);
    assert_eq!(pixel(&surface, 35, 35)[3], 0);
}

#[test]
fn test_composite_alias_remove_erases() {
    let mut surface = raster(20, 20);
    surface
        .fill_region(&Region::default(), &StyleSettings::new().with_fill(red()))
        .fill_region(
            &Region::new(0.0, 0.0, 10.0, 20.0),
            &StyleSettings::new().with_composite("REMOVE"),
        );
    assert_eq!(pixel(&surface, 5, 10)[3], 0);
    assert_eq!(pixel(&surface, 15, 10), [255, 0, 0, 255]);
    assert_eq!(
        surface.context().composite_operation(),
        CompositeOperation::SourceOver
    );
}

#[test]
fn test_data_uri_round_trip() {
    let mut source = raster(8, 8);
    source.fill_region(&Region::default(), &StyleSettings::new().with_fill(red()));
    let uri = source.export_as_data_uri("image/png", 1.0).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));

    let mut target = raster(16, 16);
    futures::executor::block_on(target.load_from_data_uri(&uri)).unwrap();
    assert_eq!(pixel(&target, 8, 8), [255, 0, 0, 255]);
    assert_eq!(pixel(&target, 1, 14), [255, 0, 0, 255]);
}

#[test]
fn test_export_formats() {
    let mut surface = raster(8, 8);
    surface.fill_region(&Region::default(), &StyleSettings::new().with_fill(red()));
    let jpeg = surface.export_as_data_uri("image/jpeg", 0.8).unwrap();
    assert!(jpeg.starts_with("data:image/jpeg;base64,"));
    let fallback = surface.export_as_data_uri("image/tiff", 1.0).unwrap();
    assert!(fallback.starts_with("data:image/png;base64,"));
}

#[test]
fn test_trigger_download_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(easel_rs::DEFAULT_DOWNLOAD_NAME);
    let mut surface = raster(8, 8);
    surface
        .fill_region(&Region::default(), &StyleSettings::new().with_fill(red()))
        .trigger_download(easel_rs::DEFAULT_EXPORT_MIME, &path)
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);

    let decoded = Image::decode(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn test_snapshot_draws_onto_other_surface() {
    let mut source = raster(4, 4);
    source.fill_region(&Region::default(), &StyleSettings::new().with_fill(red()));
    let snapshot = source.snapshot();

    let mut target = raster(8, 8);
    target.fill_image(&snapshot, AspectMode::Stretch, &StyleSettings::default());
    assert_eq!(pixel(&target, 4, 4), [255, 0, 0, 255]);
}

#[test]
fn test_builder_background_and_resize() {
    let mut surface = Surface::builder()
        .width(12)
        .height(6)
        .background(FillStyle::rgba8(0, 0, 255, 255))
        .build()
        .unwrap();
    assert_eq!(pixel(&surface, 11, 5), [0, 0, 255, 255]);

    surface.resize(Some(20), None);
    assert_eq!((surface.width(), surface.height()), (20, 6));
    assert_eq!(pixel(&surface, 11, 5)[3], 0);
}
