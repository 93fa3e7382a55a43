//! Fit / fill placement of an image inside a target box.

use crate::geometry::{Anchors, Margin, Rect, Vector2};

/// Aspect comparisons closer to 1 than this count as an exact match.
const ASPECT_EPSILON: f32 = 1e-6;

/// Options for [`Surface::fill_image_fit_or_fill`](crate::Surface::fill_image_fit_or_fill).
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Cover the box (`true`) or letterbox inside it (`false`).
    pub fill: bool,
    /// Height over width. Defaults to the image's own aspect ratio.
    pub aspect: Option<f32>,
    pub anchors: Anchors,
    pub offset: Vector2,
    pub margin: Margin,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            fill: true,
            aspect: None,
            anchors: Anchors::default(),
            offset: Vector2::ZERO,
            margin: Margin::default(),
        }
    }
}

/// Compute where an image with `aspect` (height / width) lands inside a
/// `width` x `height` box.
///
/// Returns `None` when the aspect is not a positive finite number or the box
/// has no area left after margins.
pub fn solve_placement(aspect: f32, width: f32, height: f32, options: &FitOptions) -> Option<Rect> {
    let edges = options.margin.resolve();
    let max_width = width - edges.left - edges.right;
    let max_height = height - edges.top - edges.bottom;
    if !(aspect.is_finite() && aspect > 0.0) || max_width <= 0.0 || max_height <= 0.0 {
        return None;
    }

    let x = options.offset.x + edges.left;
    let y = options.offset.y + edges.top;
    let comparison = aspect / (max_height / max_width);

    let placed = if (comparison - 1.0).abs() <= ASPECT_EPSILON {
        Rect::new(x, y, max_width, max_height)
    } else if (comparison > 1.0) == options.fill {
        // Image is taller (fill) or wider (fit) than the box: width is the constraint
        let h = max_width * aspect;
        Rect::new(x, y + options.anchors.y.lead(max_height - h), max_width, h)
    } else {
        let w = max_height / aspect;
        Rect::new(x + options.anchors.x.lead(max_width - w), y, w, max_height)
    };
    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Edges, HorizontalAnchor, VerticalAnchor};
    use rstest::rstest;

    fn fit() -> FitOptions {
        FitOptions {
            fill: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_matching_aspect_fills_box() {
        let placed = solve_placement(0.5, 200.0, 100.0, &FitOptions::default()).unwrap();
        assert_eq!(placed, Rect::new(0.0, 0.0, 200.0, 100.0));
        let placed = solve_placement(0.5, 200.0, 100.0, &fit()).unwrap();
        assert_eq!(placed, Rect::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_fit_tall_image_centered() {
        // 1:2 (w:h) image into a square box: constrained by height
        let placed = solve_placement(2.0, 100.0, 100.0, &fit()).unwrap();
        assert_eq!(placed, Rect::new(25.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn test_fill_tall_image_overflows_vertically() {
        let placed = solve_placement(2.0, 100.0, 100.0, &FitOptions::default()).unwrap();
        assert_eq!(placed, Rect::new(0.0, -50.0, 100.0, 200.0));
    }

    #[rstest]
    #[case(VerticalAnchor::Top, 0.0)]
    #[case(VerticalAnchor::Center, 25.0)]
    #[case(VerticalAnchor::Bottom, 50.0)]
    fn test_fit_wide_image_vertical_anchor(#[case] anchor: VerticalAnchor, #[case] y: f32) {
        let options = FitOptions {
            fill: false,
            anchors: Anchors::new(HorizontalAnchor::Center, anchor),
            ..Default::default()
        };
        let placed = solve_placement(0.5, 100.0, 100.0, &options).unwrap();
        assert_eq!(placed, Rect::new(0.0, y, 100.0, 50.0));
    }

    #[rstest]
    #[case(HorizontalAnchor::Left, 0.0)]
    #[case(HorizontalAnchor::Center, -50.0)]
    #[case(HorizontalAnchor::Right, -100.0)]
    fn test_fill_wide_image_horizontal_anchor(#[case] anchor: HorizontalAnchor, #[case] x: f32) {
        let options = FitOptions {
            anchors: Anchors::new(anchor, VerticalAnchor::Center),
            ..Default::default()
        };
        let placed = solve_placement(0.5, 100.0, 100.0, &options).unwrap();
        assert_eq!(placed, Rect::new(x, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_margin_and_offset() {
        let options = FitOptions {
            fill: false,
            offset: Vector2::new(5.0, 7.0),
            margin: Margin::Edges(Edges {
                top: 10.0,
                left: 20.0,
                right: 0.0,
                bottom: 10.0,
            }),
            ..Default::default()
        };
        // Box left after margins is 80 x 80
        let placed = solve_placement(1.0, 100.0, 100.0, &options).unwrap();
        assert_eq!(placed, Rect::new(25.0, 17.0, 80.0, 80.0));
    }

    #[rstest]
    #[case(0.1)]
    #[case(0.37)]
    #[case(0.75)]
    #[case(1.3)]
    #[case(4.0)]
    fn test_fit_inside_and_fill_covers(#[case] aspect: f32) {
        let target = Rect::new(0.0, 0.0, 160.0, 90.0);
        let fitted = solve_placement(aspect, 160.0, 90.0, &fit()).unwrap();
        assert!(target.contains_rect(&fitted, 1e-3), "{fitted:?}");

        let filled = solve_placement(aspect, 160.0, 90.0, &FitOptions::default()).unwrap();
        assert!(filled.contains_rect(&target, 1e-3), "{filled:?}");
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f32::INFINITY)]
    #[case(f32::NAN)]
    fn test_invalid_aspect(#[case] aspect: f32) {
        assert_eq!(solve_placement(aspect, 100.0, 100.0, &fit()), None);
    }

    #[test]
    fn test_margin_consumes_box() {
        let options = FitOptions {
            margin: Margin::Uniform(50.0),
            ..Default::default()
        };
        assert_eq!(solve_placement(1.0, 100.0, 100.0, &options), None);
    }
}
