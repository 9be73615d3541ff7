// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use snapline_text::{TextMeasurer, TextSize, TextStyle};

use crate::{
    Guide, GuideConfig, GuideEngine, GuideKind, GuideOrientation, GuideVariant, Overlay,
    OverlayId, TextAlignment,
};

/// Every text measures the same, which keeps box arithmetic readable.
#[derive(Debug)]
struct FixedMeasurer(TextSize);

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, _: &str, _: &TextStyle, _: f64, _: f64) -> TextSize {
        self.0
    }
}

#[derive(Debug)]
struct UnusedMeasurer;

impl TextMeasurer for UnusedMeasurer {
    fn measure(&self, text: &str, _: &TextStyle, _: f64, _: f64) -> TextSize {
        panic!("simple rule set measured {text:?}");
    }
}

const CANVAS: Size = Size::new(400.0, 600.0);
const BOX: FixedMeasurer = FixedMeasurer(TextSize::new(80.0, 30.0));

fn overlay(id: u64, x: f64, y: f64) -> Overlay {
    Overlay::new(OverlayId(id)).with_position((x, y))
}

fn of_kind(guides: &[Guide], kind: GuideKind, orientation: GuideOrientation) -> Vec<f64> {
    guides
        .iter()
        .filter(|g| g.kind == kind && g.orientation == orientation)
        .map(|g| g.position)
        .collect()
}

#[test]
fn vertical_center_guide_appears_only_within_threshold() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    for x in [170.0, 180.0, 180.5, 199.0, 200.0, 219.9, 220.0, 230.0] {
        let dragged = overlay(1, x, 450.0);
        let guides = engine.compute_guides(&dragged, CANVAS, &[], &BOX);
        let centers = of_kind(&guides, GuideKind::ImageCenter, GuideOrientation::Vertical);
        if (x - 200.0_f64).abs() < 20.0 {
            assert_eq!(centers, [200.0], "x = {x}");
        } else {
            assert!(centers.is_empty(), "x = {x}: {guides:?}");
        }
    }
}

#[test]
fn dragged_overlay_never_aligns_with_itself() {
    for variant in [GuideVariant::Simple, GuideVariant::Full] {
        let engine = GuideEngine::new(GuideConfig::coarse().with_variant(variant));
        let dragged = overlay(1, 120.0, 140.0);
        let stale = overlay(1, 121.0, 139.0);
        let guides = engine.compute_guides(&dragged, CANVAS, &[stale], &BOX);
        assert!(
            guides
                .iter()
                .all(|g| !matches!(g.kind, GuideKind::TextAlignment | GuideKind::TextEdge)),
            "{variant:?}: {guides:?}"
        );
    }
}

#[test]
fn anchor_near_top_margin_shows_one_edge_guide() {
    let dragged = overlay(1, 200.0, 10.0);

    let simple = GuideEngine::new(GuideConfig::coarse().with_variant(GuideVariant::Simple));
    let guides = simple.compute_guides(&dragged, CANVAS, &[], &UnusedMeasurer);
    assert_eq!(
        of_kind(&guides, GuideKind::ImageEdge, GuideOrientation::Horizontal),
        [20.0]
    );

    // Box spans y 0..20 here; only its bottom edge is within the threshold of y = 20.
    let full = GuideEngine::new(GuideConfig::coarse());
    let measurer = FixedMeasurer(TextSize::new(80.0, 20.0));
    let guides = full.compute_guides(&dragged, CANVAS, &[], &measurer);
    assert_eq!(
        of_kind(&guides, GuideKind::ImageEdge, GuideOrientation::Horizontal),
        [20.0]
    );
}

#[test]
fn sibling_center_alignment_guides_and_snaps() {
    let engine = GuideEngine::new(GuideConfig::fine());
    let sibling = overlay(2, 150.0, 400.0);
    let dragged = overlay(1, 145.0, 100.0);

    let guides = engine.compute_guides(&dragged, CANVAS, &[dragged.clone(), sibling], &BOX);
    assert_eq!(
        guides.as_slice(),
        [Guide::vertical(150.0, GuideKind::TextAlignment)]
    );
    assert_eq!(
        engine.snap(dragged.position, &guides),
        Point::new(150.0, 100.0)
    );
}

#[test]
fn side_by_side_boxes_emit_text_edge_that_does_not_snap() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    // Leading box spans x 150..230; the trailing sibling spans x 240..320.
    let dragged = overlay(1, 150.0, 200.0).with_alignment(TextAlignment::Leading);
    let sibling = overlay(2, 320.0, 200.0).with_alignment(TextAlignment::Trailing);

    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    assert_eq!(
        guides.as_slice(),
        [
            Guide::horizontal(200.0, GuideKind::TextAlignment),
            Guide::horizontal(185.0, GuideKind::TextEdge),
            Guide::horizontal(215.0, GuideKind::TextEdge),
            Guide::vertical(240.0, GuideKind::TextEdge),
        ]
    );

    let snapped = engine.snap(Point::new(150.0, 203.0), &guides);
    assert_eq!(snapped, Point::new(150.0, 200.0));
}

#[test]
fn stacked_boxes_emit_horizontal_text_edges() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    // Dragged box spans y 135..165; sibling spans y 170..200.
    let dragged = overlay(1, 60.0, 150.0);
    let sibling = overlay(2, 300.0, 185.0);

    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    // The loose center hint (150 is within 30 of 170) repeats the same line.
    assert_eq!(
        of_kind(&guides, GuideKind::TextEdge, GuideOrientation::Horizontal),
        [170.0, 170.0]
    );
}

#[test]
fn distance_equal_to_threshold_is_inactive() {
    let engine = GuideEngine::new(GuideConfig::fine().with_variant(GuideVariant::Simple));
    let dragged = overlay(1, 210.0, 310.0);
    let guides = engine.compute_guides(&dragged, CANVAS, &[], &UnusedMeasurer);
    assert!(guides.is_empty(), "{guides:?}");
}

#[test]
fn duplicate_guides_are_kept_in_sibling_order() {
    let engine = GuideEngine::new(GuideConfig::coarse().with_variant(GuideVariant::Simple));
    let dragged = overlay(1, 95.0, 500.0);
    let siblings = [overlay(2, 100.0, 50.0), overlay(3, 100.0, 60.0)];
    let guides = engine.compute_guides(&dragged, CANVAS, &siblings, &UnusedMeasurer);
    assert_eq!(
        guides.as_slice(),
        [
            Guide::vertical(100.0, GuideKind::TextAlignment),
            Guide::vertical(100.0, GuideKind::TextAlignment),
        ]
    );
}

#[test]
fn canvas_guides_precede_sibling_guides() {
    let engine = GuideEngine::new(GuideConfig::coarse().with_variant(GuideVariant::Simple));
    let dragged = overlay(1, 25.0, 300.0);
    let siblings = [overlay(2, 30.0, 40.0)];
    let guides = engine.compute_guides(&dragged, CANVAS, &siblings, &UnusedMeasurer);
    assert_eq!(
        guides.as_slice(),
        [
            Guide::horizontal(300.0, GuideKind::ImageCenter),
            Guide::vertical(20.0, GuideKind::ImageEdge),
            Guide::vertical(30.0, GuideKind::TextAlignment),
        ]
    );
}

#[test]
fn box_edge_near_far_margin_shows_edge_guide() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    // Trailing box spans x 305..385; the right margin sits at x = 380.
    let dragged = overlay(1, 385.0, 300.0).with_alignment(TextAlignment::Trailing);
    let guides = engine.compute_guides(&dragged, CANVAS, &[], &BOX);
    assert_eq!(
        guides.as_slice(),
        [
            Guide::horizontal(300.0, GuideKind::ImageCenter),
            Guide::vertical(380.0, GuideKind::ImageEdge),
        ]
    );
}

#[test]
fn degenerate_canvas_only_skips_canvas_guides() {
    let engine = GuideEngine::new(GuideConfig::coarse().with_variant(GuideVariant::Simple));
    let dragged = overlay(1, 0.0, 5.0);
    let siblings = vec![overlay(2, 3.0, 500.0)];
    let guides = engine.compute_guides(&dragged, Size::ZERO, &siblings, &UnusedMeasurer);
    assert_eq!(
        guides.as_slice(),
        [Guide::vertical(3.0, GuideKind::TextAlignment)]
    );

    let empty = engine.compute_guides(&dragged, Size::new(-10.0, f64::NAN), &[], &UnusedMeasurer);
    assert!(empty.is_empty(), "{empty:?}");
}

#[test]
fn edge_guides_never_move_snap_in_full_variant() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    let guides = [
        Guide::vertical(20.0, GuideKind::ImageEdge),
        Guide::horizontal(185.0, GuideKind::TextEdge),
        Guide::vertical(240.0, GuideKind::TextEdge),
    ];
    let p = Point::new(31.0, 170.0);
    assert_eq!(engine.snap(p, &guides), p);
}

#[test]
fn left_edge_against_sibling_right_edge() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    // Leading box spans x 330..410; the trailing sibling spans x 240..320.
    let dragged = overlay(1, 330.0, 500.0).with_alignment(TextAlignment::Leading);
    let sibling = overlay(2, 320.0, 100.0).with_alignment(TextAlignment::Trailing);

    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    // Strict left-vs-right match, then the loose center hint on the same line.
    assert_eq!(
        guides.as_slice(),
        [
            Guide::vertical(320.0, GuideKind::TextAlignment),
            Guide::vertical(320.0, GuideKind::TextEdge),
            Guide::vertical(320.0, GuideKind::TextEdge),
        ]
    );

    let edges_only: Vec<Guide> = guides
        .iter()
        .copied()
        .filter(|g| g.kind == GuideKind::TextEdge)
        .collect();
    assert_eq!(engine.snap(dragged.position, &edges_only), dragged.position);
    assert_eq!(
        engine.snap(dragged.position, &guides),
        Point::new(320.0, 500.0)
    );
}

#[test]
fn top_edge_against_sibling_bottom_edge() {
    let engine = GuideEngine::new(GuideConfig::coarse());
    // Dragged box spans x 20..100, y 213..243; sibling spans y 185..215.
    let dragged = overlay(1, 60.0, 228.0);
    let sibling = overlay(2, 300.0, 200.0);

    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    assert_eq!(
        guides.as_slice(),
        [
            Guide::horizontal(215.0, GuideKind::TextEdge),
            Guide::horizontal(215.0, GuideKind::TextEdge),
            Guide::vertical(20.0, GuideKind::ImageEdge),
        ]
    );
    assert_eq!(engine.snap(dragged.position, &guides), dragged.position);
}

#[test]
fn vertical_loose_hints_track_sibling_left_and_right_edges() {
    let engine = GuideEngine::new(GuideConfig::coarse());

    // Center x 265 is 25 from the sibling's left edge at 240: loose only.
    let dragged = overlay(1, 265.0, 500.0);
    let sibling = overlay(2, 240.0, 100.0).with_alignment(TextAlignment::Leading);
    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    assert_eq!(
        guides.as_slice(),
        [Guide::vertical(240.0, GuideKind::TextEdge)]
    );
    assert_eq!(engine.snap(dragged.position, &guides), dragged.position);

    // Center x 345 is 25 from the sibling's right edge at 320; the box edge at
    // 345 is too far for the strict rule.
    let dragged = overlay(1, 345.0, 500.0).with_alignment(TextAlignment::Leading);
    let sibling = overlay(2, 320.0, 100.0).with_alignment(TextAlignment::Trailing);
    let guides = engine.compute_guides(&dragged, CANVAS, &[sibling], &BOX);
    assert_eq!(
        guides.as_slice(),
        [Guide::vertical(320.0, GuideKind::TextEdge)]
    );
    assert_eq!(engine.snap(dragged.position, &guides), dragged.position);
}
