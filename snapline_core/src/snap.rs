// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap resolution.

use kurbo::Point;

use crate::config::{GuideVariant, SnapPolicy};
use crate::guide::{Guide, GuideOrientation};

/// Moves `candidate` onto the qualifying guides in `guides`.
///
/// Horizontal guides replace `y`, vertical guides replace `x`. In the
/// [`GuideVariant::Full`] rule set only center and text-alignment guides
/// qualify; edge guides are hints. An axis with no qualifying guide is left
/// untouched, so an empty list returns `candidate` unchanged.
#[must_use]
pub fn snap_point(
    candidate: Point,
    guides: &[Guide],
    variant: GuideVariant,
    policy: SnapPolicy,
) -> Point {
    let x = pick(guides, GuideOrientation::Vertical, candidate.x, variant, policy);
    let y = pick(guides, GuideOrientation::Horizontal, candidate.y, variant, policy);
    Point::new(x.unwrap_or(candidate.x), y.unwrap_or(candidate.y))
}

fn pick(
    guides: &[Guide],
    orientation: GuideOrientation,
    coord: f64,
    variant: GuideVariant,
    policy: SnapPolicy,
) -> Option<f64> {
    let mut qualifying = guides.iter().filter(|g| {
        g.orientation == orientation
            && match variant {
                GuideVariant::Simple => true,
                GuideVariant::Full => !g.kind.is_edge(),
            }
    });
    let chosen = match policy {
        SnapPolicy::FirstMatch => qualifying.next(),
        SnapPolicy::Nearest => qualifying.fold(None, |best: Option<&Guide>, g| match best {
            Some(b) if (b.position - coord).abs() <= (g.position - coord).abs() => Some(b),
            _ => Some(g),
        }),
    };
    chosen.map(|g| g.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::GuideKind;

    const FULL: GuideVariant = GuideVariant::Full;
    const FIRST: SnapPolicy = SnapPolicy::FirstMatch;

    #[test]
    fn empty_guides_leave_point_unchanged() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(snap_point(p, &[], FULL, FIRST), p);
    }

    #[test]
    fn each_axis_uses_its_own_orientation() {
        let guides = [
            Guide::horizontal(300.0, GuideKind::ImageCenter),
            Guide::vertical(150.0, GuideKind::TextAlignment),
        ];
        let snapped = snap_point(Point::new(145.0, 290.0), &guides, FULL, FIRST);
        assert_eq!(snapped, Point::new(150.0, 300.0));
    }

    #[test]
    fn first_match_ignores_distance() {
        let guides = [
            Guide::vertical(100.0, GuideKind::TextAlignment),
            Guide::vertical(120.0, GuideKind::TextAlignment),
        ];
        let snapped = snap_point(Point::new(119.0, 0.0), &guides, FULL, FIRST);
        assert_eq!(snapped.x, 100.0);
    }

    #[test]
    fn nearest_prefers_closest_then_earliest() {
        let guides = [
            Guide::vertical(100.0, GuideKind::TextAlignment),
            Guide::vertical(120.0, GuideKind::TextAlignment),
            Guide::vertical(118.0, GuideKind::TextAlignment),
        ];
        let nearest = SnapPolicy::Nearest;
        assert_eq!(snap_point(Point::new(119.0, 0.0), &guides, FULL, nearest).x, 120.0);
        assert_eq!(snap_point(Point::new(105.0, 0.0), &guides, FULL, nearest).x, 100.0);
    }

    #[test]
    fn full_variant_skips_edge_guides() {
        let guides = [
            Guide::vertical(240.0, GuideKind::TextEdge),
            Guide::horizontal(20.0, GuideKind::ImageEdge),
        ];
        let p = Point::new(233.0, 14.0);
        assert_eq!(snap_point(p, &guides, FULL, FIRST), p);
        assert_eq!(
            snap_point(p, &guides, GuideVariant::Simple, FIRST),
            Point::new(240.0, 20.0)
        );
    }

    #[test]
    fn snapping_is_idempotent() {
        let guides = [
            Guide::vertical(240.0, GuideKind::TextEdge),
            Guide::vertical(200.0, GuideKind::ImageCenter),
            Guide::horizontal(185.0, GuideKind::TextAlignment),
            Guide::horizontal(190.0, GuideKind::TextAlignment),
        ];
        for policy in [SnapPolicy::FirstMatch, SnapPolicy::Nearest] {
            for variant in [GuideVariant::Simple, GuideVariant::Full] {
                for p in [Point::new(0.0, 0.0), Point::new(205.0, 188.0), Point::new(-1e6, 1e6)] {
                    let once = snap_point(p, &guides, variant, policy);
                    let twice = snap_point(once, &guides, variant, policy);
                    assert_eq!(once, twice, "{variant:?} {policy:?} {p:?}");
                }
            }
        }
    }
}
