// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide computation.
//!
//! The engine is a pure function of its inputs: the dragged overlay (already at
//! its prospective position), the canvas size, the sibling overlays and, for the
//! full rule set, a text measurer. It keeps no state between calls.
//!
//! Guides are appended in a fixed order:
//! 1. canvas center (vertical, then horizontal),
//! 2. canvas margins around the anchor point (simple rule set only),
//! 3. per sibling, in list order: center alignment, then box edges (full only),
//! 4. canvas margins around the dragged box (full rule set only).
//!
//! Nothing is sorted or deduplicated; identical guides simply overdraw.

use kurbo::{Point, Rect, Size};
use snapline_text::TextMeasurer;
use tracing::trace;

use crate::config::{GuideConfig, GuideVariant};
use crate::guide::{Guide, GuideKind, GuideList};
use crate::overlay::Overlay;
use crate::snap::snap_point;
use crate::text_box::text_box;

/// Computes alignment guides and snaps positions onto them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GuideEngine {
    config: GuideConfig,
}

fn near(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() < threshold
}

impl GuideEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: GuideConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Computes the active guides for `dragged` on a canvas of `canvas` size.
    ///
    /// `siblings` may include `dragged` itself; entries with the same id are
    /// skipped. `measurer` is only consulted by the full rule set. Canvas axes
    /// whose extent is not positive produce no canvas guides.
    pub fn compute_guides(
        &self,
        dragged: &Overlay,
        canvas: Size,
        siblings: &[Overlay],
        measurer: &dyn TextMeasurer,
    ) -> GuideList {
        let mut guides = GuideList::new();
        let anchor = dragged.position;

        self.push_canvas_center(anchor, canvas, &mut guides);
        if self.config.variant == GuideVariant::Simple {
            self.push_anchor_margins(anchor, canvas, &mut guides);
        }

        let dragged_box = match self.config.variant {
            GuideVariant::Simple => None,
            GuideVariant::Full => Some(text_box(dragged, canvas, measurer)),
        };

        for sibling in siblings.iter().filter(|s| s.id() != dragged.id()) {
            self.push_center_alignment(anchor, sibling.position, &mut guides);
            if let Some(dragged_box) = dragged_box {
                let sibling_box = text_box(sibling, canvas, measurer);
                self.push_edge_alignment(anchor, dragged_box, sibling_box, &mut guides);
            }
        }

        if let Some(dragged_box) = dragged_box {
            self.push_box_margins(dragged_box, canvas, &mut guides);
        }

        trace!(
            overlay = dragged.id().0,
            x = anchor.x,
            y = anchor.y,
            siblings = siblings.len(),
            guides = guides.len(),
            "computed alignment guides"
        );
        guides
    }

    /// Snaps `candidate` onto `guides` using this engine's rule set and policy.
    #[must_use]
    pub fn snap(&self, candidate: Point, guides: &[Guide]) -> Point {
        snap_point(
            candidate,
            guides,
            self.config.variant,
            self.config.snap_policy,
        )
    }

    fn push_canvas_center(&self, anchor: Point, canvas: Size, guides: &mut GuideList) {
        let t = self.config.threshold;
        if canvas.width > 0.0 {
            let center_x = 0.5 * canvas.width;
            if near(anchor.x, center_x, t) {
                guides.push(Guide::vertical(center_x, GuideKind::ImageCenter));
            }
        }
        if canvas.height > 0.0 {
            let center_y = 0.5 * canvas.height;
            if near(anchor.y, center_y, t) {
                guides.push(Guide::horizontal(center_y, GuideKind::ImageCenter));
            }
        }
    }

    fn push_anchor_margins(&self, anchor: Point, canvas: Size, guides: &mut GuideList) {
        let t = self.config.threshold;
        if let Some([left, right]) = self.margins(canvas.width) {
            for x in [left, right] {
                if near(anchor.x, x, t) {
                    guides.push(Guide::vertical(x, GuideKind::ImageEdge));
                }
            }
        }
        if let Some([top, bottom]) = self.margins(canvas.height) {
            for y in [top, bottom] {
                if near(anchor.y, y, t) {
                    guides.push(Guide::horizontal(y, GuideKind::ImageEdge));
                }
            }
        }
    }

    fn push_center_alignment(&self, anchor: Point, sibling: Point, guides: &mut GuideList) {
        let t = self.config.threshold;
        if near(anchor.y, sibling.y, t) {
            guides.push(Guide::horizontal(sibling.y, GuideKind::TextAlignment));
        }
        if near(anchor.x, sibling.x, t) {
            guides.push(Guide::vertical(sibling.x, GuideKind::TextAlignment));
        }
    }

    fn push_edge_alignment(
        &self,
        anchor: Point,
        dragged: Rect,
        sibling: Rect,
        guides: &mut GuideList,
    ) {
        let t = self.config.threshold;
        let loose = self.config.loose_threshold();

        // Stacking: our bottom against their top, our top against their bottom.
        if near(dragged.y1, sibling.y0, t) {
            guides.push(Guide::horizontal(sibling.y0, GuideKind::TextEdge));
        }
        if near(dragged.y0, sibling.y1, t) {
            guides.push(Guide::horizontal(sibling.y1, GuideKind::TextEdge));
        }
        if near(anchor.y, sibling.y0, loose) {
            guides.push(Guide::horizontal(sibling.y0, GuideKind::TextEdge));
        }
        if near(anchor.y, sibling.y1, loose) {
            guides.push(Guide::horizontal(sibling.y1, GuideKind::TextEdge));
        }

        // Side by side: our right against their left, our left against their right.
        if near(dragged.x1, sibling.x0, t) {
            guides.push(Guide::vertical(sibling.x0, GuideKind::TextEdge));
        }
        if near(dragged.x0, sibling.x1, t) {
            guides.push(Guide::vertical(sibling.x1, GuideKind::TextEdge));
        }
        if near(anchor.x, sibling.x0, loose) {
            guides.push(Guide::vertical(sibling.x0, GuideKind::TextEdge));
        }
        if near(anchor.x, sibling.x1, loose) {
            guides.push(Guide::vertical(sibling.x1, GuideKind::TextEdge));
        }
    }

    fn push_box_margins(&self, dragged: Rect, canvas: Size, guides: &mut GuideList) {
        let t = self.config.threshold;
        if let Some(margins) = self.margins(canvas.width) {
            for edge in [dragged.x0, dragged.x1] {
                for x in margins {
                    if near(edge, x, t) {
                        guides.push(Guide::vertical(x, GuideKind::ImageEdge));
                    }
                }
            }
        }
        if let Some(margins) = self.margins(canvas.height) {
            for edge in [dragged.y0, dragged.y1] {
                for y in margins {
                    if near(edge, y, t) {
                        guides.push(Guide::horizontal(y, GuideKind::ImageEdge));
                    }
                }
            }
        }
    }

    /// The near and far margin lines along an axis of length `extent`.
    fn margins(&self, extent: f64) -> Option<[f64; 2]> {
        (extent > 0.0).then(|| [self.config.margin, extent - self.config.margin])
    }
}
