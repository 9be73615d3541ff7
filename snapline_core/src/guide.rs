// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment guide values.
//!
//! Guides are derived, display-only values: the engine recomputes them from
//! scratch on every drag update and nothing ever mutates one in place.

use kurbo::{Line, Size};
use smallvec::SmallVec;

/// What a guide aligns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuideKind {
    /// The horizontal or vertical center line of the canvas.
    ImageCenter,
    /// A margin line inset from the canvas edge.
    ImageEdge,
    /// Another overlay's center line.
    TextAlignment,
    /// Another overlay's bounding-box edge.
    TextEdge,
}

impl GuideKind {
    /// Edge guides are visual hints only; they never pull a snapped position in
    /// the full variant.
    #[must_use]
    pub fn is_edge(self) -> bool {
        matches!(self, Self::ImageEdge | Self::TextEdge)
    }
}

/// The direction a guide line runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuideOrientation {
    /// A horizontal line; its position is a y coordinate.
    Horizontal,
    /// A vertical line; its position is an x coordinate.
    Vertical,
}

/// A single active alignment guide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guide {
    /// Perpendicular offset: x for vertical guides, y for horizontal guides.
    pub position: f64,
    /// What the guide aligns to.
    pub kind: GuideKind,
    /// Line direction.
    pub orientation: GuideOrientation,
}

/// The guide list returned by the engine, in insertion order.
///
/// Most drags produce only a handful of guides, so they live inline.
pub type GuideList = SmallVec<[Guide; 8]>;

impl Guide {
    /// A horizontal guide at `y`.
    #[must_use]
    pub fn horizontal(y: f64, kind: GuideKind) -> Self {
        Self {
            position: y,
            kind,
            orientation: GuideOrientation::Horizontal,
        }
    }

    /// A vertical guide at `x`.
    #[must_use]
    pub fn vertical(x: f64, kind: GuideKind) -> Self {
        Self {
            position: x,
            kind,
            orientation: GuideOrientation::Vertical,
        }
    }

    /// The segment to draw for this guide, spanning the whole canvas.
    #[must_use]
    pub fn line(&self, canvas: Size) -> Line {
        match self.orientation {
            GuideOrientation::Horizontal => Line::new(
                (0.0, self.position),
                (canvas.width, self.position),
            ),
            GuideOrientation::Vertical => {
                Line::new((self.position, 0.0), (self.position, canvas.height))
            }
        }
    }
}
