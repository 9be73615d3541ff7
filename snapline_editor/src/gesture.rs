// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gestures on a single overlay.

use kurbo::{Point, Vec2};
use snapline_core::{OverlayId, clamp_scale};

/// Horizontal drag distance that doubles (or zeroes) the starting scale in
/// resize mode.
pub const RESIZE_SENSITIVITY: f64 = 200.0;

/// What a drag does to the overlay.
///
/// Hosts pick the mode from whatever input they have: a held modifier key, a
/// second touch, or a toolbar toggle. The guide engine never sees the mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    /// Translate the overlay; guides are shown and the drop position snaps.
    #[default]
    Move,
    /// Change the overlay's scale; no guides are shown.
    Resize,
}

impl InteractionMode {
    /// Desktop convention: holding the modifier (option/alt) resizes.
    #[must_use]
    pub fn from_modifier(modifier_held: bool) -> Self {
        if modifier_held {
            Self::Resize
        } else {
            Self::Move
        }
    }
}

/// An in-progress drag, captured when it begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    /// The overlay being dragged.
    pub overlay: OverlayId,
    /// Move or resize.
    pub mode: InteractionMode,
    /// Overlay position when the drag began.
    pub start_position: Point,
    /// Overlay scale when the drag began.
    pub start_scale: f64,
}

impl DragGesture {
    /// Where the overlay would sit if the drag ended with `translation`.
    #[must_use]
    pub fn candidate_position(&self, translation: Vec2) -> Point {
        self.start_position + translation
    }

    /// The scale a resize drag with `translation` produces, clamped.
    #[must_use]
    pub fn candidate_scale(&self, translation: Vec2) -> f64 {
        clamp_scale(self.start_scale * (1.0 + translation.x / RESIZE_SENSITIVITY))
    }
}
