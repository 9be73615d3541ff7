// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay bounding boxes.
//!
//! A box is the measured text size placed around the anchor according to the
//! overlay's horizontal alignment. Boxes are always vertically centered on the
//! anchor. Rotation is not applied.

use kurbo::{Point, Rect, Size};
use snapline_text::{TextMeasurer, TextSize};

use crate::config::WRAP_WIDTH_FRACTION;
use crate::overlay::{Overlay, TextAlignment};

/// The width text may occupy before wrapping on a canvas of `canvas` size.
#[must_use]
pub fn wrap_width(canvas: Size) -> f64 {
    canvas.width * WRAP_WIDTH_FRACTION
}

/// Places a measured `size` around `anchor`.
#[must_use]
pub fn box_at(anchor: Point, size: TextSize, alignment: TextAlignment) -> Rect {
    let (x0, x1) = match alignment {
        TextAlignment::Leading => (anchor.x, anchor.x + size.width),
        TextAlignment::Trailing => (anchor.x - size.width, anchor.x),
        TextAlignment::Center => (anchor.x - 0.5 * size.width, anchor.x + 0.5 * size.width),
    };
    let half_h = 0.5 * size.height;
    Rect::new(x0, anchor.y - half_h, x1, anchor.y + half_h)
}

/// Measures `overlay` and returns its box on a canvas of `canvas` size.
pub fn text_box(overlay: &Overlay, canvas: Size, measurer: &dyn TextMeasurer) -> Rect {
    let size = measurer.measure(
        &overlay.text,
        &overlay.text_style(),
        overlay.scale(),
        wrap_width(canvas),
    );
    box_at(overlay.position, size, overlay.alignment)
}
