// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text overlay model.
//!
//! An [`Overlay`] is a positioned, styled piece of text drawn atop a photo. Its
//! position is the center anchor of the text. Scale and font size are kept
//! inside their allowed ranges by every setter, so the fields are private;
//! position is deliberately unbounded (overlays may be dragged off-canvas).

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;
use snapline_text::{FontWeight, TextStyle};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt as _;

/// Smallest allowed overlay scale.
pub const MIN_SCALE: f64 = 0.3;
/// Largest allowed overlay scale.
pub const MAX_SCALE: f64 = 3.0;

/// Stable identity of an overlay within an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Horizontal alignment of an overlay's text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Text starts at the anchor and extends to the right.
    Leading,
    /// Text is centered on the anchor.
    #[default]
    Center,
    /// Text ends at the anchor.
    Trailing,
}

/// The font size range (and slider step) of an editing surface.
///
/// Built through [`FontSizeRange::new`], so `min <= max` always holds and every
/// bound is finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeRange {
    min: f64,
    max: f64,
    step: f64,
}

impl FontSizeRange {
    /// The full editing sheet: 12 to 72 in steps of 1.
    pub const SHEET: Self = Self {
        min: 12.0,
        max: 72.0,
        step: 1.0,
    };

    /// The inline editor: 16 to 64 in steps of 2.
    pub const INLINE: Self = Self {
        min: 16.0,
        max: 64.0,
        step: 2.0,
    };

    /// Creates a range of sizes `min..=max` rounded to `min + k * step`.
    ///
    /// Returns `None` if a bound is not finite, `min > max`, or `step` is
    /// negative or not finite. A zero step disables rounding.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Option<Self> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        (finite && min <= max && step >= 0.0).then_some(Self { min, max, step })
    }

    /// Smallest size.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest size.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Slider increment.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Snaps `size` to the step grid and clamps it into range.
    ///
    /// Non-finite sizes become `min`.
    #[must_use]
    pub fn clamp(&self, size: f64) -> f64 {
        if !size.is_finite() {
            return self.min;
        }
        let stepped = if self.step > 0.0 {
            self.min + ((size - self.min) / self.step).round() * self.step
        } else {
            size
        };
        stepped.clamp(self.min, self.max)
    }
}

/// Clamps an overlay scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// Non-finite scales become `1.0`.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

/// A text annotation placed on the photo.
#[derive(Clone, Debug)]
pub struct Overlay {
    id: OverlayId,
    /// Text content.
    pub text: String,
    /// Center anchor in canvas coordinates.
    pub position: Point,
    scale: f64,
    /// Rotation in degrees (unconstrained).
    pub rotation: f64,
    /// Fill color of the text.
    pub color: Color,
    font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Horizontal alignment relative to `position`.
    pub alignment: TextAlignment,
}

impl Overlay {
    /// Text shown by a freshly added overlay.
    pub const PLACEHOLDER_TEXT: &'static str = "Tap to edit";
    /// Font size of a freshly added overlay.
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;

    /// Creates an overlay with the default styling: white bold 24pt
    /// `"Tap to edit"` at `(200, 200)`.
    pub fn new(id: OverlayId) -> Self {
        Self {
            id,
            text: String::from(Self::PLACEHOLDER_TEXT),
            position: Point::new(200.0, 200.0),
            scale: 1.0,
            rotation: 0.0,
            color: css::WHITE,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Bold,
            alignment: TextAlignment::Center,
        }
    }

    /// Returns the overlay's identity.
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Returns the scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the font size.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Sets the scale, clamped into `[MIN_SCALE, MAX_SCALE]`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    /// Sets the font size, stepped and clamped by `range`.
    pub fn set_font_size(&mut self, font_size: f64, range: FontSizeRange) {
        self.font_size = range.clamp(font_size);
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the anchor position.
    pub fn with_position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the scale (clamped).
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.set_scale(scale);
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the font size, clamped to the editing sheet range.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.set_font_size(font_size, FontSizeRange::SHEET);
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns a copy of this overlay moved to `position`.
    ///
    /// Drag handlers use this to ask the guide engine about the position "as if
    /// the drag ended now" without touching the session's overlay.
    #[must_use]
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// The measurement style for this overlay's text.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size).with_weight(self.font_weight)
    }
}
