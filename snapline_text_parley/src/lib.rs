// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`snapline_text::TextMeasurer`] using Parley, enabling
//! shaping-aware, wrapped text extents for overlay bounding boxes.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight as ParleyFontWeight};
use snapline_text::{FontFamily, TextMeasurer, TextSize, TextStyle};

/// A [`TextMeasurer`] backed by Parley.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer.
    ///
    /// This uses Parley's default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements returned by this
    /// measurer are scaled back into logical coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn to_f32(value: f64) -> f32 {
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }

    /// Wrap width in Parley layout units, or `None` for unbounded.
    fn max_advance(max_width: f64, scale: f32) -> Option<f32> {
        if max_width.is_finite() {
            Some(Self::to_f32(max_width) * scale)
        } else {
            None
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        // Empty text still occupies one line, like an empty caption with a caret.
        let laid_out = if text.is_empty() { " " } else { text };
        let display_scale = self.display_scale.max(1.0e-6);

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder =
            layout_cx.ranged_builder(&mut font_cx, laid_out, display_scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::to_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontWeight(ParleyFontWeight::new(f32::from(
            style.font_weight.css_weight(),
        ))));

        let max_advance = Self::max_advance(max_width, display_scale);
        let mut layout: parley::Layout<()> = builder.build(laid_out);
        layout.break_all_lines(max_advance);
        layout.align(max_advance, Alignment::Start, AlignmentOptions::default());

        let width = if text.is_empty() {
            0.0
        } else {
            f64::from(layout.width()) / f64::from(display_scale)
        };
        let unscaled = TextSize::new(
            width,
            f64::from(layout.height()) / f64::from(display_scale),
        );
        unscaled.scaled(scale)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parley_measurer_is_nonzero_for_nonempty_text() {
        let m = ParleyTextMeasurer::new();
        let size = m.measure("Hello", &TextStyle::new(12.0), 1.0, f64::INFINITY);
        assert!(size.width > 0.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn narrow_width_wraps_into_taller_box() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(24.0);
        let wide = m.measure("Tap to edit this caption", &style, 1.0, f64::INFINITY);
        let narrow = m.measure("Tap to edit this caption", &style, 1.0, wide.width / 2.0);
        assert!(narrow.height > wide.height, "{narrow:?} vs {wide:?}");
    }

    #[test]
    fn empty_text_keeps_one_line_of_height() {
        let m = ParleyTextMeasurer::new();
        let style = TextStyle::new(12.0);
        let empty = m.measure("", &style, 1.0, 100.0);
        let blank = m.measure(" ", &style, 1.0, 100.0);
        assert_eq!(empty.width, 0.0);
        assert_eq!(empty.height, blank.height);
    }
}
