// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM text measurement adapter.
//!
//! This crate provides a [`snapline_text::TextMeasurer`] implementation for
//! `wasm32-*` targets using HTML Canvas `measureText`. Canvas only measures
//! single lines, so wrapping goes through [`snapline_text::wrap_lines`].
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds fall back to a heuristic measurer.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::{format, string::String};
use snapline_text::{HeuristicTextMeasurer, TextMeasurer, TextSize, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls back
/// to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    fn css_font(style: &TextStyle) -> String {
        let family = style.font_family.as_css_family();
        let weight = style.font_weight.css_weight();
        format!("normal {weight} {}px {family}", style.font_size)
    }

    /// Creates a web measurer using an offscreen canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("snapline_text_web: missing window"))?;
        let document = window.document().ok_or_else(|| {
            wasm_bindgen::JsValue::from_str("snapline_text_web: missing document")
        })?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| {
                wasm_bindgen::JsValue::from_str("snapline_text_web: missing 2d context")
            })?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a web measurer that uses an existing canvas 2D context.
    ///
    /// This is useful for embedders that already own the editing canvas.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(target_arch = "wasm32")]
    fn measure_canvas(
        &self,
        text: &str,
        style: &TextStyle,
        scale: f64,
        max_width: f64,
    ) -> Result<TextSize, wasm_bindgen::JsValue> {
        self.ctx.set_font(&Self::css_font(style));

        // `measure_text` errors are rare (detached contexts); surface the first one.
        let mut failure = None;
        let mut width_of = |line: &str| match self.ctx.measure_text(line) {
            Ok(m) => m.width(),
            Err(err) => {
                failure.get_or_insert(err);
                0.0
            }
        };
        let lines = snapline_text::wrap_lines(text, max_width, &mut width_of);
        let width = lines
            .iter()
            .copied()
            .map(&mut width_of)
            .fold(0.0_f64, f64::max);
        if let Some(err) = failure {
            return Err(err);
        }

        let line_height = snapline_text::HEURISTIC_LINE_HEIGHT * style.font_size.max(0.0);
        Ok(TextSize::new(width, line_height * lines.len() as f64).scaled(scale))
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        #[cfg(target_arch = "wasm32")]
        {
            match self.measure_canvas(text, style, scale, max_width) {
                Ok(size) => size,
                Err(_) => HeuristicTextMeasurer.measure(text, style, scale, max_width),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style, scale, max_width)
    }
}
