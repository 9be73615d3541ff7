// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for overlay geometry.
//!
//! Snapline needs the rendered extent of a text overlay to compute its bounding
//! box (and from that, edge alignment guides). Shaping and glyph layout stay
//! downstream, so the guide engine depends on a tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names and the
//!   measurement cache), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

mod cache;
mod wrap;

use alloc::boxed::Box;
use alloc::sync::Arc;

pub use cache::{CachedTextMeasurer, DEFAULT_CACHE_CAPACITY};
pub use wrap::wrap_lines;

/// Line height used by the heuristic measurer, in ems.
pub const HEURISTIC_LINE_HEIGHT: f64 = 1.2;

/// Average glyph advance used by the heuristic measurer, in ems.
pub const HEURISTIC_ADVANCE: f64 = 0.6;

/// A minimal text measurement interface used by the guide engine.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same size. That makes results safe to memoize (see [`CachedTextMeasurer`]).
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure `text` as it would be rendered on the canvas.
    ///
    /// Lines are broken at `\n` and wrapped so that no line is wider than
    /// `max_width` (a single word wider than `max_width` keeps its own line).
    /// Wrapping happens at the unscaled font size; the returned size is then
    /// multiplied by `scale`, matching a scale effect applied after layout.
    /// Empty text measures as zero width and one line of height.
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        (**self).measure(text, style, scale, max_width)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        (**self).measure(text, style, scale, max_width)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in canvas coordinates (typically points).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight.
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::Regular,
        }
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(24.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Ordinal font weights, from thinnest to heaviest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    /// Ultra light (`100`).
    UltraLight,
    /// Thin (`200`).
    Thin,
    /// Light (`300`).
    Light,
    /// Regular (`400`).
    #[default]
    Regular,
    /// Medium (`500`).
    Medium,
    /// Semibold (`600`).
    Semibold,
    /// Bold (`700`).
    Bold,
    /// Heavy (`800`).
    Heavy,
    /// Black (`900`).
    Black,
}

impl FontWeight {
    /// Every weight, in ascending order.
    pub const ALL: [Self; 9] = [
        Self::UltraLight,
        Self::Thin,
        Self::Light,
        Self::Regular,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
        Self::Heavy,
        Self::Black,
    ];

    /// The CSS/OpenType numeric weight for this ordinal.
    #[must_use]
    pub const fn css_weight(self) -> u16 {
        match self {
            Self::UltraLight => 100,
            Self::Thin => 200,
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Heavy => 800,
            Self::Black => 900,
        }
    }

    /// A human readable label for pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UltraLight => "Ultra Light",
            Self::Thin => "Thin",
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
            Self::Heavy => "Heavy",
            Self::Black => "Black",
        }
    }
}

/// The measured extent of a (possibly multi-line) piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    /// Width of the widest line.
    pub width: f64,
    /// Total height of all lines.
    pub height: f64,
}

impl TextSize {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size from a width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Multiplies both dimensions by `scale`.
    ///
    /// Negative and `NaN` scales are treated as `0`.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        let scale = scale.max(0.0);
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// A tiny heuristic text measurer suitable for tests, demos and headless use.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1.2em, and
/// wraps greedily on whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    fn line_width(line: &str, font_size: f64) -> f64 {
        HEURISTIC_ADVANCE * font_size * line.chars().count() as f64
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, scale: f64, max_width: f64) -> TextSize {
        let font_size = style.font_size.max(0.0);
        let lines = wrap_lines(text, max_width, |line| Self::line_width(line, font_size));
        let width = lines
            .iter()
            .map(|line| Self::line_width(line, font_size))
            .fold(0.0_f64, f64::max);
        let height = HEURISTIC_LINE_HEIGHT * font_size * lines.len() as f64;
        TextSize::new(width, height).scaled(scale)
    }
}
