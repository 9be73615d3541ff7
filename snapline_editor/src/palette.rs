// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choices offered by the two editing surfaces.

use peniko::Color;
use peniko::color::palette::css;
use snapline_core::{FontSizeRange, FontWeight};

/// Colors offered by the inline editor, in picker order.
pub const INLINE_COLORS: [Color; 9] = [
    css::WHITE,
    css::BLACK,
    css::RED,
    css::BLUE,
    css::GREEN,
    css::YELLOW,
    css::PURPLE,
    css::ORANGE,
    css::PINK,
];

/// Colors offered by the editing sheet, in picker order.
pub const SHEET_COLORS: [Color; 7] = [
    css::WHITE,
    css::BLACK,
    css::RED,
    css::BLUE,
    css::GREEN,
    css::YELLOW,
    css::PURPLE,
];

/// Weights offered by the inline weight picker.
pub const WEIGHT_CHOICES: [FontWeight; 5] = [
    FontWeight::Light,
    FontWeight::Regular,
    FontWeight::Medium,
    FontWeight::Bold,
    FontWeight::Heavy,
];

/// Where an edit comes from; each surface has its own ranges and choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditSurface {
    /// The modal editing sheet.
    #[default]
    Sheet,
    /// The inline editor drawn over the photo.
    Inline,
}

impl EditSurface {
    /// Font size limits and slider step.
    #[must_use]
    pub fn font_size_range(self) -> FontSizeRange {
        match self {
            Self::Sheet => FontSizeRange::SHEET,
            Self::Inline => FontSizeRange::INLINE,
        }
    }

    /// Color swatches.
    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::Sheet => &SHEET_COLORS,
            Self::Inline => &INLINE_COLORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_surface_offers_its_own_swatches() {
        assert_eq!(EditSurface::Sheet.colors().len(), 7);
        assert_eq!(EditSurface::Inline.colors().len(), 9);
        // The sheet swatches are a prefix of the inline ones.
        for (sheet, inline) in EditSurface::Sheet.colors().iter().zip(INLINE_COLORS) {
            assert_eq!(sheet.to_rgba8(), inline.to_rgba8());
        }
        assert_eq!(
            EditSurface::Inline.colors()[8].to_rgba8(),
            css::PINK.to_rgba8()
        );
    }

    #[test]
    fn surfaces_use_their_font_size_ranges() {
        assert_eq!(EditSurface::default(), EditSurface::Sheet);
        assert_eq!(EditSurface::Sheet.font_size_range(), FontSizeRange::SHEET);
        assert_eq!(EditSurface::Inline.font_size_range(), FontSizeRange::INLINE);
    }
}
