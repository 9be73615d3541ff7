// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text overlay model and alignment guide engine.
//!
//! This crate is the geometric core of the photo text editor:
//! - [`Overlay`] is a positioned, styled caption whose scale and font size stay
//!   within their allowed ranges.
//! - [`GuideEngine::compute_guides`] decides which alignment guides are active
//!   for a dragged overlay: canvas center, canvas margins, sibling centers and
//!   (with a [`TextMeasurer`]) sibling bounding-box edges.
//! - [`GuideEngine::snap`] pulls a candidate position onto the active guides.
//!
//! Everything here is pure and synchronous. Text shaping is delegated to a
//! [`TextMeasurer`] implementation; the guide holder, drag gestures and the
//! overlay list live in `snapline_editor`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
#[cfg(test)]
mod engine_tests;
#[cfg(not(feature = "std"))]
mod float;
mod guide;
mod overlay;
mod snap;
mod text_box;

pub use config::{
    COARSE_THRESHOLD, DEFAULT_MARGIN, EDGE_PROXIMITY_FACTOR, FINE_THRESHOLD, GuideConfig,
    GuideVariant, SnapPolicy, WRAP_WIDTH_FRACTION,
};
pub use engine::GuideEngine;
pub use guide::{Guide, GuideKind, GuideList, GuideOrientation};
pub use overlay::{
    FontSizeRange, MAX_SCALE, MIN_SCALE, Overlay, OverlayId, TextAlignment, clamp_scale,
};
pub use snap::snap_point;
pub use snapline_text::{FontWeight, TextMeasurer, TextSize, TextStyle};
pub use text_box::{box_at, text_box, wrap_width};
