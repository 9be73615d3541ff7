// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless photo caption editing.
//!
//! [`EditSession`] is the state a photo editor screen binds to: the overlay
//! list, the drag in progress and the guides to draw. It routes drag updates
//! through [`snapline_core::GuideEngine`], snaps on release and clears guides a
//! short grace period later (see [`GuideState`]).
//!
//! Time is passed in explicitly as a monotonic [`core::time::Duration`], so the
//! session can be driven by a frame loop, an async runtime or a test without
//! owning a timer.

#![no_std]

extern crate alloc;

mod error;
mod gesture;
mod guide_state;
mod palette;
mod session;

pub use error::SessionError;
pub use gesture::{DragGesture, InteractionMode, RESIZE_SENSITIVITY};
pub use guide_state::{DEFAULT_CLEAR_DELAY, GuideState};
pub use palette::{EditSurface, INLINE_COLORS, SHEET_COLORS, WEIGHT_CHOICES};
pub use session::{EMPTY_TEXT_FALLBACK, EditSession};
