// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The active guide holder.
//!
//! Guides are replaced wholesale on every drag update and cleared a short grace
//! period after the drag ends. The clear is a deadline rather than a timer:
//! callers pass a monotonic timestamp (`Duration` since any fixed origin) to
//! [`GuideState::poll`], so the holder works the same under a UI frame loop, an
//! async runtime, or a test.

use core::time::Duration;

use snapline_core::{Guide, GuideList};

/// How long guides stay visible after a drag ends.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(300);

/// Holds the guides currently shown on the canvas.
#[derive(Clone, Debug)]
pub struct GuideState {
    guides: GuideList,
    clear_at: Option<Duration>,
    clear_delay: Duration,
}

impl Default for GuideState {
    fn default() -> Self {
        Self::new()
    }
}

impl GuideState {
    /// Creates an empty holder with [`DEFAULT_CLEAR_DELAY`].
    pub fn new() -> Self {
        Self {
            guides: GuideList::new(),
            clear_at: None,
            clear_delay: DEFAULT_CLEAR_DELAY,
        }
    }

    /// Sets the grace period between drag end and clearing.
    #[must_use]
    pub fn with_clear_delay(mut self, clear_delay: Duration) -> Self {
        self.clear_delay = clear_delay;
        self
    }

    /// The grace period between drag end and clearing.
    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// The guides to render, in engine order.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Replaces the active guides.
    ///
    /// A pending clear is cancelled so a freshly issued list is never dropped.
    pub fn set(&mut self, guides: GuideList) {
        self.clear_at = None;
        self.guides = guides;
    }

    /// Removes all guides immediately.
    pub fn clear(&mut self) {
        self.clear_at = None;
        self.guides.clear();
    }

    /// Arms a clear for `now + clear_delay`, replacing any earlier deadline.
    pub fn schedule_clear(&mut self, now: Duration) {
        self.clear_at = Some(now.saturating_add(self.clear_delay));
    }

    /// Disarms a pending clear, keeping the current guides.
    pub fn cancel_clear(&mut self) {
        self.clear_at = None;
    }

    /// Returns `true` if a clear is armed.
    pub fn is_clear_pending(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Performs a due clear. Returns `true` if the guides were cleared.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
