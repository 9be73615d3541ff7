// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide engine configuration.
//!
//! A configuration is chosen once per editing session; changing it mid-drag is
//! allowed but produces guides that disagree with the previous update.

/// Fine snap threshold, in canvas units.
pub const FINE_THRESHOLD: f64 = 10.0;
/// Coarse snap threshold, in canvas units.
pub const COARSE_THRESHOLD: f64 = 20.0;
/// Default inset of the image-edge guides from the canvas border.
pub const DEFAULT_MARGIN: f64 = 20.0;
/// Multiplier applied to the threshold for the loose center-to-edge hints.
pub const EDGE_PROXIMITY_FACTOR: f64 = 1.5;
/// Fraction of the canvas width available to text before it wraps.
pub const WRAP_WIDTH_FRACTION: f64 = 0.8;

/// Which set of rules the engine applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GuideVariant {
    /// Anchor-point rules only: canvas center, margins and sibling centers.
    ///
    /// Every guide participates in snapping. No text measurement is needed.
    Simple,
    /// Adds measured bounding boxes: sibling edge guides and margin guides for
    /// the dragged box. Edge guides are display-only.
    #[default]
    Full,
}

/// How `snap` chooses between several qualifying guides on one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapPolicy {
    /// The first qualifying guide in list order wins.
    #[default]
    FirstMatch,
    /// The guide closest to the candidate coordinate wins; ties go to the
    /// earlier guide.
    Nearest,
}

/// Guide engine parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideConfig {
    /// Distance below which a guide becomes active (strict `<`).
    pub threshold: f64,
    /// Inset of the image-edge guides from each canvas border.
    pub margin: f64,
    /// Rule set.
    pub variant: GuideVariant,
    /// Snap tie-break policy.
    pub snap_policy: SnapPolicy,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self::coarse()
    }
}

impl GuideConfig {
    /// The fine preset (10 unit threshold).
    #[must_use]
    pub fn fine() -> Self {
        Self::coarse().with_threshold(FINE_THRESHOLD)
    }

    /// The coarse preset (20 unit threshold).
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            threshold: COARSE_THRESHOLD,
            margin: DEFAULT_MARGIN,
            variant: GuideVariant::Full,
            snap_policy: SnapPolicy::FirstMatch,
        }
    }

    /// Sets the snap threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the margin inset.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the rule set.
    #[must_use]
    pub fn with_variant(mut self, variant: GuideVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the snap policy.
    #[must_use]
    pub fn with_snap_policy(mut self, snap_policy: SnapPolicy) -> Self {
        self.snap_policy = snap_policy;
        self
    }

    /// The wider threshold used for center-to-edge proximity hints.
    #[must_use]
    pub fn loose_threshold(&self) -> f64 {
        self.threshold * EDGE_PROXIMITY_FACTOR
    }
}
