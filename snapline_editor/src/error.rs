// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snapline_core::OverlayId;

/// Errors returned by [`crate::EditSession`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No overlay with this id exists in the session.
    #[error("no overlay with id {0:?}")]
    UnknownOverlay(OverlayId),
    /// A drag update or end arrived without a drag in progress.
    #[error("no drag is in progress")]
    NoActiveDrag,
    /// A drag began while another overlay was still being dragged.
    #[error("overlay {0:?} is already being dragged")]
    DragInProgress(OverlayId),
}
