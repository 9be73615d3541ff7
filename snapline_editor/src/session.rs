// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The photo editing session.
//!
//! An [`EditSession`] owns the overlay list (list order is z-order, last on
//! top), the active guides and the single in-progress drag. Renderers read the
//! latest snapshot through [`EditSession::overlays`] and
//! [`EditSession::guides`]; there is no change notification.
//!
//! Per gesture the host calls [`EditSession::begin_drag`], then
//! [`EditSession::update_drag`] for every movement, then
//! [`EditSession::end_drag`], and keeps calling [`EditSession::poll`] (e.g.
//! once per frame) so the guides disappear after the grace period.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use snapline_core::{
    FontWeight, Guide, GuideConfig, GuideEngine, GuideList, Overlay, OverlayId, TextAlignment,
    TextMeasurer,
};
use tracing::{debug, trace};

use crate::error::SessionError;
use crate::gesture::{DragGesture, InteractionMode};
use crate::guide_state::GuideState;
use crate::palette::EditSurface;

/// Text committed when the user clears an overlay's text entirely.
pub const EMPTY_TEXT_FALLBACK: &str = "Text";

/// Headless state of one photo being captioned.
#[derive(Debug)]
pub struct EditSession {
    canvas: Size,
    engine: GuideEngine,
    overlays: Vec<Overlay>,
    next_id: u64,
    guides: GuideState,
    drag: Option<DragGesture>,
}

impl EditSession {
    /// Creates an empty session for a canvas of `canvas` size.
    pub fn new(canvas: Size, config: GuideConfig) -> Self {
        Self {
            canvas,
            engine: GuideEngine::new(config),
            overlays: Vec::new(),
            next_id: 1,
            guides: GuideState::new(),
            drag: None,
        }
    }

    /// Sets how long guides stay visible after a drag ends.
    #[must_use]
    pub fn with_clear_delay(mut self, clear_delay: Duration) -> Self {
        self.guides = self.guides.with_clear_delay(clear_delay);
        self
    }

    /// The canvas size passed to the guide engine.
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Updates the canvas size (e.g. after a layout change).
    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    /// The guide engine configuration.
    pub fn config(&self) -> &GuideConfig {
        self.engine.config()
    }

    /// All overlays in z-order (last drawn on top).
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Looks up an overlay by id.
    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id() == id)
    }

    /// The guides to draw right now.
    pub fn guides(&self) -> &[Guide] {
        self.guides.guides()
    }

    /// Returns `true` if guides are waiting for their delayed clear.
    pub fn is_clear_pending(&self) -> bool {
        self.guides.is_clear_pending()
    }

    /// The in-progress drag, if any.
    pub fn active_drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    /// Adds a placeholder caption at the canvas center and returns its id.
    pub fn add_text(&mut self) -> OverlayId {
        let center = Point::new(0.5 * self.canvas.width, 0.5 * self.canvas.height);
        self.add_overlay(|overlay| overlay.with_position(center))
    }

    /// Adds a default overlay shaped by `configure` on top of the others.
    pub fn add_overlay(&mut self, configure: impl FnOnce(Overlay) -> Overlay) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        let overlay = configure(Overlay::new(id));
        debug!(
            overlay = id.0,
            x = overlay.position.x,
            y = overlay.position.y,
            "added overlay"
        );
        self.overlays.push(overlay);
        id
    }

    /// Removes an overlay, ending its drag if it was being dragged.
    pub fn remove(&mut self, id: OverlayId) -> Result<Overlay, SessionError> {
        let index = self.index_of(id)?;
        if self.drag.is_some_and(|drag| drag.overlay == id) {
            self.drag = None;
            self.guides.clear();
        }
        debug!(overlay = id.0, "removed overlay");
        Ok(self.overlays.remove(index))
    }

    /// Moves an overlay to the top of the z-order.
    pub fn bring_to_front(&mut self, id: OverlayId) -> Result<(), SessionError> {
        let index = self.index_of(id)?;
        let overlay = self.overlays.remove(index);
        self.overlays.push(overlay);
        Ok(())
    }

    /// Commits edited text. Empty text becomes [`EMPTY_TEXT_FALLBACK`].
    pub fn commit_text(&mut self, id: OverlayId, text: &str) -> Result<(), SessionError> {
        let overlay = self.overlay_mut(id)?;
        overlay.text = if text.is_empty() {
            String::from(EMPTY_TEXT_FALLBACK)
        } else {
            String::from(text)
        };
        Ok(())
    }

    /// Sets an overlay's text color.
    pub fn set_color(&mut self, id: OverlayId, color: Color) -> Result<(), SessionError> {
        self.overlay_mut(id)?.color = color;
        Ok(())
    }

    /// Sets an overlay's font size within the limits of `surface`.
    pub fn set_font_size(
        &mut self,
        id: OverlayId,
        font_size: f64,
        surface: EditSurface,
    ) -> Result<(), SessionError> {
        self.overlay_mut(id)?
            .set_font_size(font_size, surface.font_size_range());
        Ok(())
    }

    /// Sets an overlay's font weight.
    pub fn set_font_weight(
        &mut self,
        id: OverlayId,
        font_weight: FontWeight,
    ) -> Result<(), SessionError> {
        self.overlay_mut(id)?.font_weight = font_weight;
        Ok(())
    }

    /// Sets an overlay's horizontal text alignment.
    pub fn set_alignment(
        &mut self,
        id: OverlayId,
        alignment: TextAlignment,
    ) -> Result<(), SessionError> {
        self.overlay_mut(id)?.alignment = alignment;
        Ok(())
    }

    /// Sets an overlay's scale (clamped).
    pub fn set_scale(&mut self, id: OverlayId, scale: f64) -> Result<(), SessionError> {
        self.overlay_mut(id)?.set_scale(scale);
        Ok(())
    }

    /// Sets an overlay's rotation in degrees.
    pub fn set_rotation(&mut self, id: OverlayId, rotation: f64) -> Result<(), SessionError> {
        self.overlay_mut(id)?.rotation = rotation;
        Ok(())
    }

    /// Starts dragging `id` at time `now`.
    ///
    /// A pending guide clear from the previous gesture is cancelled.
    pub fn begin_drag(
        &mut self,
        id: OverlayId,
        mode: InteractionMode,
        now: Duration,
    ) -> Result<(), SessionError> {
        if let Some(drag) = &self.drag {
            return Err(SessionError::DragInProgress(drag.overlay));
        }
        let overlay = self.overlay(id).ok_or(SessionError::UnknownOverlay(id))?;
        let gesture = DragGesture {
            overlay: id,
            mode,
            start_position: overlay.position,
            start_scale: overlay.scale(),
        };
        self.guides.cancel_clear();
        self.drag = Some(gesture);
        debug!(overlay = id.0, ?mode, ?now, "drag began");
        Ok(())
    }

    /// Feeds the drag's current `translation` and returns the guides to show.
    ///
    /// In move mode the overlay itself does not move until
    /// [`EditSession::end_drag`]; hosts draw it at
    /// [`DragGesture::candidate_position`]. In resize mode the scale is applied
    /// immediately and no guides are shown.
    pub fn update_drag(
        &mut self,
        translation: Vec2,
        measurer: &dyn TextMeasurer,
    ) -> Result<&[Guide], SessionError> {
        let drag = self.drag.ok_or(SessionError::NoActiveDrag)?;
        match drag.mode {
            InteractionMode::Move => {
                let (_, guides) = self.move_candidate(&drag, translation, measurer)?;
                trace!(overlay = drag.overlay.0, guides = guides.len(), "drag moved");
                self.guides.set(guides);
            }
            InteractionMode::Resize => {
                let scale = drag.candidate_scale(translation);
                self.overlay_mut(drag.overlay)?.set_scale(scale);
                self.guides.clear();
            }
        }
        Ok(self.guides.guides())
    }

    /// Finishes the drag and returns the overlay's committed position.
    ///
    /// In move mode the drop position is snapped onto the final guides, the
    /// guides stay visible, and a clear is scheduled for `now` plus the delay.
    pub fn end_drag(
        &mut self,
        translation: Vec2,
        measurer: &dyn TextMeasurer,
        now: Duration,
    ) -> Result<Point, SessionError> {
        let drag = self.drag.ok_or(SessionError::NoActiveDrag)?;
        let position = match drag.mode {
            InteractionMode::Move => {
                let (candidate, guides) = self.move_candidate(&drag, translation, measurer)?;
                let snapped = self.engine.snap(candidate, &guides);
                self.overlay_mut(drag.overlay)?.position = snapped;
                self.guides.set(guides);
                debug!(
                    overlay = drag.overlay.0,
                    x = snapped.x,
                    y = snapped.y,
                    snapped = snapped != candidate,
                    "drag ended"
                );
                snapped
            }
            InteractionMode::Resize => {
                let scale = drag.candidate_scale(translation);
                let overlay = self.overlay_mut(drag.overlay)?;
                overlay.set_scale(scale);
                debug!(overlay = drag.overlay.0, scale, "resize ended");
                overlay.position
            }
        };
        self.drag = None;
        self.guides.schedule_clear(now);
        Ok(position)
    }

    /// Abandons the drag, restoring the overlay's starting scale.
    pub fn cancel_drag(&mut self, now: Duration) -> Result<(), SessionError> {
        let drag = self.drag.take().ok_or(SessionError::NoActiveDrag)?;
        self.overlay_mut(drag.overlay)?.set_scale(drag.start_scale);
        self.guides.schedule_clear(now);
        debug!(overlay = drag.overlay.0, "drag cancelled");
        Ok(())
    }

    /// Runs the delayed guide clear if it is due. Returns `true` if it ran.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.guides.poll(now)
    }

    /// Computes guides for the dragged overlay as if the drag ended with
    /// `translation`.
    fn move_candidate(
        &self,
        drag: &DragGesture,
        translation: Vec2,
        measurer: &dyn TextMeasurer,
    ) -> Result<(Point, GuideList), SessionError> {
        let candidate = drag.candidate_position(translation);
        let hypothetical = self
            .overlay(drag.overlay)
            .ok_or(SessionError::UnknownOverlay(drag.overlay))?
            .moved_to(candidate);
        let guides =
            self.engine
                .compute_guides(&hypothetical, self.canvas, &self.overlays, measurer);
        Ok((candidate, guides))
    }

    fn index_of(&self, id: OverlayId) -> Result<usize, SessionError> {
        self.overlays
            .iter()
            .position(|o| o.id() == id)
            .ok_or(SessionError::UnknownOverlay(id))
    }

    fn overlay_mut(&mut self, id: OverlayId) -> Result<&mut Overlay, SessionError> {
        self.overlays
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(SessionError::UnknownOverlay(id))
    }
}
