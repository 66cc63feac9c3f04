//! Pointer event handling for the overlay engine

use crate::input::{resize_from_anchor, InputResult, InteractionKind, InteractionState, PointerSample};
use crate::surface::SurfaceRegion;
use super::{OverlayEngine, ZoomDirection};

impl OverlayEngine {
    /// Start an interaction of the requested kind.
    ///
    /// Snapshots the pointer position and the geometry entity the kind
    /// mutates. Frame drag and resize are refused while full-screen is
    /// active: the presentation overrides geometry there, so the mode stays
    /// idle and nothing moves.
    pub fn begin_interaction(&mut self, kind: InteractionKind, sample: PointerSample) {
        match kind {
            InteractionKind::DragIcon => {
                self.input.begin_icon_drag(sample.pos(), self.surface.icon_pos);
            }
            InteractionKind::DragWindow => {
                if !self.surface.fullscreen {
                    self.input
                        .begin_window_drag(sample.pos(), self.surface.frame.position());
                }
            }
            InteractionKind::Resize => {
                if !self.surface.fullscreen {
                    self.input.begin_resize(sample.pos(), self.surface.frame.size());
                }
            }
        }
    }

    /// Handle pointer down.
    ///
    /// Hit-tests the presented surface. Control regions fire their action
    /// and never start an interaction; drag origins snapshot and arm the
    /// state machine; the body is left to the host's own content handling.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let sample = PointerSample::new(x, y);
        let presented = self.screen_rect();

        let region = match self.surface.region_in(presented, sample.pos()) {
            Some(region) => region,
            None => return InputResult::Unhandled,
        };

        match region {
            SurfaceRegion::CloseButton => {
                self.toggle_expanded();
                InputResult::Handled
            }
            SurfaceRegion::FullScreenButton => {
                self.toggle_fullscreen();
                InputResult::Handled
            }
            SurfaceRegion::ZoomInButton => {
                self.zoom(ZoomDirection::In);
                InputResult::Handled
            }
            SurfaceRegion::ZoomOutButton => {
                self.zoom(ZoomDirection::Out);
                InputResult::Handled
            }
            SurfaceRegion::Icon => {
                self.begin_interaction(InteractionKind::DragIcon, sample);
                InputResult::Handled
            }
            SurfaceRegion::Header => {
                self.begin_interaction(InteractionKind::DragWindow, sample);
                InputResult::Handled
            }
            SurfaceRegion::ResizeHandle => {
                self.begin_interaction(InteractionKind::Resize, sample);
                InputResult::Handled
            }
            SurfaceRegion::Body => InputResult::Unhandled,
        }
    }

    /// Handle pointer move.
    ///
    /// A no-op while idle, which also makes stray moves delivered after
    /// pointer-up harmless. Geometry is recomputed as snapshot-plus-delta
    /// on every call, never accumulated.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pos = PointerSample::new(x, y).pos();

        let state = match self.input.state() {
            Some(state) => state.clone(),
            None => return InputResult::Unhandled,
        };

        let delta = pos - state.start();
        match state {
            InteractionState::DragIcon { origin, .. } => {
                self.surface.move_icon(origin + delta);
            }
            InteractionState::DragWindow { origin, .. } => {
                self.surface.move_frame(origin + delta);
            }
            InteractionState::Resize { origin, .. } => {
                let size = resize_from_anchor(origin, delta, self.surface.min_size);
                self.surface.set_frame_size(size);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up. Idempotent.
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.input.is_active() {
            self.input.end();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    /// Handle pointer cancel (device cancel, capture loss)
    pub fn handle_pointer_cancel(&mut self) {
        self.input.cancel();
    }
}
