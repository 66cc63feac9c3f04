//! Interaction router state machine

use crate::math::{Size, Vec2};
use super::InteractionState;

/// Owns the one active interaction, if any.
///
/// `None` means idle. At most one interaction is active at a time: starting
/// a new one replaces the old snapshot, ending is idempotent.
pub struct InteractionRouter {
    active: Option<InteractionState>,
}

impl Default for InteractionRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Get the active interaction state
    #[inline]
    pub fn state(&self) -> Option<&InteractionState> {
        self.active.as_ref()
    }

    /// Check if an interaction is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start an icon drag
    pub fn begin_icon_drag(&mut self, start: Vec2, origin: Vec2) {
        self.active = Some(InteractionState::DragIcon { start, origin });
    }

    /// Start a frame drag
    pub fn begin_window_drag(&mut self, start: Vec2, origin: Vec2) {
        self.active = Some(InteractionState::DragWindow { start, origin });
    }

    /// Start a corner resize
    pub fn begin_resize(&mut self, start: Vec2, origin: Size) {
        self.active = Some(InteractionState::Resize { start, origin });
    }

    /// End the active interaction. Idempotent.
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Cancel the active interaction (alias for end)
    #[inline]
    pub fn cancel(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InteractionKind;

    #[test]
    fn test_router_starts_idle() {
        let router = InteractionRouter::new();
        assert!(!router.is_active());
        assert!(router.state().is_none());
    }

    #[test]
    fn test_begin_and_end() {
        let mut router = InteractionRouter::new();

        router.begin_window_drag(Vec2::new(150.0, 130.0), Vec2::new(100.0, 100.0));
        assert!(router.is_active());
        assert_eq!(
            router.state().map(|s| s.kind()),
            Some(InteractionKind::DragWindow)
        );

        router.end();
        assert!(!router.is_active());
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut router = InteractionRouter::new();
        router.begin_icon_drag(Vec2::ZERO, Vec2::ZERO);

        router.end();
        router.end();
        router.cancel();
        assert!(!router.is_active());
    }

    #[test]
    fn test_new_interaction_replaces_old() {
        let mut router = InteractionRouter::new();
        router.begin_icon_drag(Vec2::new(1.0, 1.0), Vec2::ZERO);
        router.begin_resize(Vec2::new(500.0, 500.0), Size::new(280.0, 380.0));

        assert_eq!(
            router.state().map(|s| s.kind()),
            Some(InteractionKind::Resize)
        );
    }
}
