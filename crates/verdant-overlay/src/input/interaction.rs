//! Interaction state for the surface

use crate::math::{Size, Vec2};

/// The kind of interaction requested at pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    /// Dragging the collapsed icon
    DragIcon,
    /// Dragging the expanded frame by its header
    DragWindow,
    /// Resizing the expanded frame from its corner handle
    Resize,
}

/// Active interaction with its start-of-interaction snapshot.
///
/// The snapshot only exists while an interaction is active, so a stale
/// snapshot with no interaction is unrepresentable. Every move recomputes
/// geometry as snapshot-plus-delta; deltas are never accumulated across
/// events.
#[derive(Clone, Debug)]
pub enum InteractionState {
    /// Moving the collapsed icon
    DragIcon {
        /// Pointer position at start
        start: Vec2,
        /// Icon position at start
        origin: Vec2,
    },
    /// Moving the expanded frame
    DragWindow {
        /// Pointer position at start
        start: Vec2,
        /// Frame position at start
        origin: Vec2,
    },
    /// Resizing the expanded frame
    Resize {
        /// Pointer position at start
        start: Vec2,
        /// Frame size at start
        origin: Size,
    },
}

impl InteractionState {
    /// The kind of this interaction
    pub fn kind(&self) -> InteractionKind {
        match self {
            InteractionState::DragIcon { .. } => InteractionKind::DragIcon,
            InteractionState::DragWindow { .. } => InteractionKind::DragWindow,
            InteractionState::Resize { .. } => InteractionKind::Resize,
        }
    }

    /// Pointer position at the start of the interaction
    pub fn start(&self) -> Vec2 {
        match self {
            InteractionState::DragIcon { start, .. }
            | InteractionState::DragWindow { start, .. }
            | InteractionState::Resize { start, .. } => *start,
        }
    }
}
