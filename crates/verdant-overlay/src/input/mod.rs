//! Input module
//!
//! Provides the normalized pointer type and the interaction state machine
//! for drag/resize operations.

mod pointer;
mod interaction;
mod router;
mod result;

pub use pointer::PointerSample;
pub use interaction::{InteractionKind, InteractionState};
pub use router::InteractionRouter;
pub use result::InputResult;

use crate::math::{Size, Vec2};

/// Compute a resized frame size anchored at the top-left corner.
///
/// The handle sits in the bottom-right corner, so a positive delta grows
/// the frame and a negative delta shrinks it toward the minimums. The
/// result is computed from the start-of-interaction size, never from the
/// previous move event, so any sequence of moves ending at the same pointer
/// position yields the same size.
pub fn resize_from_anchor(origin: Size, delta: Vec2, min: Size) -> Size {
    Size::new(origin.width + delta.x, origin.height + delta.y).clamp_min(min)
}
