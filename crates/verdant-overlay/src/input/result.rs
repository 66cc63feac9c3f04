//! Input result type

use serde::Serialize;

/// Result of routing a pointer event through the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the surface (drag started, control fired, ...)
    Handled,
    /// Event does not concern the surface; let the host process it
    Unhandled,
}

impl InputResult {
    /// Check if the event was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
