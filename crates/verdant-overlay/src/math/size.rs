//! 2D size with minimum-bound clamping

use serde::{Deserialize, Serialize};

/// Width/height pair for the surface frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions uniformly
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Clamp both dimensions to a lower bound.
    ///
    /// There is deliberately no upper-bound counterpart: the frame may grow
    /// without limit.
    #[inline]
    pub fn clamp_min(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}
