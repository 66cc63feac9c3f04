//! Viewport dimensions for the host screen

use crate::math::{Rect, Size};

/// Host viewport the surface floats over.
///
/// The overlay is positioned in plain screen pixels, so the viewport is
/// just the current screen size: full-screen presentation fills its rect,
/// and the initial layout is derived from it.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
        }
    }

    /// Update the screen size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Full-viewport rectangle at the screen origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_size.width, self.screen_size.height)
    }
}
