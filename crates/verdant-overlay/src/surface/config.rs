//! Surface configuration for construction

use crate::math::{Rect, Size, Vec2};

/// Minimum frame width in pixels
pub const MIN_WIDTH: f32 = 240.0;
/// Minimum frame height in pixels
pub const MIN_HEIGHT: f32 = 320.0;

/// Configuration for creating a surface
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    /// Viewport dimensions the initial layout is derived from
    pub viewport: Size,
    /// Explicit initial frame (None = derive from viewport)
    pub frame: Option<Rect>,
    /// Explicit initial icon position (None = derive from viewport)
    pub icon_pos: Option<Vec2>,
    /// Minimum frame size
    pub min_size: Size,
}

impl SurfaceConfig {
    /// Create a config with layout derived from viewport dimensions.
    ///
    /// The icon docks near the bottom-right corner and the frame opens
    /// compact, just above it.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            frame: None,
            icon_pos: None,
            min_size: Size::new(MIN_WIDTH, MIN_HEIGHT),
        }
    }

    /// Initial icon position for this config
    pub fn initial_icon_pos(&self) -> Vec2 {
        self.icon_pos
            .unwrap_or_else(|| Vec2::new(self.viewport.width - 80.0, self.viewport.height - 100.0))
    }

    /// Initial frame for this config
    pub fn initial_frame(&self) -> Rect {
        self.frame.unwrap_or_else(|| {
            Rect::new(
                self.viewport.width - 300.0,
                self.viewport.height - 450.0,
                280.0,
                380.0,
            )
        })
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::for_viewport(1920.0, 1080.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_derived_from_viewport() {
        let config = SurfaceConfig::for_viewport(1280.0, 800.0);

        let icon = config.initial_icon_pos();
        assert!((icon.x - 1200.0).abs() < 0.001);
        assert!((icon.y - 700.0).abs() < 0.001);

        let frame = config.initial_frame();
        assert!((frame.x - 980.0).abs() < 0.001);
        assert!((frame.y - 350.0).abs() < 0.001);
        assert!((frame.width - 280.0).abs() < 0.001);
        assert!((frame.height - 380.0).abs() < 0.001);
    }

    #[test]
    fn test_explicit_geometry_wins() {
        let mut config = SurfaceConfig::for_viewport(1920.0, 1080.0);
        config.frame = Some(Rect::new(10.0, 20.0, 300.0, 400.0));
        config.icon_pos = Some(Vec2::new(5.0, 6.0));

        assert!((config.initial_frame().x - 10.0).abs() < 0.001);
        assert!((config.initial_icon_pos().x - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_initial_frame_respects_minimums() {
        let config = SurfaceConfig::default();
        let frame = config.initial_frame();
        assert!(frame.width >= MIN_WIDTH);
        assert!(frame.height >= MIN_HEIGHT);
    }
}
