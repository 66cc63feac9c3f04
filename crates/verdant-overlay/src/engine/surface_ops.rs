//! Discrete surface actions

use crate::math::Rect;
use super::OverlayEngine;

/// Scale factor applied by one zoom-in step
pub const ZOOM_IN_FACTOR: f32 = 1.1;
/// Scale factor applied by one zoom-out step
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Direction of a discrete zoom step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl OverlayEngine {
    /// Scale the frame by one zoom step, re-clamped to the minimums.
    ///
    /// Discrete action, independent of any active interaction. The two
    /// factors are not exact inverses, so in/out does not round-trip to the
    /// exact prior size.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_IN_FACTOR,
            ZoomDirection::Out => ZOOM_OUT_FACTOR,
        };
        let size = self.surface.frame.size().scale(factor);
        self.surface.set_frame_size(size);
    }

    /// Flip the full-screen presentation.
    ///
    /// The stored frame is left untouched while the flag is set, so leaving
    /// full-screen restores the prior position and size exactly.
    pub fn toggle_fullscreen(&mut self) {
        self.surface.fullscreen = !self.surface.fullscreen;
    }

    /// Flip between collapsed icon and expanded frame.
    ///
    /// Touches neither geometry entity.
    pub fn toggle_expanded(&mut self) {
        self.surface.expanded = !self.surface.expanded;
    }

    /// The rect the expanded frame is presented at: the viewport while
    /// full-screen is active, the stored frame otherwise.
    pub fn screen_rect(&self) -> Rect {
        if self.surface.fullscreen {
            self.viewport.rect()
        } else {
            self.surface.frame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Vec2};
    use crate::surface::{SurfaceConfig, MIN_HEIGHT, MIN_WIDTH};

    fn create_test_engine() -> OverlayEngine {
        let mut config = SurfaceConfig::for_viewport(1920.0, 1080.0);
        config.frame = Some(Rect::new(100.0, 100.0, 280.0, 380.0));
        config.icon_pos = Some(Vec2::new(800.0, 800.0));
        let mut engine = OverlayEngine::with_config(config);
        engine.surface.expanded = true;
        engine
    }

    #[test]
    fn test_zoom_in_scales_both_dimensions() {
        let mut engine = create_test_engine();

        engine.zoom(ZoomDirection::In);

        assert!((engine.surface.frame.width - 308.0).abs() < 0.001);
        assert!((engine.surface.frame.height - 418.0).abs() < 0.001);
        // Position is untouched by zoom
        assert!((engine.surface.frame.x - 100.0).abs() < 0.001);
        assert!((engine.surface.frame.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_zoom_out_never_shrinks_below_minimums() {
        let mut engine = create_test_engine();

        for _ in 0..50 {
            engine.zoom(ZoomDirection::Out);
        }

        assert!((engine.surface.frame.width - MIN_WIDTH).abs() < 0.001);
        assert!((engine.surface.frame.height - MIN_HEIGHT).abs() < 0.001);
    }

    #[test]
    fn test_zoom_round_trip_is_close_but_inexact() {
        let mut engine = create_test_engine();

        engine.zoom(ZoomDirection::In);
        engine.zoom(ZoomDirection::Out);

        // 1.1 * 0.9 = 0.99: close to the starting size, above minimums
        let frame = engine.surface.frame;
        assert!(frame.width >= MIN_WIDTH && frame.height >= MIN_HEIGHT);
        assert!((frame.width - 280.0).abs() < 280.0 * 0.02);
        assert!((frame.height - 380.0).abs() < 380.0 * 0.02);
    }

    #[test]
    fn test_fullscreen_overrides_screen_rect() {
        let mut engine = create_test_engine();

        engine.toggle_fullscreen();
        let rect = engine.screen_rect();
        assert!((rect.width - 1920.0).abs() < 0.001);
        assert!((rect.height - 1080.0).abs() < 0.001);

        engine.toggle_fullscreen();
        let rect = engine.screen_rect();
        assert!((rect.x - 100.0).abs() < 0.001);
        assert!((rect.width - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_fullscreen_round_trip_preserves_frame() {
        let mut engine = create_test_engine();
        let before = engine.surface.frame;

        engine.toggle_fullscreen();
        engine.toggle_fullscreen();

        assert_eq!(engine.surface.frame, before);
    }

    #[test]
    fn test_toggle_expanded_leaves_geometry_alone() {
        let mut engine = create_test_engine();
        let frame = engine.surface.frame;
        let icon = engine.surface.icon_pos;

        engine.toggle_expanded();
        assert!(!engine.surface.expanded);
        engine.toggle_expanded();
        assert!(engine.surface.expanded);

        assert_eq!(engine.surface.frame, frame);
        assert_eq!(engine.surface.icon_pos, icon);
    }
}
