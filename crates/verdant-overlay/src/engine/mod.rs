//! Overlay engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: pointer event handling and interaction state transitions
//! - `surface_ops`: discrete surface actions (zoom, full-screen, expand)

mod input;
mod surface_ops;

pub use surface_ops::{ZoomDirection, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};

use crate::input::InteractionRouter;
use crate::surface::{Surface, SurfaceConfig};
use crate::viewport::Viewport;

/// Overlay engine owning the surface and its interaction state.
///
/// This is the single entry point for the hosting application:
/// - Viewport (screen dimensions, full-screen bounds)
/// - Surface (icon/frame geometry, presentation flags)
/// - Interaction router (drag/resize state machine)
///
/// The geometry entities are owned exclusively by the engine; no other
/// component mutates them. All operations are synchronous and O(1).
pub struct OverlayEngine {
    /// Host viewport
    pub viewport: Viewport,
    /// Surface state
    pub surface: Surface,
    /// Interaction router
    pub input: InteractionRouter,
}

impl Default for OverlayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayEngine {
    /// Create a new engine with default viewport-derived layout
    pub fn new() -> Self {
        Self::with_config(SurfaceConfig::default())
    }

    /// Create a new engine from an explicit config
    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            surface: Surface::new(&config),
            input: InteractionRouter::new(),
        }
    }

    /// Initialize for the given screen dimensions.
    ///
    /// Re-derives the initial icon and frame layout from the viewport, the
    /// way the surface is first presented.
    pub fn init(&mut self, width: f32, height: f32) {
        let config = SurfaceConfig::for_viewport(width, height);
        self.viewport = Viewport::new(width, height);
        self.surface = Surface::new(&config);
        self.input = InteractionRouter::new();
    }

    /// Update the viewport dimensions.
    ///
    /// Existing geometry is kept; only the full-screen bounds change.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }
}
