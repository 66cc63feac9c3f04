//! WASM exports for the overlay surface
//!
//! Provides a wasm-bindgen wrapper around the engine with a flat-float,
//! JSON-returning API the hosting page can drive directly.

use wasm_bindgen::prelude::*;

use crate::engine::{OverlayEngine, ZoomDirection};
use crate::input::{InteractionKind, PointerSample};

/// Overlay controller for WASM - wraps OverlayEngine with a JS-friendly API
#[wasm_bindgen]
pub struct OverlayController {
    engine: OverlayEngine,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl OverlayController {
    /// Create a new overlay controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: OverlayEngine::new(),
        }
    }

    /// Initialize layout from viewport dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Update the viewport dimensions
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Handle pointer down at client coordinates. Returns true if consumed.
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_down(x, y).is_handled()
    }

    /// Handle pointer move at client coordinates. Returns true if consumed.
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y).is_handled()
    }

    /// Handle pointer release
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.engine.handle_pointer_up();
    }

    /// Handle pointer cancel (device cancel, capture loss)
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) {
        self.engine.handle_pointer_cancel();
    }

    /// Start an icon drag explicitly (e.g. from a dedicated drag affordance)
    #[wasm_bindgen]
    pub fn begin_icon_drag(&mut self, x: f32, y: f32) {
        self.engine
            .begin_interaction(InteractionKind::DragIcon, PointerSample::new(x, y));
    }

    /// Start a frame drag explicitly
    #[wasm_bindgen]
    pub fn begin_window_drag(&mut self, x: f32, y: f32) {
        self.engine
            .begin_interaction(InteractionKind::DragWindow, PointerSample::new(x, y));
    }

    /// Start a corner resize explicitly
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, x: f32, y: f32) {
        self.engine
            .begin_interaction(InteractionKind::Resize, PointerSample::new(x, y));
    }

    /// Whether an interaction is currently capturing the pointer
    #[wasm_bindgen]
    pub fn is_interacting(&self) -> bool {
        self.engine.input.is_active()
    }

    /// CSS cursor for the region under the pointer
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        let presented = self.engine.screen_rect();
        self.engine
            .surface
            .region_in(presented, PointerSample::new(x, y).pos())
            .map(|r| r.cursor())
            .unwrap_or("default")
            .to_string()
    }

    // =========================================================================
    // Discrete actions
    // =========================================================================

    /// Zoom the frame in by one step
    #[wasm_bindgen]
    pub fn zoom_in(&mut self) {
        self.engine.zoom(ZoomDirection::In);
    }

    /// Zoom the frame out by one step
    #[wasm_bindgen]
    pub fn zoom_out(&mut self) {
        self.engine.zoom(ZoomDirection::Out);
    }

    /// Toggle the full-screen presentation
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self) {
        self.engine.toggle_fullscreen();
    }

    /// Toggle between collapsed icon and expanded frame
    #[wasm_bindgen]
    pub fn toggle_expanded(&mut self) {
        self.engine.toggle_expanded();
    }

    /// Whether the frame presentation is active
    #[wasm_bindgen]
    pub fn is_expanded(&self) -> bool {
        self.engine.surface.expanded
    }

    /// Whether full-screen presentation is active
    #[wasm_bindgen]
    pub fn is_fullscreen(&self) -> bool {
        self.engine.surface.fullscreen
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the presented state as JSON for rendering
    #[wasm_bindgen]
    pub fn get_surface_json(&self) -> String {
        let presented = self.engine.screen_rect();
        let surface = &self.engine.surface;
        serde_json::to_string(&serde_json::json!({
            "expanded": surface.expanded,
            "fullscreen": surface.fullscreen,
            "icon": { "x": surface.icon_pos.x, "y": surface.icon_pos.y },
            "frame": {
                "x": presented.x,
                "y": presented.y,
                "w": presented.width,
                "h": presented.height
            },
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
