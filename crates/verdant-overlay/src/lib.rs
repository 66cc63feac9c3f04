//! Floating Interactive Surface for Verdant
//!
//! This crate provides the interaction core of the floating assistant
//! widget:
//! - Collapsed-icon and expanded-frame geometry with hit regions
//! - A unified mouse/touch drag/resize state machine
//! - Discrete zoom, full-screen, and collapse/expand actions
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Screen-space geometry types (`Vec2`, `Size`, `Rect`)
//! - [`surface`]: Surface state, chrome metrics, and hit testing
//! - [`input`]: Normalized pointer samples and the interaction router
//! - `engine`: The [`OverlayEngine`] coordinating all of the above
//!
//! ## Example
//!
//! ```rust
//! use verdant_overlay::OverlayEngine;
//!
//! let mut engine = OverlayEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! engine.toggle_expanded();
//! engine.handle_pointer_down(1650.0, 640.0);
//! engine.handle_pointer_move(1600.0, 700.0);
//! engine.handle_pointer_up();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust core**: all state transitions are synchronous plain Rust,
//!    testable without a browser
//! 2. **Snapshot deltas**: moves recompute geometry from the
//!    start-of-interaction snapshot, so dropped events cannot cause drift
//! 3. **Clamp, never reject**: out-of-range geometry requests are clamped;
//!    no operation fails
//! 4. **Minimal dependencies**: the core depends on serde only

pub mod math;
pub mod surface;
pub mod input;

mod engine;
mod viewport;

pub use engine::{OverlayEngine, ZoomDirection, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
pub use input::{InputResult, InteractionKind, InteractionState, PointerSample};
pub use math::{Rect, Size, Vec2};
pub use surface::{Surface, SurfaceConfig, SurfaceRegion, MIN_HEIGHT, MIN_WIDTH};
pub use viewport::Viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;
