//! Geometry types for the overlay surface
//!
//! Screen-space math only: the overlay lives in viewport pixels, so there
//! is no camera or canvas transform here.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;

/// Fixed chrome metrics for the expanded surface frame.
pub struct OverlayStyle {
    /// Height of the draggable header strip
    pub header_height: f32,
    /// Side length of the square header buttons
    pub button_size: f32,
    /// Gap between the last button and the frame edge
    pub button_margin: f32,
    /// Gap between adjacent buttons
    pub button_spacing: f32,
    /// Side length of the corner resize handle
    pub resize_handle_size: f32,
    /// Side length of the collapsed launcher icon
    pub icon_size: f32,
}

/// Metrics shared by hit testing and rendering.
pub const OVERLAY_STYLE: OverlayStyle = OverlayStyle {
    header_height: 36.0,
    button_size: 22.0,
    button_margin: 8.0,
    button_spacing: 6.0,
    resize_handle_size: 18.0,
    icon_size: 56.0,
};
