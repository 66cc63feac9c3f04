//! Floating surface state and hit testing

use crate::math::{Rect, Size, Vec2, OVERLAY_STYLE};
use super::{SurfaceConfig, SurfaceRegion};

/// The floating surface: a collapsed launcher icon or an expanded frame.
///
/// Geometry lives in screen pixels. `frame` is always the real frame; when
/// `fullscreen` is set, rendering overrides it with the viewport rect but
/// the stored value is left untouched so leaving full-screen restores the
/// prior position and size exactly.
#[derive(Clone, Debug)]
pub struct Surface {
    /// Top-left corner of the collapsed icon
    pub icon_pos: Vec2,
    /// Position and size of the expanded frame
    pub frame: Rect,
    /// Lower bound for the frame size
    pub min_size: Size,
    /// Expanded (frame) vs collapsed (icon) presentation
    pub expanded: bool,
    /// Full-screen presentation override
    pub fullscreen: bool,
}

impl Surface {
    /// Create a surface from a config
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            icon_pos: config.initial_icon_pos(),
            frame: config.initial_frame(),
            min_size: config.min_size,
            expanded: false,
            fullscreen: false,
        }
    }

    /// Move the icon to a new top-left corner.
    ///
    /// Not clamped: the icon may be dragged past the viewport edge.
    #[inline]
    pub fn move_icon(&mut self, pos: Vec2) {
        self.icon_pos = pos;
    }

    /// Move the frame to a new top-left corner, size unchanged
    #[inline]
    pub fn move_frame(&mut self, pos: Vec2) {
        self.frame = self.frame.at(pos);
    }

    /// Set the frame size, clamped to the minimum bounds
    #[inline]
    pub fn set_frame_size(&mut self, size: Size) {
        self.frame = self.frame.with_size(size.clamp_min(self.min_size));
    }

    /// Get the collapsed icon's hit rectangle
    pub fn icon_rect(&self) -> Rect {
        Rect::new(
            self.icon_pos.x,
            self.icon_pos.y,
            OVERLAY_STYLE.icon_size,
            OVERLAY_STYLE.icon_size,
        )
    }

    /// Get the header strip rectangle
    pub fn header_rect(&self) -> Rect {
        header_rect_in(self.frame)
    }

    /// Get the corner resize handle rectangle
    pub fn resize_handle_rect(&self) -> Rect {
        resize_handle_rect_in(self.frame)
    }

    /// Get the collapse button rectangle (rightmost in the header)
    pub fn close_button_rect(&self) -> Rect {
        button_rect_in(self.frame, 0)
    }

    /// Get the full-screen toggle button rectangle
    pub fn fullscreen_button_rect(&self) -> Rect {
        button_rect_in(self.frame, 1)
    }

    /// Get the zoom-in button rectangle
    pub fn zoom_in_button_rect(&self) -> Rect {
        button_rect_in(self.frame, 2)
    }

    /// Get the zoom-out button rectangle
    pub fn zoom_out_button_rect(&self) -> Rect {
        button_rect_in(self.frame, 3)
    }

    /// Find which region of the surface is at a screen position, hit
    /// testing against the stored frame.
    pub fn region_at(&self, pos: Vec2) -> Option<SurfaceRegion> {
        self.region_in(self.frame, pos)
    }

    /// Find which region is at a screen position, hit testing against an
    /// explicit frame rect.
    ///
    /// The engine passes the presented rect here, which is the viewport
    /// while full-screen is active. Buttons take priority over the header
    /// strip they sit in, and the resize handle over the body, matching
    /// what the user sees. The handle is not offered while full-screen
    /// (resize entry is disabled there).
    pub fn region_in(&self, frame: Rect, pos: Vec2) -> Option<SurfaceRegion> {
        if !self.expanded {
            return self.icon_rect().contains(pos).then_some(SurfaceRegion::Icon);
        }

        if !frame.contains(pos) {
            return None;
        }

        for (slot, region) in [
            SurfaceRegion::CloseButton,
            SurfaceRegion::FullScreenButton,
            SurfaceRegion::ZoomInButton,
            SurfaceRegion::ZoomOutButton,
        ]
        .into_iter()
        .enumerate()
        {
            if button_rect_in(frame, slot as u32).contains(pos) {
                return Some(region);
            }
        }

        if !self.fullscreen && resize_handle_rect_in(frame).contains(pos) {
            return Some(SurfaceRegion::ResizeHandle);
        }
        if header_rect_in(frame).contains(pos) {
            return Some(SurfaceRegion::Header);
        }
        Some(SurfaceRegion::Body)
    }
}

// =============================================================================
// Chrome rect helpers
// =============================================================================

/// Header strip rect for a frame
fn header_rect_in(frame: Rect) -> Rect {
    Rect::new(frame.x, frame.y, frame.width, OVERLAY_STYLE.header_height)
}

/// Corner resize handle rect for a frame
fn resize_handle_rect_in(frame: Rect) -> Rect {
    let handle = OVERLAY_STYLE.resize_handle_size;
    Rect::new(
        frame.right() - handle,
        frame.bottom() - handle,
        handle,
        handle,
    )
}

/// Header button rect by slot, counted from the right edge
fn button_rect_in(frame: Rect, slot: u32) -> Rect {
    let n = slot as f32;
    let x = frame.x + frame.width
        - OVERLAY_STYLE.button_margin
        - OVERLAY_STYLE.button_size * (n + 1.0)
        - OVERLAY_STYLE.button_spacing * n;
    let y = frame.y + (OVERLAY_STYLE.header_height - OVERLAY_STYLE.button_size) / 2.0;
    Rect::new(x, y, OVERLAY_STYLE.button_size, OVERLAY_STYLE.button_size)
}
