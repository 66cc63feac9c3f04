//! Surface region for hit testing

/// Region of the surface under a pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRegion {
    /// Collapsed launcher icon (draggable)
    Icon,
    /// Header strip of the expanded frame (draggable)
    Header,
    /// Content area of the expanded frame
    Body,
    /// Bottom-right corner resize handle
    ResizeHandle,
    /// Collapse button in the header
    CloseButton,
    /// Full-screen toggle button in the header
    FullScreenButton,
    /// Zoom-in button in the header
    ZoomInButton,
    /// Zoom-out button in the header
    ZoomOutButton,
}

impl SurfaceRegion {
    /// Check if this is a designated control region.
    ///
    /// Controls consume their own pointer-down and never start a drag.
    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            SurfaceRegion::CloseButton
                | SurfaceRegion::FullScreenButton
                | SurfaceRegion::ZoomInButton
                | SurfaceRegion::ZoomOutButton
        )
    }

    /// Check if a drag interaction may start from this region
    #[inline]
    pub fn is_drag_origin(&self) -> bool {
        matches!(
            self,
            SurfaceRegion::Icon | SurfaceRegion::Header | SurfaceRegion::ResizeHandle
        )
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            SurfaceRegion::Icon | SurfaceRegion::Header => "move",
            SurfaceRegion::Body => "default",
            SurfaceRegion::ResizeHandle => "nwse-resize",
            SurfaceRegion::CloseButton
            | SurfaceRegion::FullScreenButton
            | SurfaceRegion::ZoomInButton
            | SurfaceRegion::ZoomOutButton => "pointer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_are_not_drag_origins() {
        let controls = [
            SurfaceRegion::CloseButton,
            SurfaceRegion::FullScreenButton,
            SurfaceRegion::ZoomInButton,
            SurfaceRegion::ZoomOutButton,
        ];
        for region in controls {
            assert!(region.is_control());
            assert!(!region.is_drag_origin());
        }
    }

    #[test]
    fn test_drag_origins() {
        assert!(SurfaceRegion::Icon.is_drag_origin());
        assert!(SurfaceRegion::Header.is_drag_origin());
        assert!(SurfaceRegion::ResizeHandle.is_drag_origin());
        assert!(!SurfaceRegion::Body.is_drag_origin());
    }
}
