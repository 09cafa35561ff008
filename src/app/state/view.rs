//! View-bezogener Editor-Zustand.

use glam::DVec2;

use crate::core::ViewportTransform;
use crate::shared::options;
use crate::ui::PanZoomController;

/// View-Zustand: Viewport-Transform und laufende Drag-Geste.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Abbildung Kurvenraum <-> Anzeige-Pixel
    pub transform: ViewportTransform,
    /// Drag-Pan/Zoom-Controller
    pub pan_zoom: PanZoomController,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            transform: ViewportTransform::new(
                DVec2::new(800.0, 600.0),
                options::DISPLAY_MARGIN_PX,
            ),
            pan_zoom: PanZoomController::new(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
