//! Pointer-Drag-Verarbeitung: Pan und Zoom auf dem Kurven-Viewport.

use glam::DVec2;

use crate::core::{BoundingBox, ViewportTransform};

/// Schnappschuss einer laufenden Drag-Geste.
#[derive(Debug, Clone)]
struct DragGesture {
    /// Viewport-Kopie zum Gestenbeginn
    start_viewport: BoundingBox,
    /// Fokus-Zeitpunkt in Kurvenzeit, bleibt unter Zoom fixiert
    focal: f64,
}

/// Drei-Phasen-Drag-Controller: `begin` friert Viewport und Fokuspunkt
/// ein, `update` rechnet das kumulative Pointer-Delta in einen neuen
/// Viewport um, `end` verwirft den Schnappschuss.
///
/// Horizontale Deltas verschieben den Viewport (Pan), vertikale Deltas
/// zoomen multiplikativ um den Fokuspunkt. Rein horizontales Ziehen pannt
/// ohne Zoom, rein vertikales Ziehen zoomt ohne Pan.
#[derive(Debug, Clone, Default)]
pub struct PanZoomController {
    gesture: Option<DragGesture>,
}

impl PanZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Läuft gerade eine Geste?
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Gestenbeginn: Pointer-Projektion in den Kurvenraum, Fokuspunkt auf
    /// die horizontale Viewport-Ausdehnung geklemmt, Viewport kopiert.
    pub fn begin(&mut self, pos_px: DVec2, transform: &ViewportTransform) {
        let viewport = *transform.viewport();
        let curve = transform.inverse_point(pos_px);
        let focal = curve.x.clamp(viewport.ll.x, viewport.ur.x);
        self.gesture = Some(DragGesture {
            start_viewport: viewport,
            focal,
        });
    }

    /// Kumulatives Pointer-Delta -> neuer Viewport. `None` ohne aktive
    /// Geste (z.B. Move-Events nach einem Abbruch).
    ///
    /// Horizontal-Schub: `-delta.x * viewportBreite / displayBreite`.
    /// Zoom-Faktor: `exp(-k * delta.y)`, angewendet auf beide horizontale
    /// Kanten um den Fokuspunkt.
    pub fn update(
        &self,
        delta_px: DVec2,
        display_width: f64,
        zoom_sensitivity: f64,
    ) -> Option<BoundingBox> {
        let gesture = self.gesture.as_ref()?;
        let viewport = &gesture.start_viewport;
        if display_width <= 0.0 {
            return None;
        }

        let shift = -delta_px.x * viewport.width() / display_width;
        let factor = (-zoom_sensitivity * delta_px.y).exp();

        // Erst schieben, dann um den Fokus reskalieren: so bleibt reines
        // Horizontal-Ziehen ein Pan und reines Vertikal-Ziehen ein Zoom
        // mit fixiertem Fokus-Pixel.
        let left = gesture.focal + factor * (viewport.ll.x + shift - gesture.focal);
        let right = gesture.focal + factor * (viewport.ur.x + shift - gesture.focal);

        Some(BoundingBox::new(
            DVec2::new(left, viewport.ll.y),
            DVec2::new(right, viewport.ur.y),
        ))
    }

    /// Gestenende: Schnappschuss verwerfen.
    pub fn end(&mut self) {
        self.gesture = None;
    }
}
