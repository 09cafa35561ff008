//! Handler für Viewport und Drag-Gesten.

use glam::DVec2;

use crate::app::{use_cases, EditorState};
use crate::comm::BackendRequest;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut EditorState) -> Vec<BackendRequest> {
    use_cases::viewport::zoom_in(state);
    Vec::new()
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut EditorState) -> Vec<BackendRequest> {
    use_cases::viewport::zoom_out(state);
    Vec::new()
}

/// Aktualisiert die Anzeige-Größe.
pub fn set_viewport_size(state: &mut EditorState, size: DVec2) -> Vec<BackendRequest> {
    use_cases::viewport::resize(state, size);
    Vec::new()
}

/// Beginnt eine Drag-Geste an der Pixel-Position.
pub fn drag_begin(state: &mut EditorState, pos_px: DVec2) -> Vec<BackendRequest> {
    use_cases::viewport::drag_begin(state, pos_px);
    Vec::new()
}

/// Wendet das kumulative Drag-Delta auf den Viewport an.
pub fn drag_update(state: &mut EditorState, delta_px: DVec2) -> Vec<BackendRequest> {
    use_cases::viewport::drag_update(state, delta_px);
    Vec::new()
}

/// Beendet die laufende Drag-Geste.
pub fn drag_end(state: &mut EditorState) -> Vec<BackendRequest> {
    use_cases::viewport::drag_end(state);
    Vec::new()
}
