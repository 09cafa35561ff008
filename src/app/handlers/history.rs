//! Handler für Undo/Redo-Operationen.

use crate::app::EditorState;
use crate::comm::BackendRequest;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut EditorState) -> Vec<BackendRequest> {
    if let Some(prev) = state.history.undo().cloned() {
        apply_snapshot(state, prev);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    Vec::new()
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) -> Vec<BackendRequest> {
    if let Some(next) = state.history.redo().cloned() {
        apply_snapshot(state, next);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    Vec::new()
}

/// Stellt einen Snapshot als Arbeitskopie wieder her.
fn apply_snapshot(state: &mut EditorState, snapshot: crate::core::Spline) {
    state.transport.duration = snapshot.duration();
    state.transport.position = state.transport.position.min(snapshot.duration());
    state.spline = Some(snapshot);
    state.needs_redraw = true;
}
