//! Handler für Kurven-Bearbeitung.

use glam::DVec2;

use crate::app::{use_cases, EditorState};
use crate::comm::BackendRequest;

/// Fügt an der Pixel-Position einen Knoten ein.
pub fn insert_knot(state: &mut EditorState, pos_px: DVec2) -> Vec<BackendRequest> {
    use_cases::editing::insert_knot(state, pos_px);
    Vec::new()
}

/// Skaliert die Kontrollordinaten der Arbeitskopie.
pub fn scale_curve(state: &mut EditorState, factor: f64) -> Vec<BackendRequest> {
    use_cases::editing::scale_curve(state, factor);
    Vec::new()
}

/// Streckt/staucht die Dauer der Arbeitskopie.
pub fn stretch_curve(state: &mut EditorState, factor: f64) -> anyhow::Result<Vec<BackendRequest>> {
    use_cases::editing::stretch_curve(state, factor)?;
    Ok(Vec::new())
}

/// Verschiebt die Arbeitskopie zeitlich.
pub fn shift_curve(state: &mut EditorState, offset: f64) -> Vec<BackendRequest> {
    use_cases::editing::shift_curve(state, offset);
    Vec::new()
}

/// Klemmt die Ordinaten auf den Motor-Verfahrweg.
pub fn limit_to_travel(state: &mut EditorState) -> Vec<BackendRequest> {
    use_cases::editing::limit_to_travel(state);
    Vec::new()
}
