//! Handler für Motion-Laden und Player-Auswahl.

use crate::app::{use_cases, EditorState};
use crate::comm::{BackendRequest, MotorInfo, SplineRecord};

/// Lädt einen persistierten Motion-Datensatz als Arbeitskopie.
pub fn load_motion(
    state: &mut EditorState,
    name: String,
    record: SplineRecord,
) -> Vec<BackendRequest> {
    use_cases::content::load_motion(state, name, record)
}

/// Wählt den Motion-Player für Play/Stop-Requests aus.
pub fn select_motion_player(state: &mut EditorState, info: MotorInfo) -> Vec<BackendRequest> {
    use_cases::content::select_motion_player(state, info)
}
