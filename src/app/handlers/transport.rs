//! Handler für Transport und Backend-Eingänge.

use crate::app::{use_cases, EditorState};
use crate::comm::{BackendReply, BackendRequest};

/// Startet das Playback der aktuellen Arbeitskopie.
pub fn start_playback(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    use_cases::transport::start_playback(state)
}

/// Pausiert das laufende Playback.
pub fn pause_playback(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    use_cases::transport::pause_playback(state)
}

/// Beginnt eine Trajektorien-Aufnahme.
pub fn start_recording(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    use_cases::transport::start_recording(state)
}

/// Beendet die Aufnahme und stößt den Spline-Fit an.
pub fn stop_recording(state: &mut EditorState) -> anyhow::Result<Vec<BackendRequest>> {
    use_cases::transport::stop_recording(state)
}

/// Setzt das Loop-Flag.
pub fn set_looping(state: &mut EditorState, looping: bool) -> Vec<BackendRequest> {
    use_cases::transport::set_looping(state, looping);
    Vec::new()
}

/// Reicht einen Positionswert als Live-Vorschau an den Player durch.
pub fn preview_position(state: &mut EditorState, position: f64) -> Vec<BackendRequest> {
    use_cases::transport::preview_position(state, position)
}

/// Verarbeitet einen periodischen Motor-Tick.
pub fn apply_motor_tick(
    state: &mut EditorState,
    timestamp: f64,
    values: Vec<f64>,
) -> Vec<BackendRequest> {
    use_cases::transport::apply_motor_tick(state, timestamp, values)
}

/// Verarbeitet einen Behavior-Hinweis (Safety-Override).
pub fn apply_behavior_notice(state: &mut EditorState, active: bool) -> Vec<BackendRequest> {
    use_cases::transport::apply_behavior_notice(state, active)
}

/// Verarbeitet eine Backend-Antwort; verspätete Antworten werden verworfen.
pub fn apply_backend_reply(
    state: &mut EditorState,
    seq: u64,
    reply: BackendReply,
) -> Vec<BackendRequest> {
    use_cases::transport::apply_backend_reply(state, seq, reply)
}
