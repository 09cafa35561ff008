//! Use-Case-Funktionen für den Motion-Lebenszyklus.

use glam::DVec2;

use crate::app::state::TransportState;
use crate::app::EditorState;
use crate::comm::{BackendRequest, MotorInfo, RequestKind, SplineRecord};

/// Lädt einen persistierten Datensatz als neue Arbeitskopie.
///
/// Ein fehlerhafter Datensatz ist ein externer Eingabefehler: die Ladung
/// wird verworfen und als Hinweis gemeldet, der Editor-Zustand bleibt
/// unangetastet. Läuft gerade ein Playback, wird es gestoppt.
pub fn load_motion(
    state: &mut EditorState,
    name: String,
    record: SplineRecord,
) -> Vec<BackendRequest> {
    let spline = match record.to_spline() {
        Ok(spline) => spline,
        Err(err) => {
            log::warn!("Motion {name:?} nicht ladbar: {err}");
            state.notify(format!("Motion {name:?} ist fehlerhaft: {err}"));
            return Vec::new();
        }
    };

    let mut requests = Vec::new();
    if state.transport.state == TransportState::Playing {
        state.transport.force_pause();
        if let Some(info) = state.motion_player.as_ref() {
            let seq = state.pending.next();
            state.pending.stop = Some(seq);
            requests.push(BackendRequest {
                seq,
                kind: RequestKind::Stop { player_id: info.id },
            });
        }
    }
    state.pending.play = None;

    frame_curve(state, &spline);
    state.transport.duration = spline.duration();
    state.transport.position = 0.0;
    state.history.clear();
    state.history.capture(spline.clone());
    state.spline = Some(spline);
    state.motion_name = Some(name);
    state.needs_redraw = true;

    requests
}

/// Wählt den Motion-Player für alle folgenden Play/Stop-Requests.
pub fn select_motion_player(state: &mut EditorState, info: MotorInfo) -> Vec<BackendRequest> {
    log::info!("Motion-Player {} ausgewählt (Länge {} m)", info.id, info.length);
    state.motion_player = Some(info);
    Vec::new()
}

/// Rahmt den Viewport auf die Kurve ein. Flache Kurven haben eine
/// degenerierte Bounding-Box; die vertikale Ausdehnung wird dann auf den
/// Motor-Verfahrweg aufgezogen.
fn frame_curve(state: &mut EditorState, spline: &crate::core::Spline) {
    let mut bbox = spline.bbox();
    if bbox.height() <= 0.0 {
        let length = state
            .motion_player
            .as_ref()
            .map(|info| info.length)
            .unwrap_or(state.options.motor_length);
        bbox.expand_point(DVec2::new(bbox.ll.x, 0.0));
        bbox.expand_point(DVec2::new(bbox.ur.x, length));
    }
    state.view.transform.frame(bbox);
}
