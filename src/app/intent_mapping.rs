//! Mapping von UI-Intents auf mutierende Editor-Commands.
//!
//! Transport-Toggles werden hier gegen den aktuellen Zustand aufgelöst, so
//! dass aus legalen Eingaben niemals ein ungültiger Übergang entsteht. Was
//! danach noch als ungültiger Übergang durchschlägt, ist ein Logikfehler
//! und wird im Transport hart gemeldet.

use super::state::TransportState;
use super::{EditorCommand, EditorIntent, EditorState};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer Commands.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::MotionLoaded { name, record } => {
            if state.transport.state == TransportState::Recording {
                // Während einer Aufnahme wird nicht umgeladen
                log::warn!("MotionLoaded während Aufnahme ignoriert");
                return Vec::new();
            }
            vec![EditorCommand::LoadMotion { name, record }]
        }
        EditorIntent::MotionPlayerSelected { info } => {
            vec![EditorCommand::SelectMotionPlayer { info }]
        }

        EditorIntent::KnotInsertRequested { pos_px } => {
            vec![EditorCommand::InsertKnot { pos_px }]
        }
        EditorIntent::UndoRequested => {
            if state.can_undo() {
                vec![EditorCommand::Undo]
            } else {
                Vec::new()
            }
        }
        EditorIntent::RedoRequested => {
            if state.can_redo() {
                vec![EditorCommand::Redo]
            } else {
                Vec::new()
            }
        }
        EditorIntent::ScaleRequested { factor } => vec![EditorCommand::ScaleCurve { factor }],
        EditorIntent::StretchRequested { factor } => {
            if factor.is_finite() && factor > 0.0 {
                vec![EditorCommand::StretchCurve { factor }]
            } else {
                Vec::new()
            }
        }
        EditorIntent::ShiftRequested { offset } => vec![EditorCommand::ShiftCurve { offset }],
        EditorIntent::LimitToTravelRequested => vec![EditorCommand::LimitToTravel],

        EditorIntent::ZoomInRequested => vec![EditorCommand::ZoomIn],
        EditorIntent::ZoomOutRequested => vec![EditorCommand::ZoomOut],
        EditorIntent::ViewportResized { size } => vec![EditorCommand::SetViewportSize { size }],
        EditorIntent::DragBegan { pos_px } => vec![EditorCommand::BeginDrag { pos_px }],
        EditorIntent::DragMoved { delta_px } => vec![EditorCommand::UpdateDrag { delta_px }],
        EditorIntent::DragEnded => vec![EditorCommand::EndDrag],

        EditorIntent::PlayPauseToggled => match state.transport.state {
            TransportState::Paused => vec![EditorCommand::StartPlayback],
            TransportState::Playing => vec![EditorCommand::PausePlayback],
            // Aufnahme beendet nur der Stop/Record-Button
            TransportState::Recording => Vec::new(),
        },
        EditorIntent::RecordToggled => match state.transport.state {
            TransportState::Paused => vec![EditorCommand::StartRecording],
            TransportState::Recording => vec![EditorCommand::StopRecording],
            TransportState::Playing => Vec::new(),
        },
        EditorIntent::StopRequested => match state.transport.state {
            TransportState::Playing => vec![EditorCommand::PausePlayback],
            TransportState::Recording => vec![EditorCommand::StopRecording],
            // Stop ist idempotent
            TransportState::Paused => Vec::new(),
        },
        EditorIntent::LoopToggled { looping } => vec![EditorCommand::SetLooping { looping }],
        EditorIntent::LivePreviewRequested { position } => {
            // Nur im Paused-Zustand; während Playback/Aufnahme schreibt
            // das Backend selbst auf die Motoren
            if state.transport.state == TransportState::Paused && position.is_finite() {
                vec![EditorCommand::PreviewPosition { position }]
            } else {
                Vec::new()
            }
        }

        EditorIntent::MotorTick { timestamp, values } => {
            vec![EditorCommand::ApplyMotorTick { timestamp, values }]
        }
        EditorIntent::BehaviorNotice { active } => {
            vec![EditorCommand::ApplyBehaviorNotice { active }]
        }
        EditorIntent::BackendReplied { seq, reply } => {
            vec![EditorCommand::ApplyBackendReply { seq, reply }]
        }
    }
}
