//! Editor-Controller für zentrale Event-Verarbeitung.

use crate::comm::BackendRequest;

use super::{handlers, EditorCommand, EditorIntent, EditorState};

/// Orchestriert Intents und Commands auf dem `EditorState`.
///
/// Rückgabewert sind die von den Commands erzeugten Backend-Requests;
/// die Shell führt die eigentliche asynchrone I/O aus und speist die
/// Antworten als `EditorIntent::BackendReplied` wieder ein.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<Vec<BackendRequest>> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        let mut requests = Vec::new();
        for command in commands {
            requests.extend(self.handle_command(state, command)?);
        }

        Ok(requests)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<Vec<BackendRequest>> {
        state.command_log.record(&command);

        let requests = match command {
            // === Motion-Lebenszyklus ===
            EditorCommand::LoadMotion { name, record } => {
                handlers::content::load_motion(state, name, record)
            }
            EditorCommand::SelectMotionPlayer { info } => {
                handlers::content::select_motion_player(state, info)
            }

            // === Editing ===
            EditorCommand::InsertKnot { pos_px } => handlers::editing::insert_knot(state, pos_px),
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),
            EditorCommand::ScaleCurve { factor } => handlers::editing::scale_curve(state, factor),
            EditorCommand::StretchCurve { factor } => {
                handlers::editing::stretch_curve(state, factor)?
            }
            EditorCommand::ShiftCurve { offset } => handlers::editing::shift_curve(state, offset),
            EditorCommand::LimitToTravel => handlers::editing::limit_to_travel(state),

            // === Viewport ===
            EditorCommand::ZoomIn => handlers::view::zoom_in(state),
            EditorCommand::ZoomOut => handlers::view::zoom_out(state),
            EditorCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(state, size)
            }
            EditorCommand::BeginDrag { pos_px } => handlers::view::drag_begin(state, pos_px),
            EditorCommand::UpdateDrag { delta_px } => handlers::view::drag_update(state, delta_px),
            EditorCommand::EndDrag => handlers::view::drag_end(state),

            // === Transport ===
            EditorCommand::StartPlayback => handlers::transport::start_playback(state)?,
            EditorCommand::PausePlayback => handlers::transport::pause_playback(state)?,
            EditorCommand::StartRecording => handlers::transport::start_recording(state)?,
            EditorCommand::StopRecording => handlers::transport::stop_recording(state)?,
            EditorCommand::SetLooping { looping } => {
                handlers::transport::set_looping(state, looping)
            }
            EditorCommand::PreviewPosition { position } => {
                handlers::transport::preview_position(state, position)
            }

            // === Backend-Eingänge ===
            EditorCommand::ApplyMotorTick { timestamp, values } => {
                handlers::transport::apply_motor_tick(state, timestamp, values)
            }
            EditorCommand::ApplyBehaviorNotice { active } => {
                handlers::transport::apply_behavior_notice(state, active)
            }
            EditorCommand::ApplyBackendReply { seq, reply } => {
                handlers::transport::apply_backend_reply(state, seq, reply)
            }
        };

        Ok(requests)
    }
}
