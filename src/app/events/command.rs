//! Editor-Commands: mutierende Schritte auf dem `EditorState`.

use glam::DVec2;

use crate::comm::{BackendReply, MotorInfo, SplineRecord};

/// Ausführbare Commands. Jeder Command mutiert genau einen Aspekt des
/// States und liefert ggf. Backend-Requests als Effekte zurück.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    // === Motion-Lebenszyklus ===
    LoadMotion { name: String, record: SplineRecord },
    SelectMotionPlayer { info: MotorInfo },

    // === Editing ===
    InsertKnot { pos_px: DVec2 },
    Undo,
    Redo,
    ScaleCurve { factor: f64 },
    StretchCurve { factor: f64 },
    ShiftCurve { offset: f64 },
    LimitToTravel,

    // === Viewport ===
    ZoomIn,
    ZoomOut,
    SetViewportSize { size: DVec2 },
    BeginDrag { pos_px: DVec2 },
    UpdateDrag { delta_px: DVec2 },
    EndDrag,

    // === Transport ===
    StartPlayback,
    PausePlayback,
    StartRecording,
    StopRecording,
    SetLooping { looping: bool },
    PreviewPosition { position: f64 },

    // === Backend-Eingänge ===
    ApplyMotorTick { timestamp: f64, values: Vec<f64> },
    ApplyBehaviorNotice { active: bool },
    ApplyBackendReply { seq: u64, reply: BackendReply },
}
