//! Editor-Intents: Eingaben aus UI und Backend-Stream ohne Mutationslogik.

use glam::DVec2;

use crate::comm::{BackendReply, BehaviorNotice, MotorInfo, MotorUpdate, SplineRecord};

/// Eingabe-Events des Editors. Intents beschreiben was passiert ist;
/// das Mapping auf mutierende Commands passiert zustandsabhängig in
/// `intent_mapping`.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Motion aus der Liste geladen (persistierter Datensatz)
    MotionLoaded { name: String, record: SplineRecord },
    /// Motion-Player ausgewählt (Discovery-Ergebnis)
    MotionPlayerSelected { info: MotorInfo },

    /// Doppelklick/Tap: Knoten an Pixel-Position einfügen
    KnotInsertRequested { pos_px: DVec2 },
    /// Letzte Aktion rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Ordinaten skalieren
    ScaleRequested { factor: f64 },
    /// Dauer strecken/stauchen
    StretchRequested { factor: f64 },
    /// Kurve zeitlich verschieben
    ShiftRequested { offset: f64 },
    /// Ordinaten auf den Motor-Verfahrweg klemmen
    LimitToTravelRequested,

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Anzeige-Größe hat sich geändert
    ViewportResized { size: DVec2 },
    /// Drag-Geste begonnen
    DragBegan { pos_px: DVec2 },
    /// Drag-Geste mit kumulativem Delta fortgesetzt
    DragMoved { delta_px: DVec2 },
    /// Drag-Geste beendet
    DragEnded,

    /// Play/Pause-Button
    PlayPauseToggled,
    /// Record-Button
    RecordToggled,
    /// Stop-Button
    StopRequested,
    /// Loop-Flag gesetzt/gelöscht
    LoopToggled { looping: bool },
    /// Cursor-Scrubbing im Paused-Zustand: Positionswert live an den
    /// Motor durchreichen
    LivePreviewRequested { position: f64 },

    /// Periodischer Motor-Tick aus dem Backend-Stream
    MotorTick { timestamp: f64, values: Vec<f64> },
    /// Behavior-Hinweis; aktiv erzwingt einen Stopp
    BehaviorNotice { active: bool },
    /// Antwort auf einen früheren Backend-Request
    BackendReplied { seq: u64, reply: BackendReply },
}

// Die Shell dekodiert den Backend-Stream in die `comm`-Typen und speist
// sie über diese Konvertierungen in den Event-Loop ein.

impl From<MotorUpdate> for EditorIntent {
    fn from(update: MotorUpdate) -> Self {
        EditorIntent::MotorTick {
            timestamp: update.timestamp,
            values: update.values,
        }
    }
}

impl From<BehaviorNotice> for EditorIntent {
    fn from(notice: BehaviorNotice) -> Self {
        EditorIntent::BehaviorNotice {
            active: notice.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_payloads_convert_to_intents() {
        let update: MotorUpdate =
            serde_json::from_str(r#"{"timestamp": 1.25, "values": [0.01, 0.02]}"#).unwrap();
        match EditorIntent::from(update) {
            EditorIntent::MotorTick { timestamp, values } => {
                assert_eq!(timestamp, 1.25);
                assert_eq!(values, vec![0.01, 0.02]);
            }
            other => panic!("Unerwarteter Intent: {other:?}"),
        }

        let notice: BehaviorNotice = serde_json::from_str(r#"{"active": true}"#).unwrap();
        assert!(matches!(
            EditorIntent::from(notice),
            EditorIntent::BehaviorNotice { active: true }
        ));
    }
}
