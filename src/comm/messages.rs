//! Nachrichten-Vertrag zum Motor-Backend.
//!
//! Der Editor-Kern erzeugt `BackendRequest`s als Effekte; die Shell führt
//! die eigentliche (asynchrone) I/O aus und liefert Antworten als
//! `BackendReply` mit der Sequenznummer des Requests zurück. Periodische
//! Stream-Nachrichten (Motor-Ticks, Behavior-Hinweise) kommen ohne
//! Sequenznummer über denselben Event-Loop.

use serde::{Deserialize, Serialize};

use super::SplineRecord;

/// Ein Messpunkt einer aufgezeichneten Trajektorie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Zeitstempel in Sekunden (Backend-Uhr)
    pub timestamp: f64,
    /// Messwerte pro Kanal
    pub values: Vec<f64>,
}

/// Ausgehender Request an das Backend, mit monotoner Sequenznummer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRequest {
    /// Monotone Sequenznummer; Antworten tragen dieselbe Nummer
    pub seq: u64,
    pub kind: RequestKind,
}

/// Art des Requests, semantisch deckungsgleich mit der Backend-API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Playback des Snapshots starten
    Play {
        record: SplineRecord,
        player_id: usize,
        looping: bool,
        offset: f64,
    },
    /// Playback eines Players stoppen (idempotent)
    Stop { player_id: usize },
    /// Einzelnen Positionswert direkt an den Player durchreichen
    /// (Scrubbing im Paused-Zustand)
    LivePreview { player_id: usize, position: f64 },
    /// Alle Player stoppen
    StopAll,
    /// Motor-Steuerung deaktivieren (Klammer um eine Aufnahme)
    DisableMotors,
    /// Motor-Steuerung wieder aktivieren
    EnableMotors,
    /// Aufgezeichnete Trajektorie in einen Spline fitten
    FitSpline { trajectory: Vec<TrajectorySample> },
}

/// Antwort des Backends auf einen Request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendReply {
    /// Playback läuft; `start_time` ist der Uhr-Anker des Backends
    PlayStarted { start_time: f64 },
    /// Stop bestätigt
    Stopped,
    MotorsDisabled,
    MotorsEnabled,
    /// Fit erfolgreich, Ergebnis als persistierter Datensatz
    SplineFitted { record: SplineRecord },
    /// Request fehlgeschlagen; der Kern rollt den Zustand zurück
    Failed { message: String },
}

/// Periodischer Motor-Tick aus dem Backend-Stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorUpdate {
    /// Monotoner Zeitstempel in Sekunden
    pub timestamp: f64,
    /// Aktuelle Kanal-Messwerte
    pub values: Vec<f64>,
}

/// Behavior-Hinweis: ein aktives Behavior erzwingt einen Stopp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorNotice {
    pub active: bool,
}
