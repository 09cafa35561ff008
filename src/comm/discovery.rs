//! Topologie- und Konfigurations-Discovery, einmalig beim Start konsumiert.

use serde::{Deserialize, Serialize};

/// Beschreibung eines Motion-Players samt angeschlossenem Motor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorInfo {
    /// Player-Id für Play/Stop-Requests
    pub id: usize,
    /// Index des Sollwert-Ausgangs im Werte-Stream
    pub setpoint_value_index: usize,
    /// Index des Istwert-Ausgangs im Werte-Stream
    pub actual_value_index: usize,
    /// Verfahrweg des Motors in Metern
    pub length: f64,
}

/// Beschreibung eines Backend-Blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub id: u64,
    pub name: String,
    pub block_type: String,
}

/// Laufzeit-Konfiguration des Backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfo {
    /// Takt-Intervall des Backends in Sekunden
    pub interval: f64,
}
