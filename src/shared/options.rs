//! Zentrale Konfiguration für den Choreo-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Anzeige ─────────────────────────────────────────────────────────

/// Fester Pixel-Rand des Viewports auf allen Seiten.
pub const DISPLAY_MARGIN_PX: f64 = 50.0;
/// Zoom-Schritt bei stufenweisem Zoom (Buttons / Shortcuts).
pub const ZOOM_BUTTON_STEP: f64 = 1.2;
/// Empfindlichkeit des Drag-Zooms: Faktor = exp(-k * deltaY).
pub const DRAG_ZOOM_SENSITIVITY: f64 = 0.01;

// ── Transport ───────────────────────────────────────────────────────

/// Takt-Intervall des Motor-Backends in Sekunden.
pub const TICK_INTERVAL: f64 = 0.010;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl gehaltener Snapshots.
pub const HISTORY_DEPTH: usize = 200;

// ── Motor ───────────────────────────────────────────────────────────

/// Verfahrweg des Standard-Linearmotors in Metern.
pub const DEFAULT_MOTOR_LENGTH: f64 = 0.040;

/// Laufzeit-Optionen des Editors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Pixel-Rand des Viewports
    pub margin_px: f64,
    /// Zoom-Schritt der Zoom-Buttons
    pub zoom_step: f64,
    /// Empfindlichkeit des Drag-Zooms
    pub drag_zoom_sensitivity: f64,
    /// Takt-Intervall des Backends in Sekunden
    pub interval: f64,
    /// Maximale History-Tiefe
    pub history_depth: usize,
    /// Verfahrweg des Motors (vertikale Verfahrgrenze) in Metern
    pub motor_length: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            margin_px: DISPLAY_MARGIN_PX,
            zoom_step: ZOOM_BUTTON_STEP,
            drag_zoom_sensitivity: DRAG_ZOOM_SENSITIVITY,
            interval: TICK_INTERVAL,
            history_depth: HISTORY_DEPTH,
            motor_length: DEFAULT_MOTOR_LENGTH,
        }
    }
}
