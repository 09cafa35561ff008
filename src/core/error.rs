//! Typisierte Fehler der Geometrie-Schicht.

use thiserror::Error;

/// Fehler bei Konstruktion oder Transformation eines Splines.
///
/// Invarianten-Verletzungen werden an der Konstruktions-Grenze abgewiesen,
/// niemals still korrigiert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Spline braucht mindestens 2 Knoten, {0} gegeben")]
    TooFewKnots(usize),

    #[error("Knoten müssen strikt steigend sein (Index {index}: {previous} -> {current})")]
    NonIncreasingKnots {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("Koeffizienten-Form passt nicht: {0}")]
    ShapeMismatch(String),

    #[error("Knoten-Zeit {time} liegt außerhalb des gültigen Bereichs ({start}..{end})")]
    KnotOutOfRange { time: f64, start: f64, end: f64 },

    #[error("Ungültiger Faktor {0}: muss endlich und > 0 sein")]
    InvalidFactor(f64),
}
