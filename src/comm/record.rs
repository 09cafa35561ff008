//! Persistiertes Spline-Format des Motion-Backends.
//!
//! Das Wire-Format entspricht der serialisierten BPoly des Backends:
//! Koeffizienten `[order][segments]` (skalar bei einem Kanal, sonst mit
//! Kanal-Achse), strikt steigende Knoten, optionales Extrapolations-Flag
//! und die Achsen-Nummer des bearbeiteten Kanals.

use serde::{Deserialize, Serialize};

use crate::core::{Spline, SplineError};

/// Eine Koeffizienten-Zelle: skalar (ein Kanal) oder Kanal-Vektor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoefficientCell {
    Scalar(f64),
    Channels(Vec<f64>),
}

/// Persistierter Spline-Datensatz, JSON-kompatibel zum Backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineRecord {
    /// Typ-Marker des Serialisierers ("BPoly")
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Bézier-Kontrollordinaten, Form `[order][segments]`
    pub coefficients: Vec<Vec<CoefficientCell>>,
    /// Strikt steigende Knoten-Zeiten
    pub knots: Vec<f64>,
    /// Extrapolations-Flag des Backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrapolate: Option<bool>,
    /// Bearbeitete Achse / Kanal
    #[serde(default)]
    pub axis: i32,
}

fn default_kind() -> String {
    "BPoly".to_string()
}

impl SplineRecord {
    /// Validiert den Datensatz und baut den Domänen-Spline.
    pub fn to_spline(&self) -> Result<Spline, SplineError> {
        let coeffs = self
            .coefficients
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        CoefficientCell::Scalar(v) => vec![*v],
                        CoefficientCell::Channels(vs) => vs.clone(),
                    })
                    .collect()
            })
            .collect();
        Spline::new(coeffs, self.knots.clone())
    }

    /// Serialisiert einen Spline; Ein-Kanal-Kurven schreiben skalare
    /// Zellen ohne Kanal-Achse, wie das Backend.
    pub fn from_spline(spline: &Spline) -> Self {
        let single_channel = spline.n_channels() == 1;
        let coefficients = (0..spline.order())
            .map(|j| {
                (0..spline.n_segments())
                    .map(|seg| {
                        if single_channel {
                            CoefficientCell::Scalar(spline.control_point(j, seg, 0))
                        } else {
                            CoefficientCell::Channels(
                                (0..spline.n_channels())
                                    .map(|ch| spline.control_point(j, seg, ch))
                                    .collect(),
                            )
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            kind: default_kind(),
            coefficients,
            knots: spline.knots().to_vec(),
            extrapolate: None,
            axis: 0,
        }
    }
}
