//! Stückweise polynomialer Spline in Bézier-Form (BPoly).
//!
//! Knoten partitionieren die Zeitachse in Segmente; pro Segment und Kanal
//! liegen `order` Bézier-Kontrollordinaten vor. Alle Transformationen sind
//! persistent: sie liefern einen neuen Spline und mutieren nie in place,
//! damit History-Snapshots gefahrlos gehalten werden können.

use glam::DVec2;

use super::{BoundingBox, SplineError};

/// Relative Toleranz beim Einfügen von Knoten: neue Knoten dürfen nicht
/// näher als dieser Anteil der Segmentbreite an einen Nachbarknoten rücken.
const KNOT_EPSILON: f64 = 1e-9;

/// Stückweise polynomialer Spline mit Bézier-Kontrollordinaten.
///
/// Koeffizienten-Form: `[order][segments][channels]`. `order = degree + 1`,
/// in der Praxis Grad 0 bis 3.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    knots: Vec<f64>,
    coeffs: Vec<Vec<Vec<f64>>>,
}

impl Spline {
    /// Erstellt einen Spline und prüft alle Invarianten:
    /// mindestens 2 strikt steigende Knoten, führende Koeffizienten-Dimension
    /// = order, zweite Dimension = Segmentanzahl, konsistente Kanalanzahl.
    pub fn new(coeffs: Vec<Vec<Vec<f64>>>, knots: Vec<f64>) -> Result<Self, SplineError> {
        if knots.len() < 2 {
            return Err(SplineError::TooFewKnots(knots.len()));
        }

        for (i, pair) in knots.windows(2).enumerate() {
            if !(pair[0] < pair[1]) {
                return Err(SplineError::NonIncreasingKnots {
                    index: i + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        let n_segments = knots.len() - 1;
        if coeffs.is_empty() {
            return Err(SplineError::ShapeMismatch("order 0 (keine Zeilen)".into()));
        }

        let n_channels = coeffs
            .first()
            .and_then(|row| row.first())
            .map(Vec::len)
            .unwrap_or(0);
        if n_channels == 0 {
            return Err(SplineError::ShapeMismatch("0 Kanäle".into()));
        }

        for (j, row) in coeffs.iter().enumerate() {
            if row.len() != n_segments {
                return Err(SplineError::ShapeMismatch(format!(
                    "Zeile {} hat {} Segmente, erwartet {}",
                    j,
                    row.len(),
                    n_segments
                )));
            }
            for (i, cell) in row.iter().enumerate() {
                if cell.len() != n_channels {
                    return Err(SplineError::ShapeMismatch(format!(
                        "Segment {} in Zeile {} hat {} Kanäle, erwartet {}",
                        i,
                        j,
                        cell.len(),
                        n_channels
                    )));
                }
            }
        }

        Ok(Self { knots, coeffs })
    }

    /// Flacher kubischer Null-Spline mit Knoten `[0, 1]`.
    ///
    /// Entspricht dem Startzustand einer neu angelegten Motion.
    pub fn flat(n_channels: usize) -> Self {
        let n_channels = n_channels.max(1);
        let coeffs = vec![vec![vec![0.0; n_channels]]; 4];
        Self {
            coeffs,
            knots: vec![0.0, 1.0],
        }
    }

    /// Anzahl Kontrollordinaten pro Segment (`degree + 1`).
    pub fn order(&self) -> usize {
        self.coeffs.len()
    }

    /// Polynomgrad pro Segment.
    pub fn degree(&self) -> usize {
        self.order() - 1
    }

    /// Anzahl Segmente.
    pub fn n_segments(&self) -> usize {
        self.knots.len() - 1
    }

    /// Anzahl Kanäle.
    pub fn n_channels(&self) -> usize {
        self.coeffs[0][0].len()
    }

    /// Erster Knoten.
    pub fn start(&self) -> f64 {
        self.knots[0]
    }

    /// Letzter Knoten.
    pub fn end(&self) -> f64 {
        *self.knots.last().unwrap()
    }

    /// Zeitliche Ausdehnung.
    pub fn duration(&self) -> f64 {
        self.end() - self.start()
    }

    /// Knoten-Positionen.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Kontrollordinate `j` von Segment `seg`, Kanal `ch`.
    pub fn control_point(&self, j: usize, seg: usize, ch: usize) -> f64 {
        self.coeffs[j][seg][ch]
    }

    /// Kleinste Kontrollordinate über alle Segmente und Kanäle.
    ///
    /// Approximation des Kurvenminimums über die rohen Koeffizienten, keine
    /// scharfe Schranke zwischen den Knoten. Nur fürs Framing benutzt.
    pub fn min_value(&self) -> f64 {
        self.ordinates().fold(f64::INFINITY, f64::min)
    }

    /// Größte Kontrollordinate, gleiche Näherung wie [`Self::min_value`].
    pub fn max_value(&self) -> f64 {
        self.ordinates().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Bounding-Box `[start, end] x [min, max]` zum Einpassen des Viewports.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(
            DVec2::new(self.start(), self.min_value()),
            DVec2::new(self.end(), self.max_value()),
        )
    }

    /// Wertet die Kurve an Zeit `t` aus (de Casteljau, pro Kanal).
    /// `t` wird auf `[start, end]` geklemmt.
    pub fn sample(&self, t: f64) -> Vec<f64> {
        let t = t.clamp(self.start(), self.end());
        let seg = self.segment_index(t);
        let u = (t - self.knots[seg]) / (self.knots[seg + 1] - self.knots[seg]);

        (0..self.n_channels())
            .map(|ch| {
                let mut points: Vec<f64> =
                    self.coeffs.iter().map(|row| row[seg][ch]).collect();
                for level in (1..points.len()).rev() {
                    for i in 0..level {
                        points[i] = (1.0 - u) * points[i] + u * points[i + 1];
                    }
                }
                points[0]
            })
            .collect()
    }

    /// Fügt an `point.x` einen neuen Knoten ein, dessen Ordinate `point.y`
    /// die Kurve dort durchläuft. Zeiten auf oder vor einem Nachbarknoten
    /// werden abgewiesen, die Knoten bleiben strikt steigend.
    ///
    /// Das betroffene Segment wird in zwei Spalten geteilt, deren Ordinaten
    /// linear in den neuen Punkt hinein- und wieder herauslaufen (C0).
    pub fn insert_knot(&self, point: DVec2) -> Result<Spline, SplineError> {
        let time = point.x;
        if !time.is_finite() || time <= self.start() || time >= self.end() {
            return Err(SplineError::KnotOutOfRange {
                time,
                start: self.start(),
                end: self.end(),
            });
        }

        let seg = self.segment_index(time);
        let width = self.knots[seg + 1] - self.knots[seg];
        let margin = width * KNOT_EPSILON;
        if time - self.knots[seg] <= margin || self.knots[seg + 1] - time <= margin {
            return Err(SplineError::KnotOutOfRange {
                time,
                start: self.knots[seg],
                end: self.knots[seg + 1],
            });
        }

        let mut knots = self.knots.clone();
        knots.insert(seg + 1, time);

        let order = self.order();
        let mut coeffs = self.coeffs.clone();
        for (j, row) in coeffs.iter_mut().enumerate() {
            // Blend-Anteil der Ordinate j innerhalb der Spalte
            let blend = if order > 1 {
                j as f64 / (order - 1) as f64
            } else {
                1.0
            };
            let left_cell: Vec<f64> = self.coeffs[0][seg]
                .iter()
                .map(|&a| a + blend * (point.y - a))
                .collect();
            let right_cell: Vec<f64> = self.coeffs[order - 1][seg]
                .iter()
                .map(|&b| point.y + blend * (b - point.y))
                .collect();
            row[seg] = left_cell;
            row.insert(seg + 1, right_cell);
        }

        Spline::new(coeffs, knots)
    }

    /// Klemmt alle Kontrollordinaten in den vertikalen Bereich der Box
    /// (Motor-Verfahrgrenzen). Knoten bleiben unberührt.
    pub fn restrict_to_bbox(&self, bbox: &BoundingBox) -> Spline {
        self.map_ordinates(|value| value.clamp(bbox.ll.y, bbox.ur.y))
    }

    /// Multipliziert alle Kontrollordinaten mit `factor`; Knoten unverändert.
    pub fn scale(&self, factor: f64) -> Spline {
        self.map_ordinates(|value| value * factor)
    }

    /// Multipliziert alle Knoten mit `factor` und ändert so die Dauer,
    /// ohne die Ordinaten anzufassen. Faktor muss endlich und > 0 sein.
    pub fn stretch(&self, factor: f64) -> Result<Spline, SplineError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SplineError::InvalidFactor(factor));
        }

        let knots = self.knots.iter().map(|k| k * factor).collect();
        Spline::new(self.coeffs.clone(), knots)
    }

    /// Verschiebt alle Knoten um `offset`. Links-Verschiebung ist beim
    /// aktuellen Start gedeckelt: der erste Knoten fällt nie unter 0.
    pub fn shift(&self, offset: f64) -> Spline {
        let offset = offset.max(-self.start());
        let knots = self.knots.iter().map(|k| k + offset).collect();
        Self {
            coeffs: self.coeffs.clone(),
            knots,
        }
    }

    /// Index des Segments, das `t` enthält (letztes Segment für `t = end`).
    fn segment_index(&self, t: f64) -> usize {
        let idx = self.knots.partition_point(|k| *k <= t);
        idx.saturating_sub(1).min(self.n_segments() - 1)
    }

    fn ordinates(&self) -> impl Iterator<Item = f64> + '_ {
        self.coeffs
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| cell.iter().copied())
    }

    fn map_ordinates(&self, f: impl Fn(f64) -> f64) -> Spline {
        let coeffs = self
            .coeffs
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.iter().map(|&v| f(v)).collect())
                    .collect()
            })
            .collect();
        Self {
            coeffs,
            knots: self.knots.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Kubischer Ein-Kanal-Spline mit zwei Segmenten zum Testen.
    fn ramp_spline() -> Spline {
        // Segment 0: 0 -> 1, Segment 1: 1 -> 0.5
        let coeffs = vec![
            vec![vec![0.0], vec![1.0]],
            vec![vec![0.25], vec![0.9]],
            vec![vec![0.75], vec![0.6]],
            vec![vec![1.0], vec![0.5]],
        ];
        Spline::new(coeffs, vec![0.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn new_rejects_too_few_knots() {
        let err = Spline::new(vec![vec![]], vec![0.0]).unwrap_err();
        assert_eq!(err, SplineError::TooFewKnots(1));
    }

    #[test]
    fn new_rejects_non_increasing_knots() {
        let coeffs = vec![vec![vec![0.0], vec![0.0]]];
        let err = Spline::new(coeffs, vec![0.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, SplineError::NonIncreasingKnots { index: 2, .. }));
    }

    #[test]
    fn new_rejects_segment_mismatch() {
        // 2 Knoten = 1 Segment, aber 2 Spalten
        let coeffs = vec![vec![vec![0.0], vec![0.0]]];
        let err = Spline::new(coeffs, vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(err, SplineError::ShapeMismatch(_)));
    }

    #[test]
    fn new_rejects_inconsistent_channels() {
        let coeffs = vec![vec![vec![0.0]], vec![vec![0.0, 1.0]]];
        let err = Spline::new(coeffs, vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(err, SplineError::ShapeMismatch(_)));
    }

    #[test]
    fn flat_spline_shape() {
        let spline = Spline::flat(1);
        assert_eq!(spline.order(), 4);
        assert_eq!(spline.degree(), 3);
        assert_eq!(spline.n_segments(), 1);
        assert_eq!(spline.n_channels(), 1);
        assert_relative_eq!(spline.start(), 0.0);
        assert_relative_eq!(spline.end(), 1.0);
        assert_relative_eq!(spline.duration(), 1.0);
        assert_relative_eq!(spline.min_value(), 0.0);
        assert_relative_eq!(spline.max_value(), 0.0);
    }

    #[test]
    fn bbox_covers_knot_and_ordinate_extent() {
        let spline = ramp_spline();
        let bbox = spline.bbox();
        assert_relative_eq!(bbox.ll.x, 0.0);
        assert_relative_eq!(bbox.ur.x, 3.0);
        assert_relative_eq!(bbox.ll.y, 0.0);
        assert_relative_eq!(bbox.ur.y, 1.0);
    }

    #[test]
    fn clone_is_deep_copy() {
        let original = ramp_spline();
        let copy = original.clone();
        assert_eq!(copy.bbox(), original.bbox());

        // Transformieren der Kopie lässt das Original unberührt
        let scaled = copy.scale(10.0);
        assert_relative_eq!(original.max_value(), 1.0);
        assert_relative_eq!(scaled.max_value(), 10.0);
    }

    #[test]
    fn sample_hits_knot_values() {
        let spline = ramp_spline();
        assert_relative_eq!(spline.sample(0.0)[0], 0.0);
        assert_relative_eq!(spline.sample(2.0)[0], 1.0);
        assert_relative_eq!(spline.sample(3.0)[0], 0.5);
        // Außerhalb wird geklemmt
        assert_relative_eq!(spline.sample(-5.0)[0], 0.0);
        assert_relative_eq!(spline.sample(99.0)[0], 0.5);
    }

    #[test]
    fn insert_knot_grows_segments_and_passes_through_point() {
        let spline = Spline::flat(1);
        let inserted = spline.insert_knot(DVec2::new(0.5, 2.0)).unwrap();

        assert_eq!(inserted.n_segments(), spline.n_segments() + 1);
        assert!(inserted.bbox().ur.y >= 2.0);
        assert_relative_eq!(inserted.sample(0.5)[0], 2.0);
        // Randwerte bleiben erhalten
        assert_relative_eq!(inserted.sample(0.0)[0], 0.0);
        assert_relative_eq!(inserted.sample(1.0)[0], 0.0);
    }

    #[test]
    fn insert_knot_rejects_times_outside_open_interval() {
        let spline = Spline::flat(1);
        assert!(spline.insert_knot(DVec2::new(0.0, 1.0)).is_err());
        assert!(spline.insert_knot(DVec2::new(1.0, 1.0)).is_err());
        assert!(spline.insert_knot(DVec2::new(-0.5, 1.0)).is_err());
        assert!(spline.insert_knot(DVec2::new(1.5, 1.0)).is_err());
    }

    #[test]
    fn insert_knot_rejects_existing_knot_time() {
        let spline = ramp_spline();
        let err = spline.insert_knot(DVec2::new(2.0, 0.5)).unwrap_err();
        assert!(matches!(err, SplineError::KnotOutOfRange { .. }));
    }

    #[test]
    fn scale_changes_ordinates_not_knots() {
        let spline = ramp_spline();
        let scaled = spline.scale(2.0);
        assert_relative_eq!(scaled.min_value(), 0.0);
        assert_relative_eq!(scaled.max_value(), 2.0);
        assert_eq!(scaled.knots(), spline.knots());
    }

    #[test]
    fn stretch_changes_duration_not_ordinates() {
        let spline = ramp_spline();
        let stretched = spline.stretch(2.0).unwrap();
        assert_relative_eq!(stretched.duration(), 2.0 * spline.duration());
        assert_relative_eq!(stretched.min_value(), spline.min_value());
        assert_relative_eq!(stretched.max_value(), spline.max_value());
    }

    #[test]
    fn stretch_rejects_non_positive_factor() {
        let spline = ramp_spline();
        assert_eq!(
            spline.stretch(0.0).unwrap_err(),
            SplineError::InvalidFactor(0.0)
        );
        assert!(spline.stretch(-1.0).is_err());
        assert!(spline.stretch(f64::NAN).is_err());
    }

    #[test]
    fn shift_right_moves_all_knots() {
        let spline = ramp_spline();
        let shifted = spline.shift(1.5);
        assert_relative_eq!(shifted.start(), 1.5);
        assert_relative_eq!(shifted.end(), 4.5);
        assert_relative_eq!(shifted.duration(), spline.duration());
    }

    #[test]
    fn shift_left_is_clamped_at_zero() {
        let spline = ramp_spline().shift(2.0);
        assert_relative_eq!(spline.start(), 2.0);

        // Verschieben um mehr als den Start klemmt bei 0
        let shifted = spline.shift(-100.0);
        assert_relative_eq!(shifted.start(), 0.0);
        assert_relative_eq!(shifted.duration(), spline.duration());
    }

    #[test]
    fn restrict_to_bbox_clamps_ordinates() {
        let spline = ramp_spline();
        let limits = BoundingBox::new(DVec2::new(0.0, 0.2), DVec2::new(3.0, 0.8));
        let restricted = spline.restrict_to_bbox(&limits);
        assert_relative_eq!(restricted.min_value(), 0.2);
        assert_relative_eq!(restricted.max_value(), 0.8);
        assert_eq!(restricted.knots(), spline.knots());
    }

    #[test]
    fn multi_channel_queries() {
        let coeffs = vec![
            vec![vec![0.0, 5.0]],
            vec![vec![1.0, -1.0]],
        ];
        let spline = Spline::new(coeffs, vec![0.0, 1.0]).unwrap();
        assert_eq!(spline.n_channels(), 2);
        assert_relative_eq!(spline.min_value(), -1.0);
        assert_relative_eq!(spline.max_value(), 5.0);
        assert_eq!(spline.sample(0.0), vec![0.0, 5.0]);
    }
}
