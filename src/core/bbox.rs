//! Achsenparallele Bounding-Box in Kurven- oder Screen-Koordinaten.

use glam::DVec2;

/// Achsenparalleles Rechteck, definiert über zwei Eckpunkte.
///
/// Invariante: `ll` liegt komponentenweise nicht über `ur`. Degenerierte
/// Boxen (Breite oder Höhe 0) sind erlaubt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Untere linke Ecke
    pub ll: DVec2,
    /// Obere rechte Ecke
    pub ur: DVec2,
}

impl BoundingBox {
    /// Erstellt eine Box aus zwei Eckpunkten. Vertauschte Koordinaten
    /// werden normalisiert, so dass die Invariante immer gilt.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            ll: a.min(b),
            ur: a.max(b),
        }
    }

    /// Leere Box: invertierte unendliche Ecken, so dass der erste
    /// `expand_point`-Aufruf die Box auf diesen Punkt kollabiert.
    pub fn empty() -> Self {
        Self {
            ll: DVec2::splat(f64::INFINITY),
            ur: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Breite der Box.
    pub fn width(&self) -> f64 {
        self.ur.x - self.ll.x
    }

    /// Höhe der Box.
    pub fn height(&self) -> f64 {
        self.ur.y - self.ll.y
    }

    /// Breite und Höhe als Vektor.
    pub fn size(&self) -> DVec2 {
        self.ur - self.ll
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> DVec2 {
        0.5 * (self.ll + self.ur)
    }

    /// Prüft ob ein Punkt innerhalb (inklusive Rand) liegt.
    pub fn contains(&self, point: DVec2) -> bool {
        self.ll.x <= point.x && point.x <= self.ur.x && self.ll.y <= point.y && point.y <= self.ur.y
    }

    /// Box hat keine nutzbare Ausdehnung (leer, degeneriert oder nicht endlich).
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
            || !self.ll.is_finite()
            || !self.ur.is_finite()
    }

    /// Erweitert die Box, so dass sie den Punkt einschließt.
    pub fn expand_point(&mut self, point: DVec2) {
        self.ll = self.ll.min(point);
        self.ur = self.ur.max(point);
    }

    /// Erweitert die Box um eine andere Box (Vereinigung).
    pub fn expand_bbox(&mut self, other: &BoundingBox) {
        self.ll = self.ll.min(other.ll);
        self.ur = self.ur.max(other.ur);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_normalizes_swapped_corners() {
        let bbox = BoundingBox::new(DVec2::new(5.0, -1.0), DVec2::new(1.0, 3.0));
        assert_relative_eq!(bbox.ll.x, 1.0);
        assert_relative_eq!(bbox.ll.y, -1.0);
        assert_relative_eq!(bbox.ur.x, 5.0);
        assert_relative_eq!(bbox.ur.y, 3.0);
    }

    #[test]
    fn width_height_size() {
        let bbox = BoundingBox::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, 6.0));
        assert_relative_eq!(bbox.width(), 3.0);
        assert_relative_eq!(bbox.height(), 4.0);
        assert_relative_eq!(bbox.size().x, 3.0);
        assert_relative_eq!(bbox.size().y, 4.0);
    }

    #[test]
    fn empty_collapses_to_first_point() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_degenerate());

        bbox.expand_point(DVec2::new(2.0, 3.0));
        assert_eq!(bbox.ll, DVec2::new(2.0, 3.0));
        assert_eq!(bbox.ur, DVec2::new(2.0, 3.0));
    }

    #[test]
    fn expand_point_grows_box() {
        let mut bbox = BoundingBox::new(DVec2::ZERO, DVec2::ONE);
        bbox.expand_point(DVec2::new(-1.0, 2.0));
        assert_eq!(bbox.ll, DVec2::new(-1.0, 0.0));
        assert_eq!(bbox.ur, DVec2::new(1.0, 2.0));
    }

    #[test]
    fn expand_bbox_is_union() {
        let mut a = BoundingBox::new(DVec2::ZERO, DVec2::ONE);
        let b = BoundingBox::new(DVec2::new(0.5, -2.0), DVec2::new(3.0, 0.5));
        a.expand_bbox(&b);
        assert_eq!(a.ll, DVec2::new(0.0, -2.0));
        assert_eq!(a.ur, DVec2::new(3.0, 1.0));
    }

    #[test]
    fn degenerate_zero_size_allowed() {
        let bbox = BoundingBox::new(DVec2::new(1.0, 1.0), DVec2::new(1.0, 5.0));
        assert!(bbox.is_degenerate());
        assert_relative_eq!(bbox.height(), 4.0);
    }

    #[test]
    fn contains_includes_border() {
        let bbox = BoundingBox::new(DVec2::ZERO, DVec2::new(2.0, 2.0));
        assert!(bbox.contains(DVec2::new(0.0, 2.0)));
        assert!(bbox.contains(DVec2::new(1.0, 1.0)));
        assert!(!bbox.contains(DVec2::new(2.1, 1.0)));
    }

    #[test]
    fn copy_is_independent() {
        let original = BoundingBox::new(DVec2::ZERO, DVec2::ONE);
        let mut copy = original;
        copy.expand_point(DVec2::new(10.0, 10.0));
        assert_eq!(original.ur, DVec2::ONE);
    }
}
