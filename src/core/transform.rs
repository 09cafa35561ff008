//! Affine Abbildung zwischen Kurven-Viewport und Anzeige-Fläche.

use glam::{DMat3, DVec2};

use super::BoundingBox;

/// Bidirektionale affine Abbildung Kurvenraum <-> Pixelraum.
///
/// Das Innere des Viewports (um `margin` Pixel eingerückt) füllt die
/// Anzeige-Fläche; die vertikale Achse ist invertiert (Kurvenraum "oben"
/// landet bei kleinerem Pixel-y). Vorwärts- und Rückwärts-Transform werden
/// immer gemeinsam neu berechnet, nie inkrementell gepatcht. Degenerierte
/// Viewports lassen das letzte gültige Transform-Paar stehen.
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    viewport: BoundingBox,
    size: DVec2,
    margin: f64,
    forward: DMat3,
    inverse: DMat3,
}

impl ViewportTransform {
    /// Erstellt einen Transform für die gegebene Anzeige-Größe und Margin.
    pub fn new(size: DVec2, margin: f64) -> Self {
        let mut transform = Self {
            viewport: BoundingBox::new(DVec2::ZERO, DVec2::ONE),
            size,
            margin,
            forward: DMat3::IDENTITY,
            inverse: DMat3::IDENTITY,
        };
        transform.recompute();
        transform
    }

    /// Aktueller Viewport in Kurven-Koordinaten.
    pub fn viewport(&self) -> &BoundingBox {
        &self.viewport
    }

    /// Anzeige-Größe in Pixel.
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Fester Pixel-Rand auf allen Seiten.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Setzt den Viewport und berechnet beide Transforms neu.
    pub fn set_viewport(&mut self, viewport: BoundingBox) {
        self.viewport = viewport;
        self.recompute();
    }

    /// Setzt die Anzeige-Größe und berechnet beide Transforms neu.
    pub fn set_size(&mut self, size: DVec2) {
        self.size = size;
        self.recompute();
    }

    /// Rahmt die gegebene Box als neuen Viewport ein.
    pub fn frame(&mut self, bbox: BoundingBox) {
        self.set_viewport(bbox);
    }

    /// Kurvenraum -> Pixelraum.
    pub fn forward_point(&self, point: DVec2) -> DVec2 {
        self.forward.transform_point2(point)
    }

    /// Pixelraum -> Kurvenraum.
    pub fn inverse_point(&self, point: DVec2) -> DVec2 {
        self.inverse.transform_point2(point)
    }

    /// Zoomt um den horizontalen Mittelpunkt des Viewports (Zoom-Buttons).
    /// `factor > 1` vergrößert den sichtbaren Zeitbereich (herauszoomen).
    pub fn zoom_in_place(&mut self, factor: f64) {
        let mid = 0.5 * (self.viewport.ll.x + self.viewport.ur.x);
        self.zoom_about(factor, mid);
    }

    /// Zoomt um einen festen Fokus-Zeitpunkt: beide horizontalen Kanten
    /// werden um `factor` vom Fokus weg reskaliert (reine Skalierung, kein
    /// Schub). Die vertikale Ausdehnung bleibt unverändert.
    pub fn zoom_about(&mut self, factor: f64, focal: f64) {
        let ll = DVec2::new(
            focal + factor * (self.viewport.ll.x - focal),
            self.viewport.ll.y,
        );
        let ur = DVec2::new(
            focal + factor * (self.viewport.ur.x - focal),
            self.viewport.ur.y,
        );
        self.set_viewport(BoundingBox::new(ll, ur));
    }

    /// Berechnet Vorwärts- und Rückwärts-Transform als Paar. Bei
    /// degenerierter Skala (0 oder nicht endlich) bleibt das letzte
    /// gültige Paar erhalten.
    fn recompute(&mut self) {
        let inner = self.size - DVec2::splat(2.0 * self.margin);
        let sx = inner.x / self.viewport.width();
        let sy = inner.y / self.viewport.height();
        if !(sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0) {
            log::debug!(
                "Degenerierter Viewport {:?} bei Größe {:?}: Transform bleibt stehen",
                self.viewport,
                self.size
            );
            return;
        }

        let tx = self.margin - self.viewport.ll.x * sx;
        let ty = self.size.y - self.margin + self.viewport.ll.y * sy;
        self.forward = DMat3::from_cols(
            glam::DVec3::new(sx, 0.0, 0.0),
            glam::DVec3::new(0.0, -sy, 0.0),
            glam::DVec3::new(tx, ty, 1.0),
        );
        self.inverse = DMat3::from_cols(
            glam::DVec3::new(1.0 / sx, 0.0, 0.0),
            glam::DVec3::new(0.0, -1.0 / sy, 0.0),
            glam::DVec3::new(-tx / sx, ty / sy, 1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_transform() -> ViewportTransform {
        let mut transform = ViewportTransform::new(DVec2::new(800.0, 600.0), 50.0);
        transform.set_viewport(BoundingBox::new(DVec2::ZERO, DVec2::new(2.0, 1.0)));
        transform
    }

    #[test]
    fn forward_maps_corners_into_margin() {
        let transform = unit_transform();

        // Untere linke Ecke -> (margin, height - margin)
        let ll = transform.forward_point(DVec2::ZERO);
        assert_relative_eq!(ll.x, 50.0);
        assert_relative_eq!(ll.y, 550.0);

        // Obere rechte Ecke -> (width - margin, margin)
        let ur = transform.forward_point(DVec2::new(2.0, 1.0));
        assert_relative_eq!(ur.x, 750.0);
        assert_relative_eq!(ur.y, 50.0);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let transform = unit_transform();
        let low = transform.forward_point(DVec2::new(1.0, 0.0));
        let high = transform.forward_point(DVec2::new(1.0, 1.0));
        assert!(high.y < low.y);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let transform = unit_transform();
        for point in [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.3, 0.4),
            DVec2::new(2.0, 1.0),
            DVec2::new(0.017, 0.93),
        ] {
            let round = transform.inverse_point(transform.forward_point(point));
            assert_relative_eq!(round.x, point.x, epsilon = 1e-12);
            assert_relative_eq!(round.y, point.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_viewport_keeps_last_transform() {
        let mut transform = unit_transform();
        let before = transform.forward_point(DVec2::new(1.0, 0.5));

        // Nullbreiter Viewport darf das Transform-Paar nicht zerstören
        transform.set_viewport(BoundingBox::new(
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ));
        let after = transform.forward_point(DVec2::new(1.0, 0.5));
        assert_relative_eq!(before.x, after.x);
        assert_relative_eq!(before.y, after.y);
    }

    #[test]
    fn zoom_about_keeps_focal_pixel_position() {
        let mut transform = unit_transform();
        let focal = 1.25;
        let before = transform.forward_point(DVec2::new(focal, 0.5));

        transform.zoom_about(0.5, focal);
        let after = transform.forward_point(DVec2::new(focal, 0.5));

        assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-9);
    }

    #[test]
    fn zoom_in_place_is_pure_rescale_about_midpoint() {
        let mut transform = unit_transform();
        transform.zoom_in_place(0.5);

        let viewport = transform.viewport();
        assert_relative_eq!(viewport.ll.x, 0.5);
        assert_relative_eq!(viewport.ur.x, 1.5);
        // Vertikale Ausdehnung unverändert
        assert_relative_eq!(viewport.ll.y, 0.0);
        assert_relative_eq!(viewport.ur.y, 1.0);
    }

    #[test]
    fn resize_recomputes_pair() {
        let mut transform = unit_transform();
        transform.set_size(DVec2::new(400.0, 300.0));

        let ll = transform.forward_point(DVec2::ZERO);
        assert_relative_eq!(ll.x, 50.0);
        assert_relative_eq!(ll.y, 250.0);

        let round = transform.inverse_point(transform.forward_point(DVec2::new(0.7, 0.3)));
        assert_relative_eq!(round.x, 0.7, epsilon = 1e-12);
        assert_relative_eq!(round.y, 0.3, epsilon = 1e-12);
    }
}
