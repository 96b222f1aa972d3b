//! Kartenkamera: Zentrum, Web-Mercator-Zoom und Drehung nach Lochrichtung.
//!
//! Projiziert Koordinaten lokal-äquirektangulär um das Kamerazentrum. Auf
//! Loch-Skala ist der Fehler gegenüber echter Mercator-Projektion
//! vernachlässigbar.

use glam::DVec2;

use super::geo::{
    bearing_degrees, distance_meters, longitude_delta, midpoint, Coordinate, METERS_PER_DEGREE,
};
use super::marker_offset::meters_per_pixel;

/// Kamera über der Lochkarte
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmitte
    pub center: Coordinate,
    /// Web-Mercator-Zoom-Level (17 ≈ 1 m/px in Mitteleuropa)
    pub zoom: f64,
    /// Drehung in Grad: diese Peilung zeigt auf dem Bildschirm nach oben
    pub rotation_deg: f64,
}

impl MapCamera {
    /// Minimaler Zoom-Level.
    pub const ZOOM_MIN: f64 = 10.0;
    /// Maximaler Zoom-Level.
    pub const ZOOM_MAX: f64 = 21.0;
    /// Anteil des Viewports, den ein Loch nach `fit_hole` einnimmt.
    pub const FIT_MARGIN: f64 = 0.8;

    /// Erstellt eine Kamera über `center`.
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            rotation_deg: 0.0,
        }
    }

    /// Meter pro Pixel im Kamerazentrum
    pub fn meters_per_pixel(&self) -> f64 {
        meters_per_pixel(self.zoom, self.center.latitude())
    }

    /// Ändert den Zoom additiv (Level, nicht Faktor) mit Begrenzung.
    pub fn zoom_by_clamped(&mut self, delta_levels: f64, min: f64, max: f64) {
        self.zoom = (self.zoom + delta_levels).clamp(min, max);
    }

    /// Richtet die Kamera so aus, dass Tee unten und Pin oben liegt.
    ///
    /// Zoom so, dass die Lochlänge `FIT_MARGIN` der Viewport-Höhe einnimmt.
    pub fn fit_hole(&mut self, tee: Coordinate, pin: Coordinate, viewport_size: [f32; 2]) {
        self.center = midpoint(tee, pin);
        self.rotation_deg = bearing_degrees(tee, pin);

        let length_m = distance_meters(tee, pin);
        let viewport_px = f64::from(viewport_size[1].max(1.0)) * Self::FIT_MARGIN;
        if length_m > 0.0 {
            let cos_lat = self.center.latitude().to_radians().cos();
            // meters_per_pixel(zoom) == length_m / viewport_px nach zoom aufgelöst
            let zoom = (super::marker_offset::WEB_MERCATOR_EQUATOR_MPP * cos_lat * viewport_px
                / length_m)
                .log2();
            if zoom.is_finite() {
                self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
            }
        }
    }

    /// Koordinate → Bildschirmposition in Pixeln (Ursprung oben links).
    pub fn coordinate_to_screen(&self, coordinate: Coordinate, viewport_size: [f32; 2]) -> DVec2 {
        let local_m = self.local_meters(coordinate);
        let rotated = DVec2::from_angle(self.rotation_deg.to_radians()).rotate(local_m);
        let px = rotated / self.meters_per_pixel();
        let half = DVec2::new(f64::from(viewport_size[0]), f64::from(viewport_size[1])) / 2.0;
        // Bildschirm-Y zeigt nach unten, Norden nach oben
        DVec2::new(half.x + px.x, half.y - px.y)
    }

    /// Bildschirmposition → Koordinate. `None` bei nicht darstellbarem Ergebnis.
    pub fn screen_to_coordinate(&self, screen: DVec2, viewport_size: [f32; 2]) -> Option<Coordinate> {
        let half = DVec2::new(f64::from(viewport_size[0]), f64::from(viewport_size[1])) / 2.0;
        let px = DVec2::new(screen.x - half.x, half.y - screen.y);
        let rotated = px * self.meters_per_pixel();
        let local_m = DVec2::from_angle(-self.rotation_deg.to_radians()).rotate(rotated);

        let cos_lat = self.center.latitude().to_radians().cos().max(1e-9);
        Coordinate::clamped(
            self.center.longitude() + local_m.x / (METERS_PER_DEGREE * cos_lat),
            self.center.latitude() + local_m.y / METERS_PER_DEGREE,
        )
    }

    /// Verschiebt die Kamera um ein Bildschirm-Delta (Pixel).
    pub fn pan_pixels(&mut self, delta_px: DVec2, viewport_size: [f32; 2]) {
        let half = DVec2::new(f64::from(viewport_size[0]), f64::from(viewport_size[1])) / 2.0;
        // Inhalt folgt dem Zeiger → Zentrum wandert entgegengesetzt
        if let Some(center) = self.screen_to_coordinate(half - delta_px, viewport_size) {
            self.center = center;
        }
    }

    /// Lokale Ost/Nord-Meter relativ zum Zentrum (unrotiert)
    fn local_meters(&self, coordinate: Coordinate) -> DVec2 {
        let cos_lat = self.center.latitude().to_radians().cos();
        DVec2::new(
            longitude_delta(self.center, coordinate) * METERS_PER_DEGREE * cos_lat,
            (coordinate.latitude() - self.center.latitude()) * METERS_PER_DEGREE,
        )
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(Coordinate::from_degrees_unchecked(0.0, 0.0), 17.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: [f32; 2] = [800.0, 600.0];

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_degrees_unchecked(lon, lat)
    }

    #[test]
    fn center_projects_to_viewport_middle() {
        let camera = MapCamera::new(c(8.54, 47.37), 18.0);
        let screen = camera.coordinate_to_screen(c(8.54, 47.37), VIEWPORT);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn north_is_up_without_rotation() {
        let camera = MapCamera::new(c(0.0, 0.0), 18.0);
        let screen = camera.coordinate_to_screen(c(0.0, 0.0001), VIEWPORT);
        assert!(screen.y < 300.0);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
    }

    #[test]
    fn screen_round_trip() {
        let mut camera = MapCamera::new(c(8.54, 47.37), 18.5);
        camera.rotation_deg = 37.0;
        let original = c(8.5412, 47.3711);
        let screen = camera.coordinate_to_screen(original, VIEWPORT);
        let back = camera
            .screen_to_coordinate(screen, VIEWPORT)
            .expect("Rückprojektion sollte gelingen");
        assert_relative_eq!(back.longitude(), original.longitude(), epsilon = 1e-9);
        assert_relative_eq!(back.latitude(), original.latitude(), epsilon = 1e-9);
    }

    #[test]
    fn fit_hole_puts_pin_above_tee() {
        let tee = c(0.0, 0.0);
        let pin = c(0.003, 0.003);
        let mut camera = MapCamera::default();
        camera.fit_hole(tee, pin, VIEWPORT);

        let tee_screen = camera.coordinate_to_screen(tee, VIEWPORT);
        let pin_screen = camera.coordinate_to_screen(pin, VIEWPORT);
        assert_relative_eq!(tee_screen.x, pin_screen.x, epsilon = 1e-3);
        assert!(pin_screen.y < tee_screen.y);
        // Loch nimmt etwa FIT_MARGIN der Höhe ein
        let span = tee_screen.y - pin_screen.y;
        assert_relative_eq!(span, 600.0 * MapCamera::FIT_MARGIN, max_relative = 0.01);
    }

    #[test]
    fn hole_across_date_line_projects_locally() {
        let tee = c(179.9993, -16.8);
        let pin = c(-179.9993, -16.8);
        let mut camera = MapCamera::default();
        camera.fit_hole(tee, pin, VIEWPORT);

        let tee_screen = camera.coordinate_to_screen(tee, VIEWPORT);
        let pin_screen = camera.coordinate_to_screen(pin, VIEWPORT);
        let span = tee_screen.y - pin_screen.y;
        assert_relative_eq!(span, 600.0 * MapCamera::FIT_MARGIN, max_relative = 0.01);
        assert_relative_eq!(tee_screen.x, pin_screen.x, epsilon = 1e-3);

        let back = camera
            .screen_to_coordinate(pin_screen, VIEWPORT)
            .expect("Rückprojektion sollte gelingen");
        assert!(crate::core::distance_meters(back, pin) < 0.01);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = MapCamera::default();
        camera.zoom_by_clamped(10.0, MapCamera::ZOOM_MIN, MapCamera::ZOOM_MAX);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
        camera.zoom_by_clamped(-50.0, MapCamera::ZOOM_MIN, MapCamera::ZOOM_MAX);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut camera = MapCamera::new(c(0.0, 0.0), 18.0);
        let point = c(0.0, 0.0);
        camera.pan_pixels(DVec2::new(50.0, 0.0), VIEWPORT);
        let screen = camera.coordinate_to_screen(point, VIEWPORT);
        assert_relative_eq!(screen.x, 450.0, epsilon = 1e-6);
    }
}
