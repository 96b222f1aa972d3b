//! Versatz von Linienanfängen an den Rand breiter Marker.
//!
//! Der GPS-Marker hat einen sichtbaren Radius in Pixeln. Damit die
//! Verbindungslinie an seinem Rand beginnt statt unter seiner Mitte, wird
//! der Startpunkt geographisch in Richtung des anderen Endpunkts verschoben.
//! Der Versatz ist rein visuell und geht nie in Distanzen ein.

use glam::DVec2;

use super::geo::{distance_meters, longitude_delta, Coordinate, METERS_PER_DEGREE};

/// Web-Mercator-Auflösung am Äquator bei Zoom 0 (Meter pro Pixel).
pub const WEB_MERCATOR_EQUATOR_MPP: f64 = 156_543.033_92;

/// Untergrenze für cos(Breite), verhindert Division durch 0 an den Polen.
const MIN_COS_LATITUDE: f64 = 1e-9;

/// Meter pro Pixel bei gegebenem Zoom-Level und Breitengrad (Web-Mercator).
pub fn meters_per_pixel(zoom_level: f64, latitude: f64) -> f64 {
    WEB_MERCATOR_EQUATOR_MPP * latitude.to_radians().cos() / 2f64.powf(zoom_level)
}

/// Verschiebt `origin` in Richtung `towards` um `pixel_radius` Bildschirm-Pixel.
///
/// - `origin == towards` → `origin` unverändert (keine Division durch 0)
/// - Der Versatz schießt nie über `towards` hinaus
/// - Längengrade werden mit cos(`origin_latitude`) kompensiert
/// - Über die Datumsgrenze zeigt die Richtung auf dem kurzen Weg zu `towards`
pub fn offset_origin(
    origin: Coordinate,
    towards: Coordinate,
    pixel_radius: f64,
    zoom_level: f64,
    origin_latitude: f64,
) -> Coordinate {
    let cos_lat = origin_latitude.to_radians().cos().max(MIN_COS_LATITUDE);
    // Richtung in lokalen Ost/Nord-Metern, nicht im Grad-Raum
    let delta_m = DVec2::new(
        longitude_delta(origin, towards) * METERS_PER_DEGREE * cos_lat,
        (towards.latitude() - origin.latitude()) * METERS_PER_DEGREE,
    );
    let Some(direction) = delta_m.try_normalize() else {
        return origin;
    };

    let offset_m = pixel_radius.max(0.0) * meters_per_pixel(zoom_level, origin_latitude);
    if !offset_m.is_finite() {
        return origin;
    }
    if offset_m >= distance_meters(origin, towards) {
        return towards;
    }

    let offset_deg = DVec2::new(
        direction.x * offset_m / (METERS_PER_DEGREE * cos_lat),
        direction.y * offset_m / METERS_PER_DEGREE,
    );

    Coordinate::clamped(
        origin.longitude() + offset_deg.x,
        origin.latitude() + offset_deg.y,
    )
    .unwrap_or(origin)
}
