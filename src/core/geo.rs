//! Geo-Mathematik: Koordinaten, Haversine-Distanz, Peilung, Einheiten.
//!
//! Einzige Stelle für Distanz- und Peilungsberechnungen. Alle Konsumenten
//! (Render-Sync, Kamera, UI) rufen diese Funktionen auf.

use serde::{Deserialize, Serialize};

/// Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Umrechnungsfaktor Meter → Yards.
pub const METERS_TO_YARDS: f64 = 1.09361;
/// Meter pro Breitengrad auf der Haversine-Kugel (auch für Längengrade am Äquator).
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Geographische Koordinate (Längengrad, Breitengrad) in Dezimalgrad.
///
/// Werttyp: einmal erstellt, nicht mehr veränderbar. Der validierende
/// Konstruktor lehnt |Breite| > 90 ab und normalisiert die Länge auf [-180, 180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

/// Serde-Zwischenform, damit auch eingelesene Koordinaten validiert werden.
#[derive(Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = anyhow::Error;

    fn try_from(raw: RawCoordinate) -> anyhow::Result<Self> {
        Coordinate::new(raw.longitude, raw.latitude)
    }
}

impl Coordinate {
    /// Erstellt eine validierte Koordinate.
    ///
    /// Fehler bei nicht-endlichen Werten oder |Breite| > 90.
    pub fn new(longitude: f64, latitude: f64) -> anyhow::Result<Self> {
        if !longitude.is_finite() || !latitude.is_finite() {
            anyhow::bail!(
                "Koordinate nicht endlich: lon={}, lat={}",
                longitude,
                latitude
            );
        }
        if latitude.abs() > 90.0 {
            anyhow::bail!("Breitengrad ausserhalb [-90, 90]: {}", latitude);
        }
        Ok(Self {
            longitude: normalize_longitude(longitude),
            latitude,
        })
    }

    /// Erstellt eine Koordinate ohne Prüfung (für bekannte Konstanten und Tests).
    pub const fn from_degrees_unchecked(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Erstellt eine Koordinate und klemmt die Breite auf [-90, 90].
    ///
    /// Für Eingaben aus Pointer-Drags, die über den Kartenrand hinauslaufen können.
    /// Nicht-endliche Werte ergeben `None`.
    pub fn clamped(longitude: f64, latitude: f64) -> Option<Self> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }
        Some(Self {
            longitude: normalize_longitude(longitude),
            latitude: latitude.clamp(-90.0, 90.0),
        })
    }

    /// Längengrad in Dezimalgrad
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Breitengrad in Dezimalgrad
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Normalisiert einen Längengrad auf [-180, 180).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid kann bei Rundung exakt 360 liefern
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Kürzeste Längendifferenz von `from` nach `to` in Grad, in [-180, 180).
///
/// Über die Datumsgrenze hinweg ist (179.9 → -179.9) ein Schritt von +0.2°.
pub fn longitude_delta(from: Coordinate, to: Coordinate) -> f64 {
    normalize_longitude(to.longitude - from.longitude)
}

/// Großkreis-Distanz in Metern (Haversine, R = 6 371 000 m).
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rundungsfehler können h minimal über 1.0 heben
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Großkreis-Distanz in ganzen Yards.
///
/// Gerundet wird genau einmal, am Endwert.
pub fn distance_yards(a: Coordinate, b: Coordinate) -> u32 {
    meters_to_yards(distance_meters(a, b))
}

/// Rechnet Meter in gerundete Yards um (kaufmännisch, .5 rundet auf).
pub fn meters_to_yards(meters: f64) -> u32 {
    (meters * METERS_TO_YARDS).round().max(0.0) as u32
}

/// Anfangspeilung von `from` nach `to` in Grad [0, 360).
///
/// Bei identischen Punkten ist die Peilung undefiniert; es wird ohne
/// Sonderbehandlung das Ergebnis von `atan2(0, 0)` (= 0°) geliefert.
pub fn bearing_degrees(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees().rem_euclid(360.0);
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Mittelpunkt zweier Koordinaten (Mittelwert im Grad-Raum).
///
/// Auf Loch-Skala (wenige hundert Meter) weicht das vernachlässigbar
/// vom Großkreis-Mittelpunkt ab. Die Länge wird über die kürzere Seite
/// gemittelt, damit Löcher an der Datumsgrenze nicht auf die andere
/// Erdseite springen.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate {
        longitude: normalize_longitude(a.longitude + longitude_delta(a, b) / 2.0),
        latitude: (a.latitude + b.latitude) / 2.0,
    }
}
