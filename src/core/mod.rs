//! Core-Domänentypen: Koordinaten, Geo-Mathematik, Kurs, Kamera, Standort.

pub mod camera;
pub mod course;
/// Geo-Mathematik-Bibliothek
///
/// Haversine-Distanz, Peilung, Yard-Umrechnung und Mittelpunkt.
/// Jede Distanzanzeige im Projekt läuft über diese Funktionen.
pub mod geo;
pub mod location;
pub mod marker_offset;
pub mod target_mode;

pub use camera::MapCamera;
pub use course::{Course, Hole};
pub use geo::{bearing_degrees, distance_meters, distance_yards, midpoint, Coordinate};
pub use location::{
    DisabledLocationProvider, FixRequest, FixedLocationProvider, LiveFix, LocationError,
    LocationProvider, ReplayLocationProvider,
};
pub use marker_offset::{meters_per_pixel, offset_origin};
pub use target_mode::TargetMode;
