//! Lochszene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` (oder ein anderer Host)
//! sie konsumiert.

use crate::core::{Coordinate, LiveFix, TargetMode};

/// Grund, warum für das aktuelle Loch keine Szene gebaut werden kann.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderUnavailable {
    /// Kein Kurs geladen bzw. kein Loch gewählt
    #[error("Kein Loch geladen")]
    NoHole,
    /// Tee-Koordinate fehlt
    #[error("Loch {hole}: Tee-Koordinate fehlt")]
    MissingTee { hole: u32 },
    /// Pin-Koordinate fehlt
    #[error("Loch {hole}: Pin-Koordinate fehlt")]
    MissingPin { hole: u32 },
}

/// Eine Verbindungslinie mit ihrer Distanz.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    /// Wahrer Ursprung (Grundlage der Distanz)
    pub origin: Coordinate,
    /// Gezeichneter Startpunkt (ggf. an den Markerrand versetzt)
    pub drawn_start: Coordinate,
    /// Endpunkt
    pub end: Coordinate,
    /// Distanz zwischen wahrem Ursprung und Endpunkt in Metern
    pub distance_meters: f64,
    /// Dieselbe Distanz in Yards, einmal gerundet
    pub distance_yards: u32,
}

/// Schwebendes Distanz-Label.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLabel {
    /// Position (Mitte der wahren Endpunkte)
    pub position: Coordinate,
    /// Anzeigetext, z.B. "608 yds"
    pub text: String,
}

/// Read-only Daten für einen Render-Frame der Lochkarte.
///
/// Wird pro Intent genau einmal aus einem Zustands-Snapshot gebaut; Linien
/// und Labels stammen daher immer aus demselben Stand.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleScene {
    /// Lochnummer
    pub hole_number: u32,
    /// Par (falls gepflegt)
    pub par: Option<u8>,
    /// Abschlag
    pub tee: Coordinate,
    /// Fahne
    pub pin: Coordinate,
    /// Ziel-Marker
    pub aim_target: Coordinate,
    /// Live-Position (falls verfügbar)
    pub live_position: Option<LiveFix>,
    /// Aktiver Ziel-Modus
    pub mode: TargetMode,
    /// Ursprung → Ziel
    pub near: SegmentGeometry,
    /// Ziel → Pin
    pub far: SegmentGeometry,
    /// Label des nahen Segments
    pub near_label: DistanceLabel,
    /// Label des fernen Segments
    pub far_label: DistanceLabel,
    /// Peilung Tee → Pin in Grad (Kartenausrichtung)
    pub hole_bearing_deg: f64,
    /// Ob der GPS-Modus aktuell anwählbar ist
    pub gps_toggle_enabled: bool,
    /// Ob der Ziel-Marker gerade gezogen wird
    pub dragging: bool,
}

impl HoleScene {
    /// Gesamtlänge Tee → Pin in Yards.
    pub fn hole_length_yards(&self) -> u32 {
        crate::core::distance_yards(self.tee, self.pin)
    }
}
