//! Kursdaten: Löcher mit Tee-, Pin- und vorgeschlagener Zielkoordinate.
//!
//! Die Daten kommen aus einer JSON-Datei und sind für den Kern read-only.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::geo::{midpoint, Coordinate};

/// Ein Loch mit seinen festen Referenzpunkten.
///
/// Tee und Pin sind optional: unvollständig gepflegte Löcher werden geladen,
/// aber nicht gerendert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Lochnummer (1-basiert, wie auf der Scorekarte)
    pub number: u32,
    /// Par des Lochs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<u8>,
    /// Abschlag
    #[serde(default)]
    pub tee: Option<Coordinate>,
    /// Fahne
    #[serde(default)]
    pub pin: Option<Coordinate>,
    /// Gepflegter Zielvorschlag (Landezone)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_target: Option<Coordinate>,
}

impl Hole {
    /// Erstellt ein vollständiges Loch ohne Zielvorschlag.
    pub fn new(number: u32, tee: Coordinate, pin: Coordinate) -> Self {
        Self {
            number,
            par: None,
            tee: Some(tee),
            pin: Some(pin),
            suggested_target: None,
        }
    }

    /// Tee und Pin, falls beide vorhanden sind.
    pub fn reference_points(&self) -> Option<(Coordinate, Coordinate)> {
        Some((self.tee?, self.pin?))
    }

    /// Startwert des Ziel-Markers: Vorschlag, sonst Mitte zwischen Tee und Pin.
    pub fn initial_aim_target(&self) -> Option<Coordinate> {
        let (tee, pin) = self.reference_points()?;
        Some(self.suggested_target.unwrap_or_else(|| midpoint(tee, pin)))
    }
}

/// Ein Golfplatz mit Löchern in Spielreihenfolge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Anzeigename des Platzes
    pub name: String,
    /// Löcher in Datei-Reihenfolge
    pub holes: Vec<Hole>,
}

impl Course {
    /// Parst einen Kurs aus JSON.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let course: Course = serde_json::from_str(json).context("Kursdatei ist kein gültiges JSON")?;
        if course.holes.is_empty() {
            anyhow::bail!("Kurs '{}' enthält keine Löcher", course.name);
        }
        Ok(course)
    }

    /// Lädt einen Kurs aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Kursdatei nicht lesbar: {}", path.display()))?;
        let course = Self::from_json_str(&content)
            .with_context(|| format!("Kursdatei fehlerhaft: {}", path.display()))?;

        let incomplete = course
            .holes
            .iter()
            .filter(|hole| hole.reference_points().is_none())
            .count();
        log::info!(
            "Kurs '{}' geladen: {} Löcher ({} ohne Tee/Pin)",
            course.name,
            course.holes.len(),
            incomplete
        );
        Ok(course)
    }

    /// Anzahl der Löcher
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Loch an Index (0-basiert)
    pub fn hole(&self, index: usize) -> Option<&Hole> {
        self.holes.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_HOLES: &str = r#"{
        "name": "Testplatz",
        "holes": [
            {
                "number": 1,
                "par": 4,
                "tee": { "longitude": 0.0, "latitude": 0.0 },
                "pin": { "longitude": 0.0, "latitude": 0.01 }
            },
            {
                "number": 2,
                "tee": { "longitude": 0.0, "latitude": 0.02 },
                "pin": null,
                "suggested_target": { "longitude": 0.001, "latitude": 0.021 }
            }
        ]
    }"#;

    #[test]
    fn parses_holes_with_optional_points() {
        let course = Course::from_json_str(TWO_HOLES).expect("Kurs sollte parsen");
        assert_eq!(course.hole_count(), 2);
        assert_eq!(course.holes[0].par, Some(4));
        assert!(course.holes[0].reference_points().is_some());
        assert!(course.holes[1].pin.is_none());
        assert!(course.holes[1].reference_points().is_none());
    }

    #[test]
    fn initial_aim_target_defaults_to_midpoint() {
        let course = Course::from_json_str(TWO_HOLES).expect("Kurs sollte parsen");
        let aim = course.holes[0]
            .initial_aim_target()
            .expect("Loch 1 ist vollständig");
        assert_relative_eq!(aim.latitude(), 0.005);
        assert_relative_eq!(aim.longitude(), 0.0);
    }

    #[test]
    fn initial_aim_target_prefers_suggestion() {
        let tee = Coordinate::from_degrees_unchecked(0.0, 0.0);
        let pin = Coordinate::from_degrees_unchecked(0.0, 0.01);
        let suggested = Coordinate::from_degrees_unchecked(0.0005, 0.006);
        let mut hole = Hole::new(3, tee, pin);
        hole.suggested_target = Some(suggested);
        assert_eq!(hole.initial_aim_target(), Some(suggested));
    }

    #[test]
    fn incomplete_hole_has_no_aim_target() {
        let course = Course::from_json_str(TWO_HOLES).expect("Kurs sollte parsen");
        assert_eq!(course.holes[1].initial_aim_target(), None);
    }

    #[test]
    fn rejects_empty_course() {
        let err = Course::from_json_str(r#"{"name": "Leer", "holes": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_invalid_latitude() {
        let json = r#"{"name": "X", "holes": [
            {"number": 1, "tee": {"longitude": 0.0, "latitude": 91.0}, "pin": null}
        ]}"#;
        assert!(Course::from_json_str(json).is_err());
    }
}
