//! Live-Position: Datentypen, Fehlerarten und Standort-Provider.
//!
//! Ein Provider liefert blockierend genau einen Fix pro Anfrage. Das
//! Scheduling (Intervall, Timeout, In-Flight-Schutz) übernimmt der
//! `LocationPoller` im App-Layer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

/// Ein Positions-Fix mit Genauigkeitsradius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveFix {
    /// Gemessene Position
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Genauigkeitsradius in Metern
    pub accuracy_m: f64,
}

impl LiveFix {
    /// Erstellt einen Fix.
    pub fn new(coordinate: Coordinate, accuracy_m: f64) -> Self {
        Self {
            coordinate,
            accuracy_m,
        }
    }
}

/// Grund, warum kein Fix geliefert werden konnte.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// Standortzugriff verweigert oder deaktiviert
    #[error("Standortzugriff verweigert")]
    PermissionDenied,
    /// Anfrage hat das Zeitlimit überschritten
    #[error("Zeitüberschreitung bei der Standortabfrage")]
    Timeout,
    /// Kein Empfang
    #[error("Kein GPS-Signal")]
    NoSignal,
    /// Sonstiger Fehler des Providers
    #[error("Standort-Provider: {0}")]
    Provider(String),
}

/// Parameter einer einzelnen Fix-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixRequest {
    /// Maximale Wartezeit
    pub timeout: Duration,
    /// Hohe Genauigkeit anfordern (initialer Fix)
    pub high_accuracy: bool,
}

/// Quelle für Live-Positionen (Gerät, Simulation, Aufzeichnung).
///
/// `request_fix` darf blockieren; es wird nie auf dem UI-Thread aufgerufen.
pub trait LocationProvider: Send + Sync {
    /// Fordert genau einen Fix an.
    fn request_fix(&self, request: FixRequest) -> Result<LiveFix, LocationError>;
}

/// Provider ohne Standortzugriff.
#[derive(Debug, Default)]
pub struct DisabledLocationProvider;

impl LocationProvider for DisabledLocationProvider {
    fn request_fix(&self, _request: FixRequest) -> Result<LiveFix, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Provider mit fester Position (z.B. Desktop ohne GPS).
#[derive(Debug)]
pub struct FixedLocationProvider {
    fix: LiveFix,
}

impl FixedLocationProvider {
    /// Erstellt einen Provider, der immer `fix` liefert.
    pub fn new(fix: LiveFix) -> Self {
        Self { fix }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn request_fix(&self, _request: FixRequest) -> Result<LiveFix, LocationError> {
        Ok(self.fix)
    }
}

/// Spielt eine aufgezeichnete Spur ab; `None`-Einträge simulieren Signalverlust.
///
/// Jede Anfrage liefert den nächsten Eintrag, am Ende beginnt die Spur von vorn.
#[derive(Debug)]
pub struct ReplayLocationProvider {
    track: Vec<Option<LiveFix>>,
    cursor: AtomicUsize,
    step_delay: Duration,
}

impl ReplayLocationProvider {
    /// Erstellt einen Provider aus einer Spur.
    pub fn new(track: Vec<Option<LiveFix>>, step_delay: Duration) -> Self {
        Self {
            track,
            cursor: AtomicUsize::new(0),
            step_delay,
        }
    }

    /// Lädt eine Spur aus JSON (Array aus Fix-Objekten oder `null`).
    pub fn load_from_file(path: &Path, step_delay: Duration) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Spurdatei nicht lesbar: {}", path.display()))?;
        let track: Vec<Option<LiveFix>> = serde_json::from_str(&content)
            .with_context(|| format!("Spurdatei fehlerhaft: {}", path.display()))?;
        if track.is_empty() {
            anyhow::bail!("Spurdatei ist leer: {}", path.display());
        }
        log::info!("Spur geladen: {} Einträge aus {}", track.len(), path.display());
        Ok(Self::new(track, step_delay))
    }
}

impl LocationProvider for ReplayLocationProvider {
    fn request_fix(&self, request: FixRequest) -> Result<LiveFix, LocationError> {
        if self.track.is_empty() {
            return Err(LocationError::NoSignal);
        }
        if self.step_delay > request.timeout {
            std::thread::sleep(request.timeout);
            return Err(LocationError::Timeout);
        }
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.track.len();
        self.track[index].ok_or(LocationError::NoSignal)
    }
}
