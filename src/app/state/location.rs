use crate::core::{LiveFix, LocationError};

/// Status der Standortabfrage für die Anzeige
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationStatus {
    /// Kein Provider aktiv
    #[default]
    Inactive,
    /// Erste Abfrage läuft
    Acquiring,
    /// Letzter Fix gültig
    Available,
    /// Letzte Abfrage fehlgeschlagen
    Unavailable(LocationError),
}

/// Live-Position der Session
#[derive(Debug, Clone, Default)]
pub struct LocationState {
    /// Letzter gültiger Fix
    pub live: Option<LiveFix>,
    /// Abfrage-Status
    pub status: LocationStatus,
    /// Host soll sofort eine neue Abfrage starten
    pub refresh_requested: bool,
    /// Anzahl empfangener Fixes
    pub fixes_received: u64,
}

impl LocationState {
    /// Erstellt einen leeren Standort-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn eine Live-Position vorliegt.
    pub fn is_available(&self) -> bool {
        self.live.is_some()
    }
}
