use std::sync::Arc;

use crate::app::CommandLog;
use crate::core::{Course, Hole};
use crate::shared::{HoleScene, RenderUnavailable, ViewerOptions};

use super::{HoleSessionState, LocationState, UiState, ViewState};

/// Hauptzustand einer Lochkarten-Session
pub struct AppState {
    /// Aktuell geladener Kurs (None = kein Kurs)
    pub course: Option<Arc<Course>>,
    /// Index des angezeigten Lochs (0-basiert)
    pub hole_index: usize,
    /// Ziel-Marker und Modus des aktuellen Lochs
    pub hole: HoleSessionState,
    /// Live-Position und Abfrage-Status
    pub location: LocationState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Zuletzt gebaute Szene (oder Grund, warum keine gebaut werden kann)
    pub scene: Result<HoleScene, RenderUnavailable>,
    /// Zähler der Szenen-Neuberechnungen
    pub scene_revision: u64,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            course: None,
            hole_index: 0,
            hole: HoleSessionState::new(),
            location: LocationState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            scene: Err(RenderUnavailable::NoHole),
            scene_revision: 0,
            command_log: CommandLog::new(),
            options: ViewerOptions::default(),
            should_exit: false,
        }
    }

    /// Erstellt einen State mit vorgegebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Aktuell angezeigtes Loch
    pub fn current_hole(&self) -> Option<&Hole> {
        self.course.as_ref()?.hole(self.hole_index)
    }

    /// Anzahl der Löcher (für UI-Anzeige)
    pub fn hole_count(&self) -> usize {
        self.course.as_ref().map_or(0, |course| course.hole_count())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
