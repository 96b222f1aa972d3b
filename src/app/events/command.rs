use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{Coordinate, Course, LiveFix, LocationError};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kurs-Öffnen-Dialog anfordern
    RequestOpenCourseDialog,
    /// Kurs aus Datei laden
    LoadCourse { path: PathBuf },
    /// Bereits geladenen Kurs übernehmen
    SetCourse { course: Arc<Course> },
    /// Loch wechseln (setzt Ziel und Modus zurück)
    SelectHole { index: usize },

    /// Drag des Ziel-Markers beginnen
    BeginTargetDrag,
    /// Ziel-Marker auf Position setzen
    MoveAimTarget { position: Coordinate },
    /// Drag des Ziel-Markers abschließen
    EndTargetDrag,

    /// Ziel-Modus umschalten (PIN ↔ GPS)
    ToggleTargetMode,

    /// Neuen Fix übernehmen
    ApplyLocationFix { fix: LiveFix },
    /// Standortverlust übernehmen (GPS fällt auf PIN zurück)
    ApplyLocationFailure { error: LocationError },
    /// Sofortige Standortabfrage anfordern
    RequestLocationRefresh,

    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        delta_levels: f64,
        focus: Option<Coordinate>,
    },
    /// Kamera um Bildschirm-Delta verschieben
    PanCamera { delta_px: glam::DVec2 },
    /// Kamera auf das aktuelle Loch ausrichten
    FitCameraToHole,

    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
    /// Hinweis-Banner schließen
    DismissNotice,
    /// Anwendung beenden
    RequestExit,
}
