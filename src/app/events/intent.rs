use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{Coordinate, Course, LiveFix, LocationError};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kurs-Datei öffnen (zeigt Dateidialog)
    OpenCourseRequested,
    /// Kurs-Datei wurde im Dialog ausgewählt
    CourseFileSelected { path: PathBuf },
    /// Kursdaten wurden vom Host direkt übergeben
    CourseLoaded { course: Arc<Course> },
    /// Loch per Index (0-basiert) wählen
    HoleSelected { index: usize },
    /// Nächstes Loch
    NextHoleRequested,
    /// Vorheriges Loch
    PreviousHoleRequested,

    /// Drag-Lifecycle Start: Ziel-Marker wurde gegriffen
    AimTargetDragStarted { position: Coordinate },
    /// Drag-Lifecycle Update: Zeiger bewegt (jedes Pointer-Move-Event)
    AimTargetDragged { position: Coordinate },
    /// Drag-Lifecycle Ende: Ziel-Marker losgelassen
    AimTargetDragEnded,

    /// Pin-Marker angetippt (schaltet den Ziel-Modus um)
    PinMarkerTapped,
    /// GPS-Marker angetippt (schaltet den Ziel-Modus um)
    GpsMarkerTapped,

    /// Standort-Provider hat einen Fix geliefert
    LocationFixReceived { fix: LiveFix },
    /// Standort-Abfrage fehlgeschlagen
    LocationFailed { error: LocationError },
    /// Standort sofort neu abfragen
    LocationRefreshRequested,

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera zoomen (Level-Delta, optional auf einen Fokuspunkt)
    CameraZoom {
        delta_levels: f64,
        focus: Option<Coordinate>,
    },
    /// Kamera um Bildschirm-Delta verschieben
    CameraPan { delta_px: glam::DVec2 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf das aktuelle Loch ausrichten
    FitHoleRequested,

    /// Aktuelle Optionen in die Optionen-Datei schreiben
    SaveOptionsRequested,
    /// Hinweis-Banner schließen
    NoticeDismissed,
    /// Anwendung beenden
    ExitRequested,
}
