//! Handler für Kurs-Laden und Lochwechsel.

use std::path::Path;
use std::sync::Arc;

use crate::app::state::{Notice, NoticeKind};
use crate::app::AppState;
use crate::core::Course;

/// Öffnet den Kurs-Dateidialog.
pub fn request_open(state: &mut AppState) {
    state.ui.show_open_course_dialog = true;
}

/// Lädt einen Kurs aus einer JSON-Datei und zeigt das erste Loch.
///
/// Bei Fehler bleibt der bisherige Kurs erhalten; ein Hinweis wird gesetzt
/// und der Fehler an den Aufrufer propagiert.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let course = match Course::load_from_file(path) {
        Ok(course) => course,
        Err(e) => {
            state.ui.notice = Some(Notice::new(
                NoticeKind::CourseLoadFailed,
                format!("Kurs konnte nicht geladen werden: {}", path.display()),
            ));
            return Err(e);
        }
    };
    state.ui.clear_notice_of(NoticeKind::CourseLoadFailed);
    set_course(state, Arc::new(course));
    select_hole(state, 0);
    Ok(())
}

/// Übernimmt einen Kurs (ohne Lochwahl).
pub fn set_course(state: &mut AppState, course: Arc<Course>) {
    log::info!(
        "Kurs '{}' übernommen ({} Löcher)",
        course.name,
        course.hole_count()
    );
    state.course = Some(course);
}

/// Wechselt das Loch und setzt die Session zurück.
///
/// Ziel = Vorschlag oder Mitte Tee/Pin, Modus = PIN, Kamera wird ausgerichtet.
/// Ungültige Indizes werden auf das letzte Loch begrenzt.
pub fn select_hole(state: &mut AppState, index: usize) {
    let hole_count = state.hole_count();
    if hole_count == 0 {
        log::warn!("Lochwechsel ohne geladenen Kurs ignoriert");
        return;
    }
    let index = index.min(hole_count - 1);
    state.hole_index = index;

    let aim_target = state.current_hole().and_then(|hole| hole.initial_aim_target());
    state.hole.reset(aim_target);
    state.ui.clear_notice_of(NoticeKind::GpsModeLocked);
    state.view.fit_pending = true;
    super::view::fit_camera_to_hole(state);

    match state.current_hole() {
        Some(hole) if hole.reference_points().is_some() => {
            log::info!("Loch {} gewählt (Index {})", hole.number, index);
        }
        Some(hole) => {
            log::warn!(
                "Loch {} hat unvollständige Referenzpunkte, keine Darstellung",
                hole.number
            );
        }
        None => {}
    }
}

/// Index des nächsten Lochs (ohne Umlauf), `None` ohne Kurs.
pub fn next_hole_index(state: &AppState) -> Option<usize> {
    let count = state.hole_count();
    (count > 0).then(|| (state.hole_index + 1).min(count - 1))
}

/// Index des vorherigen Lochs (ohne Umlauf), `None` ohne Kurs.
pub fn previous_hole_index(state: &AppState) -> Option<usize> {
    (state.hole_count() > 0).then(|| state.hole_index.saturating_sub(1))
}
