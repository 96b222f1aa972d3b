//! Handler für Live-Position-Updates.

use crate::app::state::{LocationStatus, Notice, NoticeKind};
use crate::app::AppState;
use crate::core::{LiveFix, LocationError, TargetMode};

/// Übernimmt einen neuen Fix.
pub fn apply_fix(state: &mut AppState, fix: LiveFix) {
    if !state.location.is_available() {
        log::info!(
            "Standort verfügbar (±{:.0} m): ({:.6}, {:.6})",
            fix.accuracy_m,
            fix.coordinate.longitude(),
            fix.coordinate.latitude()
        );
    }
    state.location.live = Some(fix);
    state.location.status = LocationStatus::Available;
    state.location.fixes_received += 1;
    state.ui.clear_notice_of(NoticeKind::LocationUnavailable);
}

/// Übernimmt eine fehlgeschlagene Abfrage.
///
/// Die Live-Position wird verworfen; ein aktiver GPS-Modus fällt auf PIN
/// zurück, bis wieder ein Fix vorliegt. Der Hinweis erscheint nur beim
/// Wechsel nach `Unavailable` oder wenn der GPS-Modus gerade verloren ging,
/// ein weggeklickter Hinweis bleibt bei Folgefehlern weg.
pub fn apply_failure(state: &mut AppState, error: LocationError) {
    let was_gps = state.hole.mode == TargetMode::Gps;
    let was_unavailable = matches!(state.location.status, LocationStatus::Unavailable(_));
    state.location.live = None;
    state.location.status = LocationStatus::Unavailable(error.clone());
    state.hole.mode = state.hole.mode.on_location_lost();

    if was_unavailable && !was_gps {
        log::debug!("Standort weiterhin nicht verfügbar: {}", error);
        return;
    }

    let text = if was_gps {
        log::warn!("Standort verloren ({}), zurück im PIN-Modus", error);
        format!("Standort nicht verfügbar ({}), PIN-Modus aktiv", error)
    } else {
        log::info!("Standort nicht verfügbar: {}", error);
        format!("Standort nicht verfügbar ({})", error)
    };
    state.ui.notice = Some(Notice::new(NoticeKind::LocationUnavailable, text));
}

/// Fordert beim Host eine sofortige Abfrage an.
pub fn request_refresh(state: &mut AppState) {
    state.location.refresh_requested = true;
}
