//! Handler für Ziel-Marker-Drag und Ziel-Modus.

use crate::app::state::{Notice, NoticeKind};
use crate::app::AppState;
use crate::core::{distance_yards, Coordinate, TargetMode};

/// Startet den Drag des Ziel-Markers.
pub fn begin_drag(state: &mut AppState) {
    let Some(aim) = state.hole.aim_target else {
        log::debug!("Drag ohne Ziel-Marker ignoriert");
        return;
    };
    state.hole.dragging = true;
    state.hole.drag_start = Some(aim);
}

/// Setzt den Ziel-Marker (während eines Drags bei jedem Pointer-Move).
pub fn move_aim_target(state: &mut AppState, position: Coordinate) {
    if state.hole.aim_target.is_none() {
        return;
    }
    state.hole.aim_target = Some(position);
}

/// Schließt den Drag ab und protokolliert die Verschiebung.
pub fn end_drag(state: &mut AppState) {
    if !state.hole.dragging {
        return;
    }
    state.hole.dragging = false;
    if let (Some(start), Some(end)) = (state.hole.drag_start.take(), state.hole.aim_target) {
        log::debug!(
            "Ziel verschoben um {} yds auf ({:.6}, {:.6})",
            distance_yards(start, end),
            end.longitude(),
            end.latitude()
        );
    }
}

/// Schaltet zwischen PIN- und GPS-Modus um.
///
/// PIN → GPS nur mit Live-Position; sonst bleibt PIN aktiv und ein Hinweis
/// wird gesetzt.
pub fn toggle_mode(state: &mut AppState) {
    let current = state.hole.mode;
    let live_available = state.location.is_available();
    let next = current.toggled(live_available);

    if current == TargetMode::Pin && next == TargetMode::Pin {
        log::debug!("GPS-Modus ohne Live-Position angefordert");
        state.ui.notice = Some(Notice::new(
            NoticeKind::GpsModeLocked,
            "GPS-Modus erst mit verfügbarem Standort",
        ));
        return;
    }

    state.ui.clear_notice_of(NoticeKind::GpsModeLocked);
    state.hole.mode = next;
    log::info!("Ziel-Modus: {} → {}", current.label(), next.label());
}
