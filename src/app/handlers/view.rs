//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::Coordinate;

/// Aktualisiert die Viewport-Größe und holt eine ausstehende Ausrichtung nach.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    if state.view.fit_pending {
        fit_camera_to_hole(state);
    }
}

/// Zoomt um `delta_levels`; mit Fokuspunkt bleibt dieser an gleicher Bildschirmposition.
pub fn zoom(state: &mut AppState, delta_levels: f64, focus: Option<Coordinate>) {
    let viewport = state.view.viewport_size;
    let focus_screen = focus.map(|f| state.view.camera.coordinate_to_screen(f, viewport));

    state.view.camera.zoom_by_clamped(
        delta_levels,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    // Kamera korrigieren, damit der Fokuspunkt unter dem Zeiger bleibt
    if let (Some(focus), Some(before)) = (focus, focus_screen) {
        let after = state.view.camera.coordinate_to_screen(focus, viewport);
        state.view.camera.pan_pixels(before - after, viewport);
    }
}

/// Verschiebt die Kamera um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::DVec2) {
    let viewport = state.view.viewport_size;
    state.view.camera.pan_pixels(delta_px, viewport);
}

/// Richtet die Kamera auf das aktuelle Loch aus (Tee unten, Pin oben).
///
/// Ohne bekannten Viewport bleibt die Ausrichtung vorgemerkt.
pub fn fit_camera_to_hole(state: &mut AppState) {
    let Some((tee, pin)) = state.current_hole().and_then(|hole| hole.reference_points()) else {
        state.view.fit_pending = false;
        return;
    };
    if !state.view.has_viewport() {
        state.view.fit_pending = true;
        return;
    }

    let viewport = state.view.viewport_size;
    state.view.camera.fit_hole(tee, pin, viewport);
    state.view.camera.zoom = state
        .view
        .camera
        .zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
    state.view.fit_pending = false;
}
