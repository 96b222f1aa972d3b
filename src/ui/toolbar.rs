//! Toolbar: Kurs öffnen, Lochwechsel, Ziel-Modus, Standort, Kamera.

use crate::app::{AppIntent, AppState, LocationStatus};
use crate::core::TargetMode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_course = state.course.is_some();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("📂 Kurs öffnen…").clicked() {
                events.push(AppIntent::OpenCourseRequested);
            }

            ui.separator();

            // ── Lochwechsel ──
            let can_prev = has_course && state.hole_index > 0;
            let can_next = has_course && state.hole_index + 1 < state.hole_count();
            if ui.add_enabled(can_prev, egui::Button::new("◀")).clicked() {
                events.push(AppIntent::PreviousHoleRequested);
            }
            if let Some(hole) = state.current_hole() {
                ui.label(format!("Loch {} / {}", hole.number, state.hole_count()));
            } else {
                ui.label("Loch – / –");
            }
            if ui.add_enabled(can_next, egui::Button::new("▶")).clicked() {
                events.push(AppIntent::NextHoleRequested);
            }

            ui.separator();

            // ── Ziel-Modus ──
            let gps_enabled = state
                .scene
                .as_ref()
                .is_ok_and(|scene| scene.gps_toggle_enabled);
            let mode = state.hole.mode;
            if ui
                .add(egui::Button::new("⛳ PIN").selected(mode == TargetMode::Pin))
                .clicked()
                && mode == TargetMode::Gps
            {
                events.push(AppIntent::PinMarkerTapped);
            }
            let gps_button = ui
                .add_enabled(
                    gps_enabled,
                    egui::Button::new("📍 GPS").selected(mode == TargetMode::Gps),
                )
                .on_disabled_hover_text("Kein Standort verfügbar");
            if gps_button.clicked() && mode == TargetMode::Pin {
                events.push(AppIntent::GpsMarkerTapped);
            }

            // Inactive = Session ohne Standort-Provider
            let has_source = state.location.status != LocationStatus::Inactive;
            if ui
                .add_enabled(has_source, egui::Button::new("⟳ Standort"))
                .on_disabled_hover_text("Keine Standortquelle konfiguriert")
                .clicked()
            {
                events.push(AppIntent::LocationRefreshRequested);
            }

            ui.separator();

            // ── Kamera ──
            if ui.add_enabled(has_course, egui::Button::new("⤢ Einpassen")).clicked() {
                events.push(AppIntent::FitHoleRequested);
            }
            if ui.button("＋").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("－").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }

            ui.separator();

            if ui
                .button("💾 Optionen speichern")
                .on_hover_text("Schreibt golf_hole_map.toml neben die Anwendung")
                .clicked()
            {
                events.push(AppIntent::SaveOptionsRequested);
            }
        });
    });

    events
}
