//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, LocationStatus};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(course) = &state.course {
                ui.label(format!("Kurs: {}", course.name));
                ui.separator();
            } else {
                ui.label("Kein Kurs geladen");
                ui.separator();
            }

            match &state.scene {
                Ok(scene) => {
                    let par = scene
                        .par
                        .map_or_else(|| "–".to_string(), |par| par.to_string());
                    ui.label(format!(
                        "Loch {} | Par {} | {} yds",
                        scene.hole_number,
                        par,
                        scene.hole_length_yards()
                    ));
                    ui.separator();
                    ui.label(format!(
                        "{}: {} → Ziel {} yds | Ziel → Pin {} yds",
                        scene.mode.label(),
                        if scene.mode.is_gps() { "Standort" } else { "Tee" },
                        scene.near.distance_yards,
                        scene.far.distance_yards
                    ));
                }
                Err(reason) => {
                    ui.label(reason.to_string());
                }
            }

            ui.separator();

            let location = match &state.location.status {
                LocationStatus::Inactive => "Standort: aus".to_string(),
                LocationStatus::Acquiring => "Standort: wird ermittelt …".to_string(),
                LocationStatus::Available => state.location.live.map_or_else(
                    || "Standort: verfügbar".to_string(),
                    |fix| format!("Standort: ±{:.0} m", fix.accuracy_m),
                ),
                LocationStatus::Unavailable(error) => format!("Standort: {}", error),
            };
            ui.label(location);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Zoom: {:.1} | {:.2} m/px",
                    state.view.camera.zoom,
                    state.view.camera.meters_per_pixel()
                ));
            });
        });
    });
}
