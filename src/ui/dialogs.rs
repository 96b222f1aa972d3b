//! Datei-Dialog und Hinweis-Banner.

use crate::app::{AppIntent, NoticeKind, UiState};

/// Verarbeitet den ausstehenden Kurs-Öffnen-Dialog und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_open_course_dialog {
        ui_state.show_open_course_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Kursdatei", &["json"])
            .pick_file()
        {
            events.push(AppIntent::CourseFileSelected { path });
        }
    }

    events
}

/// Zeigt den aktuellen Hinweis als ruhiges Banner über der Karte.
pub fn show_notice_banner(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(notice) = &ui_state.notice else {
        return events;
    };

    let color = match notice.kind {
        NoticeKind::CourseLoadFailed | NoticeKind::OptionsSaveFailed => egui::Color32::from_rgb(230, 110, 90),
        NoticeKind::LocationUnavailable | NoticeKind::GpsModeLocked => egui::Color32::YELLOW,
    };

    egui::TopBottomPanel::top("notice_banner").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("⚠ {}", notice.text)).color(color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::NoticeDismissed);
                }
            });
        });
    });

    events
}
