//! Golf-Lochkarte (Viewer).
//!
//! Zeigt ein Loch mit Tee, Pin, verschiebbarem Ziel-Marker und optionaler
//! Live-Position. Distanzen werden bei jeder Änderung neu berechnet.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;
use golf_hole_map::shared::LocationSourceOptions;
use golf_hole_map::{ui, AppIntent, RenderSession, ViewerOptions};

/// Maximale Zeit zwischen zwei Frames, damit Standort-Ergebnisse ankommen
const LOCATION_POLL_FRAME: Duration = Duration::from_millis(250);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Golf-Lochkarte v{} startet...", env!("CARGO_PKG_VERSION"));

        let course_path = std::env::args_os().nth(1).map(PathBuf::from);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 860.0])
                .with_title("Golf-Lochkarte"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Golf-Lochkarte",
            native_options,
            Box::new(move |_cc| Ok(Box::new(HoleMapApp::new(course_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct HoleMapApp {
    session: RenderSession,
    input: ui::MapInputState,
}

impl HoleMapApp {
    fn new(course_path: Option<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let options = ViewerOptions::load_from_file(&config_path);

        let provider = match &options.location {
            LocationSourceOptions::Disabled => None,
            source => match source.build_provider() {
                Ok(provider) => Some(provider),
                Err(e) => {
                    log::error!("Standortquelle nicht nutzbar: {:#}", e);
                    None
                }
            },
        };

        let mut session = RenderSession::open(options, provider);
        if let Some(path) = course_path {
            if let Err(e) = session.dispatch(AppIntent::CourseFileSelected { path }) {
                log::error!("Kurs konnte nicht geladen werden: {:#}", e);
            }
        }

        Self {
            session,
            input: ui::MapInputState::new(),
        }
    }
}

impl eframe::App for HoleMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.state().should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let location_updates = self.session.tick(Instant::now());

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events || location_updates > 0 {
            ctx.request_repaint();
        } else if self.session.has_location_source() {
            ctx.request_repaint_after(LOCATION_POLL_FRAME);
        }
    }
}

impl HoleMapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let state = self.session.state();

        ui::render_status_bar(ctx, state);
        events.extend(ui::render_toolbar(ctx, state));
        events.extend(ui::show_notice_banner(ctx, &state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_map_events(ui, &response, state));

                ui::paint_hole_scene(
                    ui.painter(),
                    rect,
                    state.scene.as_ref(),
                    &state.view.camera,
                    &state.options,
                );
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.session.dispatch(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }

        // Dialog-Flag wird vom Controller gesetzt, der Dialog läuft hier im Host
        let dialog_events = ui::handle_file_dialogs(self.session.ui_state_mut());
        for event in dialog_events {
            if let Err(e) = self.session.dispatch(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
