//! Application Controller für zentrale Event-Verarbeitung.
//!
//! Einziger Mutationspfad für den AppState: jeder Trigger (Drag,
//! Modus-Tap, Standort-Update, Lochwechsel) läuft als Intent hier durch.
//! Nach allen Commands eines Intents wird die Szene genau einmal aus dem
//! resultierenden Zustand gebaut.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Szene wird auch nach einem fehlgeschlagenen Command neu gebaut,
    /// damit sie nie hinter dem Zustand zurückbleibt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut result = Ok(());
        for command in commands {
            if let Err(e) = self.apply_command(state, command) {
                result = Err(e);
                break;
            }
        }

        self.rebuild_scene(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Dispatcht an Feature-Handler in `handlers/`.
    fn apply_command(&mut self, state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurs & Loch ===
            AppCommand::RequestOpenCourseDialog => handlers::course::request_open(state),
            AppCommand::LoadCourse { path } => handlers::course::load(state, &path)?,
            AppCommand::SetCourse { course } => handlers::course::set_course(state, course),
            AppCommand::SelectHole { index } => handlers::course::select_hole(state, index),

            // === Ziel-Marker ===
            AppCommand::BeginTargetDrag => handlers::target::begin_drag(state),
            AppCommand::MoveAimTarget { position } => {
                handlers::target::move_aim_target(state, position)
            }
            AppCommand::EndTargetDrag => handlers::target::end_drag(state),
            AppCommand::ToggleTargetMode => handlers::target::toggle_mode(state),

            // === Standort ===
            AppCommand::ApplyLocationFix { fix } => handlers::location::apply_fix(state, fix),
            AppCommand::ApplyLocationFailure { error } => {
                handlers::location::apply_failure(state, error)
            }
            AppCommand::RequestLocationRefresh => handlers::location::request_refresh(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ZoomCamera {
                delta_levels,
                focus,
            } => handlers::view::zoom(state, delta_levels, focus),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::FitCameraToHole => handlers::view::fit_camera_to_hole(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::SaveOptions { path } => handlers::dialog::save_options(state, &path)?,
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Szene aus einem Snapshot des aktuellen Zustands.
    fn rebuild_scene(&self, state: &mut AppState) {
        state.scene = render_scene::build(state);
        state.scene_revision += 1;
    }
}
