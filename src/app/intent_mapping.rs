//! Mapping von UI-Intents auf mutierende App-Commands.

use super::handlers::course::{next_hole_index, previous_hole_index};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ViewerOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenCourseRequested => vec![AppCommand::RequestOpenCourseDialog],
        AppIntent::CourseFileSelected { path } => vec![AppCommand::LoadCourse { path }],
        AppIntent::CourseLoaded { course } => vec![
            AppCommand::SetCourse { course },
            AppCommand::SelectHole { index: 0 },
        ],
        AppIntent::HoleSelected { index } => vec![AppCommand::SelectHole { index }],
        AppIntent::NextHoleRequested => next_hole_index(state)
            .filter(|&index| index != state.hole_index)
            .map(|index| vec![AppCommand::SelectHole { index }])
            .unwrap_or_default(),
        AppIntent::PreviousHoleRequested => previous_hole_index(state)
            .filter(|&index| index != state.hole_index)
            .map(|index| vec![AppCommand::SelectHole { index }])
            .unwrap_or_default(),

        AppIntent::AimTargetDragStarted { position } => vec![
            AppCommand::BeginTargetDrag,
            AppCommand::MoveAimTarget { position },
        ],
        AppIntent::AimTargetDragged { position } => {
            vec![AppCommand::MoveAimTarget { position }]
        }
        AppIntent::AimTargetDragEnded => vec![AppCommand::EndTargetDrag],

        AppIntent::PinMarkerTapped | AppIntent::GpsMarkerTapped => {
            vec![AppCommand::ToggleTargetMode]
        }

        AppIntent::LocationFixReceived { fix } => vec![AppCommand::ApplyLocationFix { fix }],
        AppIntent::LocationFailed { error } => {
            vec![AppCommand::ApplyLocationFailure { error }]
        }
        AppIntent::LocationRefreshRequested => vec![AppCommand::RequestLocationRefresh],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraZoom {
            delta_levels,
            focus,
        } => vec![AppCommand::ZoomCamera {
            delta_levels,
            focus,
        }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            delta_levels: state.options.camera_zoom_step,
            focus: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            delta_levels: -state.options.camera_zoom_step,
            focus: None,
        }],
        AppIntent::FitHoleRequested => vec![AppCommand::FitCameraToHole],

        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: ViewerOptions::config_path(),
        }],
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
