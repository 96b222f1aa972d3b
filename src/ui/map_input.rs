//! Karten-Input: Marker-Taps, Ziel-Drag, Kamera-Pan und Scroll-Zoom → AppIntent.

use glam::DVec2;

use crate::app::{AppIntent, AppState};
use crate::core::{Coordinate, MapCamera};
use crate::shared::HoleScene;

/// Getroffener Marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerHit {
    /// Ziel-Marker (ziehbar)
    AimTarget,
    /// Live-Position
    Gps,
    /// Fahne
    Pin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    AimTarget,
    CameraPan,
}

/// Input-Zustand der Kartenansicht über Frames hinweg
#[derive(Debug, Default)]
pub struct MapInputState {
    primary_drag_mode: PrimaryDragMode,
}

impl MapInputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let viewport_size = [response.rect.width(), response.rect.height()];
        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        let camera = &state.view.camera;
        let scene = state.scene.as_ref().ok();
        let tap_radius = f64::from(state.options.tap_radius_px);
        let to_local = |pos: egui::Pos2| {
            DVec2::new(
                f64::from(pos.x - response.rect.min.x),
                f64::from(pos.y - response.rect.min.y),
            )
        };

        // ── Drag-Start ──
        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin = exakte Klickposition vor der Drag-Schwelle
            let press = ui.input(|i| i.pointer.press_origin()).map(to_local);
            let aim_hit = press.zip(scene).is_some_and(|(p, scene)| {
                hit_test(scene, camera, viewport_size, p, tap_radius) == Some(MarkerHit::AimTarget)
            });

            if aim_hit {
                if let Some(position) = press
                    .and_then(|p| camera.screen_to_coordinate(p, viewport_size))
                {
                    events.push(AppIntent::AimTargetDragStarted { position });
                    self.primary_drag_mode = PrimaryDragMode::AimTarget;
                }
            } else {
                self.primary_drag_mode = PrimaryDragMode::CameraPan;
            }
        }

        // ── Drag-Update ──
        if response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::AimTarget => {
                    if let Some(position) = response
                        .interact_pointer_pos()
                        .and_then(|p| camera.screen_to_coordinate(to_local(p), viewport_size))
                    {
                        events.push(AppIntent::AimTargetDragged { position });
                    }
                }
                PrimaryDragMode::CameraPan => {
                    let delta = response.drag_delta();
                    if delta != egui::Vec2::ZERO {
                        events.push(AppIntent::CameraPan {
                            delta_px: DVec2::new(f64::from(delta.x), f64::from(delta.y)),
                        });
                    }
                }
                PrimaryDragMode::None => {}
            }
        }

        // ── Drag-Ende ──
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            if self.primary_drag_mode == PrimaryDragMode::AimTarget {
                events.push(AppIntent::AimTargetDragEnded);
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }

        // ── Taps ──
        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .map(to_local)
                .zip(scene)
                .and_then(|(p, scene)| hit_test(scene, camera, viewport_size, p, tap_radius));
            match hit {
                Some(MarkerHit::Pin) => events.push(AppIntent::PinMarkerTapped),
                Some(MarkerHit::Gps) => events.push(AppIntent::GpsMarkerTapped),
                _ => {}
            }
        }

        // ── Scroll-Zoom auf Mausposition ──
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 && response.hovered() {
            let focus: Option<Coordinate> = response
                .hover_pos()
                .and_then(|p| camera.screen_to_coordinate(to_local(p), viewport_size));
            events.push(AppIntent::CameraZoom {
                delta_levels: f64::from(scroll) * state.options.camera_scroll_zoom_per_px,
                focus,
            });
        }

        events
    }
}

/// Bestimmt den Marker unter einer Bildschirmposition.
///
/// Vorrang: Ziel vor Live-Position vor Pin, damit der Ziel-Marker auf dem
/// Pin weiterhin ziehbar bleibt.
pub fn hit_test(
    scene: &HoleScene,
    camera: &MapCamera,
    viewport_size: [f32; 2],
    screen_pos: DVec2,
    radius_px: f64,
) -> Option<MarkerHit> {
    let within = |coordinate: Coordinate| {
        camera
            .coordinate_to_screen(coordinate, viewport_size)
            .distance(screen_pos)
            <= radius_px
    };

    if within(scene.aim_target) {
        return Some(MarkerHit::AimTarget);
    }
    if scene.live_position.is_some_and(|fix| within(fix.coordinate)) {
        return Some(MarkerHit::Gps);
    }
    if within(scene.pin) {
        return Some(MarkerHit::Pin);
    }
    None
}
