//! Builder für die Lochszene aus dem AppState (Live-Render-Sync).
//!
//! Beide Segmente und beide Labels entstehen in einem Aufruf aus demselben
//! Zustand. Der GPS-Versatz betrifft nur den gezeichneten Startpunkt, nie
//! die Distanz.

use crate::app::AppState;
use crate::core::geo::meters_to_yards;
use crate::core::{
    bearing_degrees, distance_meters, midpoint, offset_origin, Coordinate, LiveFix, TargetMode,
};
use crate::shared::{DistanceLabel, HoleScene, RenderUnavailable, SegmentGeometry};

/// Baut eine HoleScene aus dem aktuellen AppState.
///
/// Fehlen Tee oder Pin, wird keine Geometrie berechnet.
pub fn build(state: &AppState) -> Result<HoleScene, RenderUnavailable> {
    let hole = state.current_hole().ok_or(RenderUnavailable::NoHole)?;
    let tee = hole
        .tee
        .ok_or(RenderUnavailable::MissingTee { hole: hole.number })?;
    let pin = hole
        .pin
        .ok_or(RenderUnavailable::MissingPin { hole: hole.number })?;
    let aim_target = state
        .hole
        .aim_target
        .unwrap_or_else(|| hole.suggested_target.unwrap_or_else(|| midpoint(tee, pin)));

    let live_position = state.location.live;
    let mode = state.hole.mode;

    let near = match (mode, live_position) {
        (TargetMode::Gps, Some(fix)) => near_segment_from_live(
            fix,
            aim_target,
            f64::from(state.options.gps_marker_radius_px),
            state.view.camera.zoom,
        ),
        _ => segment(tee, tee, aim_target),
    };
    let far = segment(aim_target, aim_target, pin);

    Ok(HoleScene {
        hole_number: hole.number,
        par: hole.par,
        tee,
        pin,
        aim_target,
        live_position,
        mode,
        near_label: label(&near),
        far_label: label(&far),
        near,
        far,
        hole_bearing_deg: bearing_degrees(tee, pin),
        gps_toggle_enabled: live_position.is_some(),
        dragging: state.hole.dragging,
    })
}

/// Nahes Segment ab der Live-Position, Start an den Markerrand versetzt.
fn near_segment_from_live(
    fix: LiveFix,
    aim_target: Coordinate,
    marker_radius_px: f64,
    zoom: f64,
) -> SegmentGeometry {
    let origin = fix.coordinate;
    let drawn_start = offset_origin(origin, aim_target, marker_radius_px, zoom, origin.latitude());
    segment(origin, drawn_start, aim_target)
}

fn segment(origin: Coordinate, drawn_start: Coordinate, end: Coordinate) -> SegmentGeometry {
    let distance_meters = distance_meters(origin, end);
    SegmentGeometry {
        origin,
        drawn_start,
        end,
        distance_meters,
        distance_yards: meters_to_yards(distance_meters),
    }
}

fn label(segment: &SegmentGeometry) -> DistanceLabel {
    DistanceLabel {
        position: midpoint(segment.origin, segment.end),
        text: format!("{} yds", segment.distance_yards),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Coordinate, Course, Hole, LiveFix, TargetMode};
    use crate::shared::RenderUnavailable;
    use std::sync::Arc;

    fn state_with_hole(hole: Hole) -> AppState {
        let mut state = AppState::new();
        state.hole.aim_target = hole.initial_aim_target();
        state.course = Some(Arc::new(Course {
            name: "Test".into(),
            holes: vec![hole],
        }));
        state
    }

    #[test]
    fn missing_pin_is_unavailable() {
        let mut hole = Hole::new(
            7,
            Coordinate::from_degrees_unchecked(0.0, 0.0),
            Coordinate::from_degrees_unchecked(0.0, 0.01),
        );
        hole.pin = None;
        let state = state_with_hole(hole);

        assert_eq!(build(&state), Err(RenderUnavailable::MissingPin { hole: 7 }));
    }

    #[test]
    fn no_course_is_unavailable() {
        assert_eq!(build(&AppState::new()), Err(RenderUnavailable::NoHole));
    }

    #[test]
    fn gps_offset_only_moves_drawn_start() {
        let tee = Coordinate::from_degrees_unchecked(0.0, 0.0);
        let pin = Coordinate::from_degrees_unchecked(0.0, 0.01);
        let mut state = state_with_hole(Hole::new(1, tee, pin));
        let live = Coordinate::from_degrees_unchecked(0.0, 0.001);
        state.location.live = Some(LiveFix::new(live, 4.0));
        state.hole.mode = TargetMode::Gps;
        state.view.camera.zoom = 18.0;

        let scene = build(&state).expect("Szene sollte gebaut werden");

        assert_eq!(scene.near.origin, live);
        assert_ne!(scene.near.drawn_start, live);
        assert!(scene.near.drawn_start.latitude() > live.latitude());
        let expected_m = crate::core::distance_meters(live, scene.aim_target);
        assert_eq!(scene.near.distance_meters, expected_m);
    }

    #[test]
    fn labels_sit_on_segment_midpoints() {
        let tee = Coordinate::from_degrees_unchecked(0.0, 0.0);
        let pin = Coordinate::from_degrees_unchecked(0.0, 0.01);
        let state = state_with_hole(Hole::new(1, tee, pin));

        let scene = build(&state).expect("Szene sollte gebaut werden");

        approx::assert_relative_eq!(scene.near_label.position.latitude(), 0.0025);
        approx::assert_relative_eq!(scene.far_label.position.latitude(), 0.0075);
        assert_eq!(scene.near_label.text, format!("{} yds", scene.near.distance_yards));
    }
}
