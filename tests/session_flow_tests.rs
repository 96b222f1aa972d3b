use approx::assert_relative_eq;
use golf_hole_map::app::{LocationStatus, NoticeKind};
use golf_hole_map::{
    distance_meters, distance_yards, AppController, AppIntent, AppState, Coordinate, Course,
    HoleScene, LiveFix, LocationError, RenderUnavailable, TargetMode,
};
use std::sync::Arc;

const VIEWPORT: [f32; 2] = [480.0, 800.0];

fn c(lon: f64, lat: f64) -> Coordinate {
    Coordinate::from_degrees_unchecked(lon, lat)
}

fn two_hole_course() -> Course {
    Course::from_json_str(
        r#"{
            "name": "Testplatz",
            "holes": [
                { "number": 1, "par": 5,
                  "tee": { "longitude": 0.0, "latitude": 0.0 },
                  "pin": { "longitude": 0.0, "latitude": 0.01 } },
                { "number": 2, "par": 3,
                  "tee": { "longitude": 0.0, "latitude": 0.02 },
                  "pin": { "longitude": 0.001, "latitude": 0.0215 },
                  "suggested_target": { "longitude": 0.0005, "latitude": 0.021 } }
            ]
        }"#,
    )
    .expect("Testkurs sollte parsen")
}

fn loaded(course: Course) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CourseLoaded {
                course: Arc::new(course),
            },
        )
        .expect("CourseLoaded sollte durchlaufen");
    (controller, state)
}

fn scene(state: &AppState) -> &HoleScene {
    state.scene.as_ref().expect("Szene sollte verfügbar sein")
}

/// Linien, Labels und Ziel stammen aus demselben Stand.
fn assert_scene_consistent(state: &AppState) {
    let scene = scene(state);
    assert_eq!(scene.near.end, scene.aim_target);
    assert_eq!(scene.far.origin, scene.aim_target);
    assert_eq!(scene.far.end, scene.pin);
    assert_eq!(Some(scene.aim_target), state.hole.aim_target);
    assert_eq!(scene.near_label.text, format!("{} yds", scene.near.distance_yards));
    assert_eq!(scene.far_label.text, format!("{} yds", scene.far.distance_yards));
    assert_eq!(
        scene.near.distance_yards,
        distance_yards(scene.near.origin, scene.near.end)
    );
}

#[test]
fn test_default_target_splits_hole_evenly() {
    let (_controller, state) = loaded(two_hole_course());
    let scene = scene(&state);

    assert_eq!(scene.hole_number, 1);
    assert_eq!(scene.mode, TargetMode::Pin);
    assert_relative_eq!(scene.aim_target.latitude(), 0.005, epsilon = 1e-12);
    // 0.005° Breite ≈ 556 m ≈ 608 yds
    assert_relative_eq!(scene.near.distance_meters, 556.0, epsilon = 1.0);
    assert_relative_eq!(scene.far.distance_meters, 556.0, epsilon = 1.0);
    assert!((i64::from(scene.near.distance_yards) - 608).abs() <= 2);
    assert!((i64::from(scene.far.distance_yards) - 608).abs() <= 2);
    assert_eq!(scene.near.origin, scene.tee);
    assert_scene_consistent(&state);
}

#[test]
fn test_drag_target_onto_pin() {
    let (mut controller, mut state) = loaded(two_hole_course());
    let pin = scene(&state).pin;
    let full_length = scene(&state).hole_length_yards();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragStarted {
                position: c(0.0, 0.005),
            },
        )
        .expect("Drag-Start");
    assert!(scene(&state).dragging);

    for lat in [0.006, 0.008, 0.0095] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::AimTargetDragged {
                    position: c(0.0, lat),
                },
            )
            .expect("Drag");
        assert_scene_consistent(&state);
    }

    controller
        .handle_intent(&mut state, AppIntent::AimTargetDragged { position: pin })
        .expect("Drag");
    controller
        .handle_intent(&mut state, AppIntent::AimTargetDragEnded)
        .expect("Drag-Ende");

    let scene = scene(&state);
    assert!(!scene.dragging);
    assert_eq!(scene.far.distance_yards, 0);
    assert_eq!(scene.near.distance_yards, full_length);
    assert_scene_consistent(&state);
}

#[test]
fn test_every_drag_frame_rebuilds_scene_once() {
    let (mut controller, mut state) = loaded(two_hole_course());
    let before = state.scene_revision;

    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragStarted {
                position: c(0.0, 0.005),
            },
        )
        .expect("Drag-Start");
    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragged {
                position: c(0.0001, 0.006),
            },
        )
        .expect("Drag");

    assert_eq!(state.scene_revision, before + 2);
}

#[test]
fn test_gps_at_tee_measures_from_live_position() {
    let (mut controller, mut state) = loaded(two_hole_course());
    let far_before = scene(&state).far.clone();
    let tee = scene(&state).tee;

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(tee, 4.0),
            },
        )
        .expect("Fix");
    assert!(scene(&state).gps_toggle_enabled);
    assert_eq!(scene(&state).mode, TargetMode::Pin);

    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");

    let scene = scene(&state);
    assert_eq!(scene.mode, TargetMode::Gps);
    assert_eq!(scene.near.origin, tee);
    // Nahe Distanz: Live-Position (= Tee) → Ziel, ohne Versatz
    assert_eq!(
        scene.near.distance_meters,
        distance_meters(tee, scene.aim_target)
    );
    assert_ne!(scene.near.drawn_start, scene.near.origin);
    assert_eq!(scene.far, far_before);
    assert_scene_consistent(&state);
}

#[test]
fn test_gps_at_target_gives_zero_near_distance() {
    let (mut controller, mut state) = loaded(two_hole_course());
    let aim = scene(&state).aim_target;

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(aim, 3.0),
            },
        )
        .expect("Fix");
    controller
        .handle_intent(&mut state, AppIntent::PinMarkerTapped)
        .expect("Tap");

    let scene = scene(&state);
    assert_eq!(scene.mode, TargetMode::Gps);
    assert_eq!(scene.near.distance_yards, 0);
    // Kein Richtungsvektor → gezeichneter Start bleibt am Ursprung
    assert_eq!(scene.near.drawn_start, aim);
}

#[test]
fn test_gps_mode_locked_without_live_position() {
    let (mut controller, mut state) = loaded(two_hole_course());

    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");

    assert_eq!(scene(&state).mode, TargetMode::Pin);
    assert!(!scene(&state).gps_toggle_enabled);
    let notice = state.ui.notice.as_ref().expect("Hinweis erwartet");
    assert_eq!(notice.kind, NoticeKind::GpsModeLocked);
}

#[test]
fn test_toggle_back_to_pin() {
    let (mut controller, mut state) = loaded(two_hole_course());
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.001), 5.0),
            },
        )
        .expect("Fix");
    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");
    controller
        .handle_intent(&mut state, AppIntent::PinMarkerTapped)
        .expect("Tap");

    let scene = scene(&state);
    assert_eq!(scene.mode, TargetMode::Pin);
    assert_eq!(scene.near.origin, scene.tee);
}

#[test]
fn test_location_loss_falls_back_to_pin() {
    let (mut controller, mut state) = loaded(two_hole_course());
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.002), 5.0),
            },
        )
        .expect("Fix");
    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");
    assert_eq!(scene(&state).mode, TargetMode::Gps);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFailed {
                error: LocationError::Timeout,
            },
        )
        .expect("Fehler");

    let scene = scene(&state);
    assert_eq!(scene.mode, TargetMode::Pin);
    assert_eq!(scene.live_position, None);
    assert!(!scene.gps_toggle_enabled);
    assert_eq!(scene.near.origin, scene.tee);
    assert_eq!(
        state.location.status,
        LocationStatus::Unavailable(LocationError::Timeout)
    );
    assert_eq!(
        state.ui.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::LocationUnavailable)
    );
    assert_scene_consistent(&state);

    // Nächster Fix räumt den Hinweis weg, Modus bleibt PIN
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.002), 5.0),
            },
        )
        .expect("Fix");
    assert!(state.ui.notice.is_none());
    assert_eq!(state.hole.mode, TargetMode::Pin);
}

#[test]
fn test_dismissed_location_notice_stays_dismissed_on_repeated_failures() {
    let (mut controller, mut state) = loaded(two_hole_course());
    let fail = |controller: &mut AppController, state: &mut AppState, error: LocationError| {
        controller
            .handle_intent(state, AppIntent::LocationFailed { error })
            .expect("Fehler");
    };

    fail(&mut controller, &mut state, LocationError::Timeout);
    assert_eq!(
        state.ui.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::LocationUnavailable)
    );

    controller
        .handle_intent(&mut state, AppIntent::NoticeDismissed)
        .expect("Schließen");
    fail(&mut controller, &mut state, LocationError::Timeout);
    fail(&mut controller, &mut state, LocationError::NoSignal);

    assert!(state.ui.notice.is_none());
    assert_eq!(
        state.location.status,
        LocationStatus::Unavailable(LocationError::NoSignal)
    );

    // Nach einem Fix meldet der nächste Verlust wieder
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.002), 5.0),
            },
        )
        .expect("Fix");
    fail(&mut controller, &mut state, LocationError::Timeout);
    assert_eq!(
        state.ui.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::LocationUnavailable)
    );
}

#[test]
fn test_live_updates_move_near_segment_only() {
    let (mut controller, mut state) = loaded(two_hole_course());
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.001), 5.0),
            },
        )
        .expect("Fix");
    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");
    let first = scene(&state).clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.003), 5.0),
            },
        )
        .expect("Fix");

    let second = scene(&state);
    assert!(second.near.distance_meters < first.near.distance_meters);
    assert_eq!(second.far, first.far);
    assert_eq!(second.aim_target, first.aim_target);
    assert_scene_consistent(&state);
}

#[test]
fn test_missing_pin_renders_nothing() {
    let course = Course::from_json_str(
        r#"{ "name": "Lücke", "holes": [
            { "number": 4, "tee": { "longitude": 1.0, "latitude": 1.0 } }
        ] }"#,
    )
    .expect("Kurs sollte parsen");
    let (mut controller, mut state) = loaded(course);

    assert_eq!(state.scene, Err(RenderUnavailable::MissingPin { hole: 4 }));
    assert_eq!(state.hole.aim_target, None);

    // Drag ohne Ziel bleibt folgenlos
    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragStarted {
                position: c(1.0, 1.001),
            },
        )
        .expect("Drag-Start");
    assert_eq!(state.hole.aim_target, None);
    assert!(!state.hole.dragging);
}

#[test]
fn test_hole_change_resets_target_and_mode() {
    let (mut controller, mut state) = loaded(two_hole_course());
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationFixReceived {
                fix: LiveFix::new(c(0.0, 0.001), 5.0),
            },
        )
        .expect("Fix");
    controller
        .handle_intent(&mut state, AppIntent::GpsMarkerTapped)
        .expect("Tap");
    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragStarted {
                position: c(0.0, 0.005),
            },
        )
        .expect("Drag");
    controller
        .handle_intent(
            &mut state,
            AppIntent::AimTargetDragged {
                position: c(0.0002, 0.007),
            },
        )
        .expect("Drag");

    controller
        .handle_intent(&mut state, AppIntent::NextHoleRequested)
        .expect("Lochwechsel");

    let scene = scene(&state);
    assert_eq!(scene.hole_number, 2);
    assert_eq!(scene.par, Some(3));
    assert_eq!(scene.mode, TargetMode::Pin);
    assert!(!scene.dragging);
    // Gepflegter Zielvorschlag statt Mittelpunkt
    assert_eq!(scene.aim_target, c(0.0005, 0.021));
    // Live-Position bleibt über den Lochwechsel erhalten
    assert!(scene.gps_toggle_enabled);
    assert_scene_consistent(&state);

    // Am letzten Loch: kein Umlauf
    controller
        .handle_intent(&mut state, AppIntent::NextHoleRequested)
        .expect("Lochwechsel");
    assert_eq!(state.hole_index, 1);
}

#[test]
fn test_camera_aligns_hole_vertically() {
    let (_controller, state) = loaded(two_hole_course());
    let scene = scene(&state);
    let camera = &state.view.camera;

    let tee = camera.coordinate_to_screen(scene.tee, VIEWPORT);
    let pin = camera.coordinate_to_screen(scene.pin, VIEWPORT);
    assert_relative_eq!(tee.x, pin.x, epsilon = 1e-3);
    assert!(pin.y < tee.y);
    assert_relative_eq!(scene.hole_bearing_deg, 0.0, epsilon = 1e-9);
}
