//! Golf-Lochkarte mit Live-Distanzen.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, RenderSession, UiState, ViewState};
pub use core::{
    bearing_degrees, distance_meters, distance_yards, midpoint, offset_origin, Coordinate, Course,
    Hole, LiveFix, LocationError, LocationProvider, MapCamera, TargetMode,
};
pub use shared::{HoleScene, RenderUnavailable, SegmentGeometry, ViewerOptions};
