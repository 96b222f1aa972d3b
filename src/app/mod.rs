//! Application-Layer: Controller, State, Events und Session.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod location_poller;
pub mod render_scene;
pub mod session;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Session (Kurs, Loch, Standort, View).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use location_poller::{LocationPoller, LocationUpdate, PollerConfig};
pub use render_scene::build as build_hole_scene;
pub use session::RenderSession;
pub use state::{
    AppState, HoleSessionState, LocationState, LocationStatus, Notice, NoticeKind, UiState,
    ViewState,
};
