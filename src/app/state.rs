//! Application State: zentrale Datenhaltung einer Lochkarten-Session.
//!
//! Alle veränderlichen Werte (Ziel-Marker, Modus, Live-Position, Kamera)
//! liegen hier und werden ausschließlich über den Controller mutiert.

mod app_state;
mod hole_session;
mod location;
mod ui;
mod view;

pub use app_state::AppState;
pub use hole_session::HoleSessionState;
pub use location::{LocationState, LocationStatus};
pub use ui::{Notice, NoticeKind, UiState};
pub use view::ViewState;
