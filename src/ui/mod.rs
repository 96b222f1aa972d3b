//! UI-Komponenten: Toolbar, Status-Bar, Kartenansicht, Dialoge.

pub mod dialogs;
/// UI-Layer mit egui
///
/// Karten-Input und Zeichnen sind getrennt: `map_input` erzeugt nur Intents,
/// `map_painter` liest nur die fertige Szene.
pub mod map_input;
pub mod map_painter;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_file_dialogs, show_notice_banner};
pub use map_input::{hit_test, MapInputState, MarkerHit};
pub use map_painter::paint_hole_scene;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
