//! Handler für Hinweise, Optionen und Anwendungssteuerung.

use std::path::Path;

use crate::app::state::{Notice, NoticeKind};
use crate::app::AppState;

/// Schreibt die aktuellen Optionen als TOML nach `path`.
///
/// Bei Fehler wird ein Hinweis gesetzt und der Fehler propagiert.
pub fn save_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    if let Err(e) = state.options.save_to_file(path) {
        state.ui.notice = Some(Notice::new(
            NoticeKind::OptionsSaveFailed,
            format!("Optionen konnten nicht gespeichert werden: {}", path.display()),
        ));
        return Err(e);
    }
    state.ui.clear_notice_of(NoticeKind::OptionsSaveFailed);
    Ok(())
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt den aktuellen Hinweis.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}
