/// Art eines Hinweis-Banners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Standort nicht verfügbar (verschwindet beim nächsten Fix)
    LocationUnavailable,
    /// GPS-Modus ohne Standort angefordert
    GpsModeLocked,
    /// Kurs konnte nicht geladen werden
    CourseLoadFailed,
    /// Optionen konnten nicht gespeichert werden
    OptionsSaveFailed,
}

/// Ruhiger Inline-Hinweis; die Karte bleibt bedienbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Art des Hinweises
    pub kind: NoticeKind,
    /// Anzeigetext
    pub text: String,
}

impl Notice {
    /// Erstellt einen Hinweis.
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktueller Hinweis
    pub notice: Option<Notice>,
    /// Kurs-Öffnen-Dialog anzeigen
    pub show_open_course_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entfernt den Hinweis, falls er von der angegebenen Art ist.
    pub fn clear_notice_of(&mut self, kind: NoticeKind) {
        if self.notice.as_ref().is_some_and(|n| n.kind == kind) {
            self.notice = None;
        }
    }
}
