use crate::core::{Coordinate, TargetMode};

/// Sitzungszustand des aktuell angezeigten Lochs.
///
/// Wird bei jedem Lochwechsel komplett zurückgesetzt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoleSessionState {
    /// Ziel-Marker (None, wenn Tee oder Pin fehlen)
    pub aim_target: Option<Coordinate>,
    /// Aktiver Ziel-Modus
    pub mode: TargetMode,
    /// Ob der Ziel-Marker gerade gezogen wird
    pub dragging: bool,
    /// Zielposition bei Drag-Start (für Log beim Loslassen)
    pub drag_start: Option<Coordinate>,
}

impl HoleSessionState {
    /// Erstellt den Startzustand (PIN-Modus, kein Ziel).
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Zustand für ein neues Loch zurück.
    pub fn reset(&mut self, aim_target: Option<Coordinate>) {
        *self = Self {
            aim_target,
            ..Self::default()
        };
    }
}
