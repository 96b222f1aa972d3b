//! Ziel-Modus: Ursprung der nahen Distanz (Tee oder Live-Position).

/// Welcher Punkt als Ursprung des nahen Segments dient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Nahes Segment startet am Tee
    #[default]
    Pin,
    /// Nahes Segment startet an der Live-Position
    Gps,
}

impl TargetMode {
    /// Umschalten per Tap auf Pin- oder GPS-Marker.
    ///
    /// PIN → GPS nur mit verfügbarer Live-Position, GPS → PIN immer.
    pub fn toggled(self, live_position_available: bool) -> Self {
        match self {
            TargetMode::Pin if live_position_available => TargetMode::Gps,
            TargetMode::Pin => TargetMode::Pin,
            TargetMode::Gps => TargetMode::Pin,
        }
    }

    /// Zustand nach Verlust der Live-Position: GPS fällt auf PIN zurück.
    pub fn on_location_lost(self) -> Self {
        TargetMode::Pin
    }

    /// Gibt `true` zurück, wenn die Live-Position Ursprung ist.
    pub fn is_gps(self) -> bool {
        matches!(self, TargetMode::Gps)
    }

    /// Kurzbezeichnung für Status-Anzeige und Logs.
    pub fn label(self) -> &'static str {
        match self {
            TargetMode::Pin => "PIN",
            TargetMode::Gps => "GPS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TargetMode;

    #[test]
    fn initial_mode_is_pin() {
        assert_eq!(TargetMode::default(), TargetMode::Pin);
    }

    #[test]
    fn pin_to_gps_requires_live_position() {
        assert_eq!(TargetMode::Pin.toggled(false), TargetMode::Pin);
        assert_eq!(TargetMode::Pin.toggled(true), TargetMode::Gps);
    }

    #[test]
    fn gps_to_pin_always_allowed() {
        assert_eq!(TargetMode::Gps.toggled(true), TargetMode::Pin);
        assert_eq!(TargetMode::Gps.toggled(false), TargetMode::Pin);
    }

    #[test]
    fn location_loss_forces_pin() {
        assert_eq!(TargetMode::Gps.on_location_lost(), TargetMode::Pin);
        assert_eq!(TargetMode::Pin.on_location_lost(), TargetMode::Pin);
    }
}
