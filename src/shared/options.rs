//! Zentrale Konfiguration für den Lochkarten-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    Coordinate, DisabledLocationProvider, FixedLocationProvider, LiveFix, LocationProvider,
    ReplayLocationProvider,
};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Web-Mercator-Zoom.
pub const CAMERA_ZOOM_MIN: f64 = 12.0;
/// Maximaler Web-Mercator-Zoom.
pub const CAMERA_ZOOM_MAX: f64 = 21.0;
/// Zoom-Schritt (Level) bei Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f64 = 0.5;
/// Zoom-Level pro Scroll-Pixel.
pub const CAMERA_SCROLL_ZOOM_PER_PX: f64 = 0.005;

// ── Marker ──────────────────────────────────────────────────────────

/// Sichtbarer Radius des GPS-Markers in Pixeln (Basis für den Linienversatz).
pub const GPS_MARKER_RADIUS_PX: f32 = 12.0;
/// Radius der punktförmigen Tee-/Pin-Marker in Pixeln.
pub const POINT_MARKER_RADIUS_PX: f32 = 6.0;
/// Radius des Ziel-Markers in Pixeln.
pub const AIM_MARKER_RADIUS_PX: f32 = 10.0;
/// Trefferradius für Tap und Drag-Start in Pixeln.
pub const TAP_RADIUS_PX: f32 = 20.0;

/// Farbe Tee-Marker (RGBA: Weiß).
pub const TEE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe Pin-Marker (RGBA: Rot).
pub const PIN_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe Ziel-Marker (RGBA: Gelb).
pub const AIM_COLOR: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
/// Farbe GPS-Marker (RGBA: Blau).
pub const GPS_COLOR: [f32; 4] = [0.2, 0.55, 1.0, 1.0];
/// Füllfarbe des Genauigkeitskreises (RGBA: transparentes Blau).
pub const ACCURACY_COLOR: [f32; 4] = [0.2, 0.55, 1.0, 0.2];

// ── Linien & Labels ─────────────────────────────────────────────────

/// Linienstärke in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.5;
/// Farbe des nahen Segments (Ursprung → Ziel).
pub const NEAR_LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
/// Farbe des fernen Segments (Ziel → Pin).
pub const FAR_LINE_COLOR: [f32; 4] = [1.0, 0.85, 0.1, 0.9];
/// Schriftgröße der Distanz-Labels.
pub const LABEL_FONT_SIZE: f32 = 16.0;

// ── Standort ────────────────────────────────────────────────────────

/// Intervall der periodischen Standortabfrage in Sekunden.
pub const LOCATION_REFRESH_INTERVAL_SECS: f64 = 10.0;
/// Zeitlimit einer periodischen Abfrage in Sekunden.
pub const LOCATION_REFRESH_TIMEOUT_SECS: f64 = 10.0;
/// Zeitlimit des initialen, hochgenauen Fix in Sekunden.
pub const LOCATION_INITIAL_TIMEOUT_SECS: f64 = 30.0;

/// Quelle der Live-Position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LocationSourceOptions {
    /// Kein Standortzugriff
    #[default]
    Disabled,
    /// Feste Position
    Fixed {
        longitude: f64,
        latitude: f64,
        #[serde(default = "default_fixed_accuracy_m")]
        accuracy_m: f64,
    },
    /// Aufgezeichnete Spur (JSON)
    Replay {
        path: PathBuf,
        #[serde(default)]
        step_delay_ms: u64,
    },
}

/// Serde-Default für die Genauigkeit fester Positionen.
fn default_fixed_accuracy_m() -> f64 {
    5.0
}

impl LocationSourceOptions {
    /// Baut den konfigurierten Provider.
    pub fn build_provider(&self) -> anyhow::Result<Arc<dyn LocationProvider>> {
        let provider: Arc<dyn LocationProvider> = match self {
            LocationSourceOptions::Disabled => Arc::new(DisabledLocationProvider),
            LocationSourceOptions::Fixed {
                longitude,
                latitude,
                accuracy_m,
            } => {
                let coordinate = Coordinate::new(*longitude, *latitude)?;
                Arc::new(FixedLocationProvider::new(LiveFix::new(
                    coordinate,
                    *accuracy_m,
                )))
            }
            LocationSourceOptions::Replay {
                path,
                step_delay_ms,
            } => Arc::new(ReplayLocationProvider::load_from_file(
                path,
                Duration::from_millis(*step_delay_ms),
            )?),
        };
        Ok(provider)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `golf_hole_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Level
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Level
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Level pro Scroll-Pixel
    pub camera_scroll_zoom_per_px: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Radius des GPS-Markers (Linien starten an seinem Rand)
    pub gps_marker_radius_px: f32,
    /// Radius von Tee- und Pin-Marker
    pub point_marker_radius_px: f32,
    /// Radius des Ziel-Markers
    pub aim_marker_radius_px: f32,
    /// Trefferradius für Tap und Drag-Start
    pub tap_radius_px: f32,
    /// Farbe Tee
    pub tee_color: [f32; 4],
    /// Farbe Pin
    pub pin_color: [f32; 4],
    /// Farbe Ziel
    pub aim_color: [f32; 4],
    /// Farbe GPS-Marker
    pub gps_color: [f32; 4],
    /// Füllfarbe Genauigkeitskreis
    pub accuracy_color: [f32; 4],

    // ── Linien & Labels ─────────────────────────────────────────
    /// Linienstärke
    pub line_width_px: f32,
    /// Farbe nahes Segment
    pub near_line_color: [f32; 4],
    /// Farbe fernes Segment
    pub far_line_color: [f32; 4],
    /// Schriftgröße Distanz-Labels
    pub label_font_size: f32,

    // ── Standort ────────────────────────────────────────────────
    /// Intervall periodischer Abfragen (Sekunden)
    pub location_refresh_interval_secs: f64,
    /// Zeitlimit periodischer Abfragen (Sekunden)
    pub location_refresh_timeout_secs: f64,
    /// Zeitlimit des initialen Fix (Sekunden)
    pub location_initial_timeout_secs: f64,
    /// Standortquelle
    #[serde(default)]
    pub location: LocationSourceOptions,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_per_px: CAMERA_SCROLL_ZOOM_PER_PX,

            gps_marker_radius_px: GPS_MARKER_RADIUS_PX,
            point_marker_radius_px: POINT_MARKER_RADIUS_PX,
            aim_marker_radius_px: AIM_MARKER_RADIUS_PX,
            tap_radius_px: TAP_RADIUS_PX,
            tee_color: TEE_COLOR,
            pin_color: PIN_COLOR,
            aim_color: AIM_COLOR,
            gps_color: GPS_COLOR,
            accuracy_color: ACCURACY_COLOR,

            line_width_px: LINE_WIDTH_PX,
            near_line_color: NEAR_LINE_COLOR,
            far_line_color: FAR_LINE_COLOR,
            label_font_size: LABEL_FONT_SIZE,

            location_refresh_interval_secs: LOCATION_REFRESH_INTERVAL_SECS,
            location_refresh_timeout_secs: LOCATION_REFRESH_TIMEOUT_SECS,
            location_initial_timeout_secs: LOCATION_INITIAL_TIMEOUT_SECS,
            location: LocationSourceOptions::default(),
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("golf_hole_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("golf_hole_map.toml")
    }

    /// Intervall periodischer Standortabfragen.
    pub fn location_refresh_interval(&self) -> Duration {
        secs_to_duration(self.location_refresh_interval_secs)
    }

    /// Zeitlimit periodischer Standortabfragen.
    pub fn location_refresh_timeout(&self) -> Duration {
        secs_to_duration(self.location_refresh_timeout_secs)
    }

    /// Zeitlimit des initialen Fix.
    pub fn location_initial_timeout(&self) -> Duration {
        secs_to_duration(self.location_initial_timeout_secs)
    }
}

/// Negative oder ungültige Werte aus der TOML-Datei werden zu 0.
fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}
