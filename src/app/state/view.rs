use crate::core::MapCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kamera über der Lochkarte
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Kamera soll auf das Loch ausgerichtet werden, sobald der Viewport bekannt ist
    pub fit_pending: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: MapCamera::default(),
            viewport_size: [0.0, 0.0],
            fit_pending: false,
        }
    }

    /// Gibt `true` zurück, wenn der Viewport eine nutzbare Größe hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size[0] > 0.0 && self.viewport_size[1] > 0.0
    }
}
