//! Render-Session: bündelt State, Controller und Standort-Poller.
//!
//! Der Host (eframe-App oder Test) ruft `dispatch` für UI-Intents und `tick`
//! einmal pro Frame. Standort-Ergebnisse laufen dabei als Intents durch
//! denselben Controller wie Benutzereingaben.

use std::sync::Arc;
use std::time::Instant;

use super::location_poller::{LocationPoller, LocationUpdate, PollerConfig};
use super::state::LocationStatus;
use super::{AppController, AppIntent, AppState, UiState};
use crate::core::LocationProvider;
use crate::shared::{HoleScene, RenderUnavailable, ViewerOptions};

/// Eine geöffnete Lochkarte mit optionaler Live-Position.
pub struct RenderSession {
    state: AppState,
    controller: AppController,
    poller: Option<LocationPoller>,
}

impl RenderSession {
    /// Öffnet eine Session. Ohne Provider bleibt der GPS-Modus gesperrt.
    pub fn open(options: ViewerOptions, provider: Option<Arc<dyn LocationProvider>>) -> Self {
        let config = PollerConfig::from_options(&options);
        let mut state = AppState::with_options(options);
        let poller = provider.map(|provider| {
            state.location.status = LocationStatus::Acquiring;
            LocationPoller::new(provider, config)
        });
        log::info!(
            "Session geöffnet (Standort-Provider: {})",
            if poller.is_some() { "aktiv" } else { "keiner" }
        );

        Self {
            state,
            controller: AppController::new(),
            poller,
        }
    }

    /// Read-only Zugriff auf den Zustand
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// UI-Zustand für Host-Dialoge, die ihre Anzeige-Flags selbst zurücksetzen.
    pub fn ui_state_mut(&mut self) -> &mut UiState {
        &mut self.state.ui
    }

    /// Zuletzt gebaute Szene
    pub fn scene(&self) -> Result<&HoleScene, &RenderUnavailable> {
        self.state.scene.as_ref()
    }

    /// Gibt `true` zurück, solange ein Standort-Poller läuft.
    pub fn has_location_source(&self) -> bool {
        self.poller.as_ref().is_some_and(|poller| !poller.is_closed())
    }

    /// Verarbeitet einen UI-Intent.
    pub fn dispatch(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Ein Frame des Event-Loops: Standort-Ergebnisse einspielen.
    ///
    /// Gibt die Anzahl verarbeiteter Standort-Updates zurück.
    pub fn tick(&mut self, now: Instant) -> usize {
        // Flag wird auch ohne Poller verbraucht
        let refresh_requested = std::mem::take(&mut self.state.location.refresh_requested);
        let Some(poller) = self.poller.as_mut() else {
            if refresh_requested {
                log::debug!("Standortabfrage ohne Standort-Provider ignoriert");
            }
            return 0;
        };

        if refresh_requested {
            poller.request_now();
        }

        let updates = poller.poll(now);
        let count = updates.len();
        for update in updates {
            let intent = match update {
                LocationUpdate::Fix(fix) => AppIntent::LocationFixReceived { fix },
                LocationUpdate::Failed(error) => AppIntent::LocationFailed { error },
            };
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Standort-Update nicht verarbeitet: {:#}", e);
            }
        }
        count
    }

    /// Beendet das Standort-Polling. Weitere Ergebnisse werden verworfen.
    pub fn close(&mut self) {
        if let Some(poller) = self.poller.as_mut() {
            poller.shutdown();
        }
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        self.close();
    }
}
