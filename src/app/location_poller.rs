//! Periodische Standortabfrage abseits des UI-Threads.
//!
//! Jede Anfrage läuft auf einem kurzlebigen Worker-Thread und meldet ihr
//! Ergebnis über einen Channel. `poll` wird vom Event-Loop pro Tick
//! aufgerufen, startet fällige Anfragen und liefert eingetroffene Ergebnisse.
//!
//! Invarianten:
//! - höchstens eine Anfrage gleichzeitig in Arbeit, auch nach einem Timeout:
//!   solange der abgebrochene Worker noch läuft, startet keine neue Anfrage
//! - Ergebnisse werden nur angenommen, wenn ihre Anfrage-ID noch aktuell ist
//! - nach `shutdown` (auch per `Drop`) werden keine Anfragen mehr gestartet
//!   und spät eintreffende Ergebnisse verworfen

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::{FixRequest, LiveFix, LocationError, LocationProvider};
use crate::shared::ViewerOptions;

/// Toleranz über dem Zeitlimit, bevor der Poller selbst abbricht.
const TIMEOUT_GRACE: Duration = Duration::from_millis(500);

/// Zeitplan der Abfragen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Abstand zwischen zwei Abfragen (ab Eintreffen des letzten Ergebnisses)
    pub refresh_interval: Duration,
    /// Zeitlimit periodischer Abfragen
    pub refresh_timeout: Duration,
    /// Zeitlimit der ersten, hochgenauen Abfrage
    pub initial_timeout: Duration,
}

impl PollerConfig {
    /// Übernimmt die Werte aus den Viewer-Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            refresh_interval: options.location_refresh_interval(),
            refresh_timeout: options.location_refresh_timeout(),
            initial_timeout: options.location_initial_timeout(),
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::from_options(&ViewerOptions::default())
    }
}

/// Ergebnis einer Abfrage für den Event-Loop
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    /// Neuer Fix
    Fix(LiveFix),
    /// Abfrage fehlgeschlagen
    Failed(LocationError),
}

/// Laufende Anfrage
#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: u64,
    started: Instant,
    timeout: Duration,
}

type WorkerResult = (u64, Result<LiveFix, LocationError>);

/// Plant Standortabfragen und sammelt deren Ergebnisse ein.
pub struct LocationPoller {
    provider: Arc<dyn LocationProvider>,
    config: PollerConfig,
    tx: Sender<WorkerResult>,
    rx: Receiver<WorkerResult>,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    /// ID einer per Timeout abgebrochenen Anfrage, deren Worker noch läuft
    abandoned: Option<u64>,
    /// Nächster Start; `None` = sofort
    next_due: Option<Instant>,
    initial_fix_done: bool,
    closed: bool,
}

impl LocationPoller {
    /// Erstellt einen Poller; die erste Anfrage startet beim ersten `poll`.
    pub fn new(provider: Arc<dyn LocationProvider>, config: PollerConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            config,
            tx,
            rx,
            next_request_id: 0,
            in_flight: None,
            abandoned: None,
            next_due: None,
            initial_fix_done: false,
            closed: false,
        }
    }

    /// Gibt `true` zurück, solange eine Anfrage läuft.
    pub fn is_request_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Gibt `true` zurück, nachdem `shutdown` aufgerufen wurde.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Gibt `true` zurück, solange ein Worker-Thread beim Provider wartet,
    /// auch wenn seine Anfrage bereits abgebrochen wurde.
    pub fn is_worker_busy(&self) -> bool {
        self.in_flight.is_some() || self.abandoned.is_some()
    }

    /// Fordert eine sofortige Abfrage an.
    ///
    /// Läuft bereits eine Anfrage, wird nichts Neues gestartet.
    pub fn request_now(&mut self) {
        if self.closed {
            return;
        }
        if self.is_worker_busy() {
            log::debug!("Standortabfrage läuft bereits, Sofort-Anfrage ignoriert");
            return;
        }
        self.next_due = None;
    }

    /// Ein Tick des Event-Loops: Ergebnisse einsammeln, Timeouts prüfen,
    /// fällige Anfrage starten.
    pub fn poll(&mut self, now: Instant) -> Vec<LocationUpdate> {
        let mut updates = Vec::new();
        if self.closed {
            return updates;
        }

        self.collect_results(now, &mut updates);
        self.expire_in_flight(now, &mut updates);

        let due = self.next_due.is_none_or(|due| now >= due);
        if !self.is_worker_busy() && due {
            if let Some(update) = self.start_request(now) {
                updates.push(update);
            }
        }

        updates
    }

    /// Beendet das Polling; spätere Ergebnisse laufender Anfragen werden verworfen.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Standortabfrage {} bei Teardown verworfen", in_flight.id);
        }
        log::info!("Standort-Polling beendet");
    }

    fn collect_results(&mut self, now: Instant, updates: &mut Vec<LocationUpdate>) {
        loop {
            match self.rx.try_recv() {
                Ok((id, result)) => {
                    if self.abandoned == Some(id) {
                        log::debug!("Abgebrochener Worker {} beendet, Ergebnis verworfen", id);
                        self.abandoned = None;
                        continue;
                    }
                    let current = self.in_flight.is_some_and(|f| f.id == id);
                    if !current {
                        log::debug!("Veraltetes Standort-Ergebnis {} verworfen", id);
                        continue;
                    }
                    self.in_flight = None;
                    self.next_due = Some(now + self.config.refresh_interval);
                    match result {
                        Ok(fix) => {
                            self.initial_fix_done = true;
                            updates.push(LocationUpdate::Fix(fix));
                        }
                        Err(error) => updates.push(LocationUpdate::Failed(error)),
                    }
                }
                Err(TryRecvError::Empty) => break,
                // Sender lebt in `self`, kann also nicht getrennt sein
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn expire_in_flight(&mut self, now: Instant, updates: &mut Vec<LocationUpdate>) {
        let Some(in_flight) = self.in_flight else {
            return;
        };
        if now.duration_since(in_flight.started) <= in_flight.timeout + TIMEOUT_GRACE {
            return;
        }
        log::warn!(
            "Standortabfrage {} nach {:?} ohne Antwort abgebrochen",
            in_flight.id,
            in_flight.timeout
        );
        self.in_flight = None;
        self.abandoned = Some(in_flight.id);
        self.next_due = Some(now + self.config.refresh_interval);
        updates.push(LocationUpdate::Failed(LocationError::Timeout));
    }

    fn start_request(&mut self, now: Instant) -> Option<LocationUpdate> {
        self.next_request_id += 1;
        let id = self.next_request_id;
        let request = if self.initial_fix_done {
            FixRequest {
                timeout: self.config.refresh_timeout,
                high_accuracy: false,
            }
        } else {
            FixRequest {
                timeout: self.config.initial_timeout,
                high_accuracy: true,
            }
        };

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("location-request-{id}"))
            .spawn(move || {
                let result = provider.request_fix(request);
                // Empfänger kann nach Teardown weg sein; dann ist das Ergebnis egal
                let _ = tx.send((id, result));
            });

        match spawned {
            Ok(_) => {
                log::debug!(
                    "Standortabfrage {} gestartet (Timeout {:?}, hochgenau: {})",
                    id,
                    request.timeout,
                    request.high_accuracy
                );
                self.in_flight = Some(InFlight {
                    id,
                    started: now,
                    timeout: request.timeout,
                });
                None
            }
            Err(e) => {
                log::error!("Worker-Thread für Standortabfrage nicht startbar: {}", e);
                self.next_due = Some(now + self.config.refresh_interval);
                Some(LocationUpdate::Failed(LocationError::Provider(e.to_string())))
            }
        }
    }
}

impl Drop for LocationPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Zählt Anfragen und blockiert, bis der Test sie freigibt.
    struct GatedProvider {
        calls: AtomicUsize,
        active: AtomicUsize,
        max_active: AtomicUsize,
        gate: Mutex<Receiver<Result<LiveFix, LocationError>>>,
        requests: Mutex<Vec<FixRequest>>,
    }

    impl LocationProvider for GatedProvider {
        fn request_fix(&self, request: FixRequest) -> Result<LiveFix, LocationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(active, Ordering::SeqCst);
            self.requests.lock().expect("Lock").push(request);
            let result = {
                let gate = self.gate.lock().expect("Lock");
                gate.recv_timeout(Duration::from_secs(5))
                    .unwrap_or(Err(LocationError::Timeout))
            };
            self.active.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }

    fn gated() -> (Arc<GatedProvider>, Sender<Result<LiveFix, LocationError>>) {
        let (tx, rx) = mpsc::channel();
        let provider = Arc::new(GatedProvider {
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
            gate: Mutex::new(rx),
            requests: Mutex::new(Vec::new()),
        });
        (provider, tx)
    }

    fn fix() -> LiveFix {
        LiveFix::new(Coordinate::from_degrees_unchecked(8.5, 47.3), 5.0)
    }

    fn config() -> PollerConfig {
        PollerConfig {
            refresh_interval: Duration::from_secs(10),
            refresh_timeout: Duration::from_secs(10),
            initial_timeout: Duration::from_secs(30),
        }
    }

    /// Pollt, bis ein Update eintrifft oder die Wartezeit abläuft.
    fn poll_until_update(poller: &mut LocationPoller, now: Instant) -> Vec<LocationUpdate> {
        for _ in 0..500 {
            let updates = poller.poll(now);
            if !updates.is_empty() {
                return updates;
            }
            thread::sleep(Duration::from_millis(5));
        }
        Vec::new()
    }

    #[test]
    fn first_request_is_high_accuracy_with_initial_timeout() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider.clone(), config());
        let start = Instant::now();

        assert!(poller.poll(start).is_empty());
        assert!(poller.is_request_in_flight());

        gate.send(Ok(fix())).expect("Gate offen");
        let updates = poll_until_update(&mut poller, start);
        assert_eq!(updates, vec![LocationUpdate::Fix(fix())]);

        let requests = provider.requests.lock().expect("Lock");
        assert_eq!(requests[0].timeout, Duration::from_secs(30));
        assert!(requests[0].high_accuracy);
    }

    #[test]
    fn no_overlapping_requests() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider.clone(), config());
        let start = Instant::now();

        poller.poll(start);
        poller.request_now();
        // Intervall längst abgelaufen, aber erste Anfrage läuft noch
        poller.poll(start + Duration::from_secs(20));
        thread::sleep(Duration::from_millis(20));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        gate.send(Ok(fix())).expect("Gate offen");
        poll_until_update(&mut poller, start + Duration::from_secs(20));
        assert!(!poller.is_request_in_flight());
    }

    #[test]
    fn next_request_waits_for_interval() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider.clone(), config());
        let start = Instant::now();

        poller.poll(start);
        gate.send(Ok(fix())).expect("Gate offen");
        poll_until_update(&mut poller, start);

        poller.poll(start + Duration::from_secs(5));
        assert!(!poller.is_request_in_flight());

        poller.poll(start + Duration::from_secs(11));
        assert!(poller.is_request_in_flight());

        gate.send(Ok(fix())).expect("Gate offen");
        poll_until_update(&mut poller, start + Duration::from_secs(11));
        let requests = provider.requests.lock().expect("Lock");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].timeout, Duration::from_secs(10));
        assert!(!requests[1].high_accuracy);
    }

    #[test]
    fn overdue_request_times_out_and_late_result_is_ignored() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider, config());
        let start = Instant::now();

        poller.poll(start);
        let updates = poller.poll(start + Duration::from_secs(31));
        assert_eq!(updates, vec![LocationUpdate::Failed(LocationError::Timeout)]);
        assert!(!poller.is_request_in_flight());

        // Spätes Ergebnis der abgebrochenen Anfrage
        gate.send(Ok(fix())).expect("Gate offen");
        thread::sleep(Duration::from_millis(50));
        let updates = poller.poll(start + Duration::from_secs(32));
        assert!(updates.is_empty());
    }

    #[test]
    fn timed_out_worker_blocks_new_requests_until_it_returns() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider.clone(), config());
        let start = Instant::now();

        poller.poll(start);
        let updates = poller.poll(start + Duration::from_secs(31));
        assert_eq!(updates, vec![LocationUpdate::Failed(LocationError::Timeout)]);

        // Provider hängt weiter; Intervalle laufen ab, Sofort-Anfrage kommt dazu
        poller.request_now();
        for secs in [42, 55, 70, 95] {
            let updates = poller.poll(start + Duration::from_secs(secs));
            assert!(updates.is_empty(), "Timeout darf nur einmal gemeldet werden");
            assert!(!poller.is_request_in_flight());
            assert!(poller.is_worker_busy());
        }
        thread::sleep(Duration::from_millis(20));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        // Worker kehrt zurück; sein Ergebnis ist veraltet, gibt aber den Weg frei
        gate.send(Ok(fix())).expect("Gate offen");
        let later = start + Duration::from_secs(100);
        for _ in 0..500 {
            poller.poll(later);
            if poller.is_request_in_flight() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert!(poller.is_request_in_flight());

        gate.send(Ok(fix())).expect("Gate offen");
        let updates = poll_until_update(&mut poller, later);
        assert_eq!(updates, vec![LocationUpdate::Fix(fix())]);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(provider.max_active.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn shutdown_discards_in_flight_result() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider.clone(), config());
        let start = Instant::now();

        poller.poll(start);
        poller.shutdown();
        gate.send(Ok(fix())).expect("Gate offen");
        thread::sleep(Duration::from_millis(50));

        assert!(poller.poll(start + Duration::from_secs(60)).is_empty());
        assert!(poller.is_closed());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn provider_failure_is_reported() {
        let (provider, gate) = gated();
        let mut poller = LocationPoller::new(provider, config());
        let start = Instant::now();

        poller.poll(start);
        gate.send(Err(LocationError::NoSignal)).expect("Gate offen");
        let updates = poll_until_update(&mut poller, start);
        assert_eq!(updates, vec![LocationUpdate::Failed(LocationError::NoSignal)]);
    }
}
