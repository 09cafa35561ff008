//! Playback/Record-Transport: Zustandsmaschine und Zeit-Abbildung.

use thiserror::Error;

/// Transport-Zustand. `Paused` ist der Startzustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Paused,
    Playing,
    Recording,
}

/// Ungültiger Zustandsübergang des Transports.
///
/// Signalisiert eine Desynchronisation zwischen UI und Transport und ist
/// damit ein fataler interner Logikfehler, kein behandelbarer Laufzeitfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Ungültiger Transport-Übergang: {event} im Zustand {from:?}")]
pub struct TransportError {
    /// Zustand, in dem das Event eintraf
    pub from: TransportState,
    /// Name des unzulässigen Events
    pub event: &'static str,
}

/// Ergebnis eines Motor-Ticks während des Playbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cursor wurde bewegt
    Moved,
    /// Position hat die Dauer überschritten, impliziter Stopp fällig
    DurationExceeded,
    /// Tick außerhalb von `Playing`, keine Wirkung
    Ignored,
}

/// Transport-Zustand des Editors: Cursor-Position, Dauer, Loop-Flag und
/// der Wanduhr-Anker zur Abbildung externer Zeitstempel auf Kurvenzeit.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    pub state: TransportState,
    /// Cursor in Kurvenzeit (Sekunden)
    pub position: f64,
    /// Dauer der geladenen Kurve
    pub duration: f64,
    /// Playback in Schleife
    pub looping: bool,
    /// Uhr-Anker: Backend-Startzeit plus einmaliger Intervall-Versatz
    pub start_time: f64,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paused -> Playing. Der Uhr-Anker kommt erst mit der Play-Antwort
    /// des Backends ([`Self::anchor`]).
    pub fn play(&mut self) -> Result<(), TransportError> {
        match self.state {
            TransportState::Paused => {
                self.state = TransportState::Playing;
                Ok(())
            }
            TransportState::Playing | TransportState::Recording => Err(TransportError {
                from: self.state,
                event: "play",
            }),
        }
    }

    /// Playing -> Paused.
    pub fn pause(&mut self) -> Result<(), TransportError> {
        match self.state {
            TransportState::Playing => {
                self.state = TransportState::Paused;
                Ok(())
            }
            TransportState::Paused | TransportState::Recording => Err(TransportError {
                from: self.state,
                event: "pause",
            }),
        }
    }

    /// Paused -> Recording.
    pub fn record(&mut self) -> Result<(), TransportError> {
        match self.state {
            TransportState::Paused => {
                self.state = TransportState::Recording;
                Ok(())
            }
            TransportState::Playing | TransportState::Recording => Err(TransportError {
                from: self.state,
                event: "record",
            }),
        }
    }

    /// Recording -> Paused.
    pub fn stop_recording(&mut self) -> Result<(), TransportError> {
        match self.state {
            TransportState::Recording => {
                self.state = TransportState::Paused;
                Ok(())
            }
            TransportState::Paused | TransportState::Playing => Err(TransportError {
                from: self.state,
                event: "stop_recording",
            }),
        }
    }

    /// Erzwungener Stopp aus jedem Zustand (Safety-Override).
    pub fn force_pause(&mut self) {
        self.state = TransportState::Paused;
    }

    /// Setzt den Uhr-Anker aus der Play-Antwort des Backends. Der
    /// Intervall-Versatz wird genau einmal hier angewendet.
    pub fn anchor(&mut self, backend_start_time: f64, interval: f64) {
        self.start_time = backend_start_time + interval;
    }

    /// Bildet einen externen monotonen Zeitstempel auf die Kurvenzeit ab.
    /// Einziger Schreiber von `position` während `Playing`. Bei gesetztem
    /// Loop-Flag wird modulo `duration` gewickelt, sonst signalisiert eine
    /// Überschreitung der Dauer den impliziten Stopp.
    pub fn move_cursor(&mut self, timestamp: f64) -> TickOutcome {
        match self.state {
            TransportState::Playing => {
                // Ticks vor dem Anker landen auf dem Kurvenanfang
                let elapsed = (timestamp - self.start_time).max(0.0);
                if self.looping && self.duration > 0.0 {
                    self.position = elapsed.rem_euclid(self.duration);
                    TickOutcome::Moved
                } else if elapsed > self.duration {
                    self.position = self.duration;
                    TickOutcome::DurationExceeded
                } else {
                    self.position = elapsed;
                    TickOutcome::Moved
                }
            }
            TransportState::Paused | TransportState::Recording => TickOutcome::Ignored,
        }
    }
}
