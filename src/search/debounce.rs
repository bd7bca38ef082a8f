//! Single-Slot-Debounce für die Sucheingabe.

use std::time::{Duration, Instant};

/// Hält höchstens einen geplanten Aufruf; jede neue Planung ersetzt den alten.
/// Wird einmal pro Frame mit der aktuellen Zeit gepollt.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    armed: Option<(Instant, String)>,
}

impl Debounce {
    /// Erstellt eine Debounce mit der gegebenen Ruhezeit.
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    /// Plant eine Query; ein bereits wartender Slot wird verworfen.
    pub fn schedule(&mut self, now: Instant, query: String) {
        self.armed = Some((now, query));
    }

    /// Verwirft den wartenden Slot.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Gibt die Query zurück, sobald die Ruhezeit abgelaufen ist.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.armed {
            Some((armed_at, _)) if now.duration_since(*armed_at) >= self.delay => {
                self.armed.take().map(|(_, query)| query)
            }
            _ => None,
        }
    }

    /// Gibt `true` zurück, solange ein Aufruf wartet.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
