use std::time::{Duration, Instant};

/// Repeating tick timer with explicit start/cancel.
///
/// Models the fixed-interval callback as a handle the game loop polls:
/// [`Ticker::poll`] reports at most one due tick and re-arms the interval
/// from the poll instant, mirroring a re-armed delayed callback rather than
/// a fixed-rate schedule that would burst to catch up.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a cancelled ticker with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arms the ticker; the first tick is due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Cancels the ticker; no ticks are due until the next start.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true while the ticker is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Reports whether a tick is due at `now`, consuming it and re-arming.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
