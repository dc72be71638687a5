//! Trailing-edge debounce timer driven by caller-supplied instants.
//!
//! The timer never reads the clock itself, so hosts (and tests) decide what
//! "now" means. A burst of triggers only re-arms the deadline; the action
//! fires once, the first time [`Debouncer::poll`] observes the deadline after
//! the burst has gone quiet.

use web_time::{Duration, Instant};

/// Quiet period before a resize burst is re-measured (milliseconds).
pub const DEBOUNCE_RESIZE_MS: u64 = 300;

/// Trailing-edge debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_RESIZE_MS))
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a trigger at `now`, pushing the deadline out.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether a trigger is waiting for its quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Instant at which the pending trigger fires, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once per burst, when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
