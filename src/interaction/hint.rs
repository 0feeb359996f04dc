use serde::{Deserialize, Serialize};
use tracing::trace;

/// Instructional hint shown until the user interacted AND the timeout passed.
///
/// Either condition alone keeps the hint visible. The timeout is
/// fire-and-check: the host delivers a timer event and the hint records it
/// only when the deadline has actually been reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneShotHint {
    drawn_at: f64,
    timeout_seconds: f64,
    interacted: bool,
    timeout_elapsed: bool,
}

impl OneShotHint {
    #[must_use]
    pub fn new(drawn_at: f64, timeout_seconds: f64) -> Self {
        Self {
            drawn_at,
            timeout_seconds,
            interacted: false,
            timeout_elapsed: false,
        }
    }

    #[must_use]
    pub fn deadline(self) -> f64 {
        self.drawn_at + self.timeout_seconds
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        !(self.interacted && self.timeout_elapsed)
    }

    #[must_use]
    pub fn has_interacted(self) -> bool {
        self.interacted
    }

    #[must_use]
    pub fn timeout_elapsed(self) -> bool {
        self.timeout_elapsed
    }

    /// Records the chart's primary interaction. Returns `true` when the hint
    /// became hidden.
    pub fn on_primary_interaction(&mut self, now: f64) -> bool {
        let was_visible = self.is_visible();
        self.interacted = true;
        trace!(now, "hint interaction recorded");
        was_visible && !self.is_visible()
    }

    /// Handles a timer delivery. Early deliveries are ignored. Returns `true`
    /// when the hint became hidden.
    pub fn on_timer_fired(&mut self, now: f64) -> bool {
        if now < self.deadline() {
            trace!(now, deadline = self.deadline(), "hint timer fired early");
            return false;
        }
        let was_visible = self.is_visible();
        self.timeout_elapsed = true;
        was_visible && !self.is_visible()
    }
}
