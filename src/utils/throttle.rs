use std::time::Duration;

use tokio::time::Instant;

/// Minimum spacing between consecutive delivery calls.
pub const DELIVERY_INTERVAL: Duration = Duration::from_millis(1500);

/// Gate that keeps outbound calls at least `min_interval` apart, measured
/// from the end of the previous call.
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Suspends until the next call is allowed. Returns immediately for the
    /// first call.
    pub async fn wait(&self) {
        if let Some(next_allowed) = self.next_allowed() {
            tokio::time::sleep_until(next_allowed).await;
        }
    }

    fn next_allowed(&self) -> Option<Instant> {
        let next = self.last_call? + self.min_interval;
        (next > Instant::now()).then_some(next)
    }

    /// Marks that a call has just finished, successfully or not.
    pub fn record(&mut self) {
        self.last_call = Some(Instant::now());
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DELIVERY_INTERVAL)
    }
}
