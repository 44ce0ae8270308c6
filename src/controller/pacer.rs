use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

pub const DEFAULT_CALL_INTERVAL: Duration = Duration::from_millis(100);

/// Spaces out external calls so at most one starts per `interval`.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits for the next free slot, then claims it.
    pub async fn wait_turn(&self) {
        let mut next_slot = self.next_slot.lock().await;
        if let Some(at) = *next_slot
            && at > Instant::now()
        {
            sleep_until(at).await;
        }
        *next_slot = Some(Instant::now() + self.interval);
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_CALL_INTERVAL)
    }
}
