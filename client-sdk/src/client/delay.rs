use std::time::Duration;

use async_trait::async_trait;

pub const DEFAULT_TRANSFER_DELAY: Duration = Duration::from_secs(1);

/// Pause applied after each processed filter to stay under the platform's
/// rate limit.
#[async_trait]
pub trait DelayPolicy: Sync + Send {
    async fn wait(&self);
}

/// Waits the same interval after every item, whatever the remote answered.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        FixedInterval { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSFER_DELAY)
    }
}

#[async_trait]
impl DelayPolicy for FixedInterval {
    async fn wait(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}
