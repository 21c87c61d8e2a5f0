use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error};

/// A periodic callback tied to the lifetime of its owner
///
/// The first tick fires one period after spawning. Cancelling, or dropping
/// the ticker, stops the task; no tick runs after `cancel` returns.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                on_tick();
            }
        });

        debug!("Ticker started ({:?} period)", period);

        Self {
            handle: Some(handle),
        }
    }

    /// Stop the task and wait until it has fully ended
    pub async fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            if let Err(e) = handle.await {
                if e.is_panic() {
                    error!("Ticker task panicked: {}", e);
                }
            }
            debug!("Ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
