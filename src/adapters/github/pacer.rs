//! Minimum spacing between outbound host requests.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Serializes callers so consecutive requests start at least
/// `min_interval` apart.
///
/// One pacer is owned by each host client; every fetch sharing that client
/// shares the clock. The lock is held across the sleep, so waiting callers
/// queue behind each other.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until a request may be sent, then records the send time.
    pub async fn wait(&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let delay = self.min_interval - elapsed;
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Pacing host request");
                sleep(delay).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn first_request_is_not_delayed() {
        let pacer = RequestPacer::new(Duration::from_secs(5));
        let started = Instant::now();
        pacer.wait().await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn consecutive_requests_are_spaced() {
        let pacer = RequestPacer::new(Duration::from_millis(40));
        let started = Instant::now();
        for _ in 0..3 {
            pacer.wait().await;
        }
        assert!(started.elapsed() >= Duration::from_millis(80));
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_clock() {
        let pacer = Arc::new(RequestPacer::new(Duration::from_millis(30)));
        let started = Instant::now();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pacer = pacer.clone();
                tokio::spawn(async move { pacer.wait().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(started.elapsed() >= Duration::from_millis(90));
    }

    #[tokio::test]
    async fn zero_interval_never_sleeps() {
        let pacer = RequestPacer::new(Duration::ZERO);
        let started = Instant::now();
        for _ in 0..10 {
            pacer.wait().await;
        }
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
