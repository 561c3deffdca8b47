use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Minimum-interval rate limiter for third-party API calls.
///
/// Only the Jikan client is throttled; the first-party backend client
/// issues requests unthrottled.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    last_request: Arc<Mutex<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
            min_interval,
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        let now = Instant::now();
        let elapsed = now.duration_since(*last);

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn spaces_out_consecutive_calls() {
        let limiter = RateLimiter::new(10.0);
        let start = tokio::time::Instant::now();

        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;

        // Two enforced gaps of 100ms each.
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
