use std::num::NonZeroU32;
use std::sync::Arc;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Jitter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use crate::config::constants::{sleep_duration_millis, RATE_LIMIT_JITTER_MS};

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<DirectLimiter>,
    burst_limiter: Arc<DirectLimiter>,
}

impl ApiRateLimiter {
    /// Zero quotas are clamped to one.
    pub fn new(per_minute: u32, burst_per_second: u32) -> Self {
        let per_minute = NonZeroU32::new(per_minute).unwrap_or(nonzero!(1u32));
        let burst = NonZeroU32::new(burst_per_second).unwrap_or(nonzero!(1u32));

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
            burst_limiter: Arc::new(RateLimiter::direct(Quota::per_second(burst))),
        }
    }

    /// Waits until both the burst and the per-minute quota allow a request.
    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter
            .until_ready_with_jitter(Jitter::up_to(sleep_duration_millis(RATE_LIMIT_JITTER_MS)))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_requests_pass_without_waiting() {
        let limiter = ApiRateLimiter::new(60, 5);
        let started = std::time::Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[tokio::test]
    async fn zero_quota_is_clamped_to_one() {
        let limiter = ApiRateLimiter::new(0, 0);
        let wait = std::time::Duration::from_millis(300);

        assert!(tokio::time::timeout(wait, limiter.acquire()).await.is_ok());
        assert!(tokio::time::timeout(wait, limiter.acquire()).await.is_err());
    }
}
