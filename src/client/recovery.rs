//! Backoff policy for rate-limited requests

use rand::Rng;
use std::time::Duration;

/// Retry policy for rate-limit handling
///
/// The delay ceiling for attempt `k` (0-indexed) grows as
/// `base_delay * 2^k`, capped at `max_delay`; the actual wait is drawn
/// uniformly from `[0, ceiling]` (full jitter), fresh for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts while the API keeps rate-limiting
    pub max_retries: u32,

    /// Initial delay ceiling
    pub base_delay: Duration,

    /// Cap on the delay ceiling
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Upper bound on the wait for a given attempt
    pub fn delay_ceiling(&self, attempt: u32) -> Duration {
        let multiplier = 2_u32.saturating_pow(attempt);
        self.base_delay
            .saturating_mul(multiplier)
            .min(self.max_delay)
    }

    /// Jittered wait for a given attempt, uniform in `[0, ceiling]`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let ceiling = self.delay_ceiling(attempt);
        ceiling.mul_f64(rand::rng().random_range(0.0..=1.0))
    }
}
