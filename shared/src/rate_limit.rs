use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);
pub const BASE_BACKOFF: Duration = Duration::from_secs(2);
pub const MAX_ATTEMPTS: u32 = 3;

pub const RATE_LIMIT_MARKERS: [&str; 3] = ["request limit exceeded", "rate limit", "too many requests"];
pub const RATE_LIMIT_ERROR: &str = "The game gateway is busy. Please try again in a moment.";

/// Spacing and retry rules for reads against the game gateway.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub min_request_interval: Duration,
    pub base_backoff: Duration,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            min_request_interval: MIN_REQUEST_INTERVAL,
            base_backoff: BASE_BACKOFF,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after failed attempt number `attempt` (0-based):
    /// 2s, 4s, 8s, ...
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_backoff
            .checked_mul(2u32.saturating_pow(attempt))
            .unwrap_or(Duration::MAX)
    }

    /// Only rate-limit failures are retried, and never on the last attempt.
    pub fn should_retry(&self, attempt: u32, error_message: &str) -> bool {
        attempt + 1 < self.max_attempts && is_rate_limit_error(error_message)
    }
}

pub fn is_rate_limit_error(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    RATE_LIMIT_MARKERS.iter().any(|marker| message.contains(marker))
}

/// Keeps consecutive requests at least `min_interval` apart. Times are
/// milliseconds from whatever clock the caller has (`Date.now()` in the
/// browser).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestThrottle {
    min_interval: Duration,
    last_request_ms: Option<u64>,
}

impl RequestThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request_ms: None,
        }
    }

    /// How long to wait before sending a request at `now_ms`. The request is
    /// recorded as sent at `now_ms` plus that wait.
    pub fn wait_before(&mut self, now_ms: u64) -> Duration {
        let min_interval_ms = self.min_interval.as_millis() as u64;
        let wait_ms = match self.last_request_ms {
            Some(last) => (last + min_interval_ms).saturating_sub(now_ms),
            None => 0,
        };
        self.last_request_ms = Some(now_ms + wait_ms);
        Duration::from_millis(wait_ms)
    }
}

impl Default for RequestThrottle {
    fn default() -> Self {
        Self::new(MIN_REQUEST_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(0), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(1), Duration::from_secs(4));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(8));
        assert!(policy.backoff_for(200) > policy.backoff_for(2));
    }

    #[test]
    fn test_only_rate_limits_are_retried() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(0, "HTTP 429: Too Many Requests"));
        assert!(policy.should_retry(1, "Request limit exceeded"));
        assert!(!policy.should_retry(2, "rate limit"));
        assert!(!policy.should_retry(0, "execution reverted"));
    }

    #[test]
    fn test_throttle_spaces_requests() {
        let mut throttle = RequestThrottle::default();
        assert_eq!(throttle.wait_before(10_000), Duration::ZERO);
        assert_eq!(throttle.wait_before(10_400), Duration::from_millis(600));
        // The previous request was booked at 11_000.
        assert_eq!(throttle.wait_before(11_500), Duration::from_millis(500));
        assert_eq!(throttle.wait_before(20_000), Duration::ZERO);
    }
}
