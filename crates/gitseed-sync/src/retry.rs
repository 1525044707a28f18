//! Transport-level retry for transient server errors.

use std::time::Duration;

/// Retries a request when the server answers with one of `retry_statuses`
/// or the connection fails outright. The application layer never retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_millis(500),
            retry_statuses: vec![500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// No retries at all.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Sleep before retry number `attempt` (0-based): `backoff * 2^attempt`.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << attempt.min(16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_delays() {
        let p = RetryPolicy::default();
        assert_eq!(p.delay(0), Duration::from_millis(500));
        assert_eq!(p.delay(1), Duration::from_secs(1));
        assert_eq!(p.delay(2), Duration::from_secs(2));
    }

    #[test]
    fn only_gateway_style_statuses_retry() {
        let p = RetryPolicy::default();
        for s in [500, 502, 503, 504] {
            assert!(p.should_retry_status(s));
        }
        for s in [201, 401, 404, 422, 501] {
            assert!(!p.should_retry_status(s));
        }
    }
}
