use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    common::{RateLimitConfig, entities::app_errors::CoreError},
    rate_limit::{entities::RateLimitDecision, ports::RateLimitStore},
};

/// Fixed-window rate limiter over an injected counter store.
pub struct FixedWindowLimiter<S: RateLimitStore> {
    store: S,
    max_requests: u32,
    window: Duration,
}

impl<S: RateLimitStore> FixedWindowLimiter<S> {
    pub fn new(store: S, config: &RateLimitConfig) -> Self {
        Self {
            store,
            max_requests: config.max_requests,
            window: Duration::seconds(config.window_secs as i64),
        }
    }

    pub fn check(&self, key: &str) -> Result<RateLimitDecision, CoreError> {
        self.check_at(key, Utc::now())
    }

    /// Explicit-clock variant, used directly by tests.
    pub fn check_at(&self, key: &str, now: DateTime<Utc>) -> Result<RateLimitDecision, CoreError> {
        let counter = self.store.hit(key, now, self.window);
        let reset_at = counter.window_start + self.window;

        if counter.count > self.max_requests {
            let retry_after_secs = (reset_at - now).num_seconds().max(0) as u64;
            tracing::warn!(key, "vision rate limit exceeded");
            return Err(CoreError::RateLimited { retry_after_secs });
        }

        Ok(RateLimitDecision {
            remaining: self.max_requests - counter.count,
            reset_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::rate_limit::InMemoryRateLimitStore;
    use chrono::TimeZone;

    fn limiter(max_requests: u32) -> FixedWindowLimiter<InMemoryRateLimitStore> {
        FixedWindowLimiter::new(
            InMemoryRateLimitStore::new(),
            &RateLimitConfig {
                max_requests,
                window_secs: 3600,
            },
        )
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn allows_up_to_the_window_budget() {
        let limiter = limiter(20);
        for i in 0..20 {
            let decision = limiter.check_at("1.2.3.4", at(i)).expect("within budget");
            assert_eq!(decision.remaining, 20 - (i as u32 + 1));
        }

        let err = limiter.check_at("1.2.3.4", at(30)).unwrap_err();
        assert!(matches!(err, CoreError::RateLimited { .. }));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = limiter(1);
        limiter.check_at("1.2.3.4", at(0)).expect("first caller");
        limiter.check_at("5.6.7.8", at(0)).expect("second caller");
        assert!(limiter.check_at("1.2.3.4", at(1)).is_err());
    }

    #[test]
    fn window_expiry_resets_the_budget() {
        let limiter = limiter(1);
        limiter.check_at("1.2.3.4", at(0)).expect("first");
        assert!(limiter.check_at("1.2.3.4", at(10)).is_err());

        let decision = limiter
            .check_at("1.2.3.4", at(3601))
            .expect("fresh window after expiry");
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn retry_after_counts_down_to_window_end() {
        let limiter = limiter(1);
        limiter.check_at("1.2.3.4", at(0)).expect("first");
        match limiter.check_at("1.2.3.4", at(600)).unwrap_err() {
            CoreError::RateLimited { retry_after_secs } => {
                assert_eq!(retry_after_secs, 3000);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
