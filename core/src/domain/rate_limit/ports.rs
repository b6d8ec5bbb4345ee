use chrono::{DateTime, Duration, Utc};

use crate::domain::rate_limit::entities::WindowCounter;

/// Injected counter store mapping caller key to count/window-start.
///
/// Kept behind a trait (rather than a process-wide singleton) so the
/// in-memory store can be swapped for a distributed one under
/// horizontal scaling.
#[cfg_attr(test, mockall::automock)]
pub trait RateLimitStore: Send + Sync {
    /// Record one hit for `key` at `now`, opening a fresh window when
    /// the previous one (of length `window`) has elapsed. Returns the
    /// counter state after the hit.
    fn hit(&self, key: &str, now: DateTime<Utc>, window: Duration) -> WindowCounter;
}
