use chrono::{DateTime, Utc};

/// Counter state for one caller within the current fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounter {
    pub count: u32,
    pub window_start: DateTime<Utc>,
}

/// Outcome of an allowed rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}
