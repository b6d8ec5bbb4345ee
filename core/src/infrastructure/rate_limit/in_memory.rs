use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::domain::rate_limit::{entities::WindowCounter, ports::RateLimitStore};

/// Per-process counter store. Entries for expired windows are
/// overwritten in place on the next hit, so the map stays bounded by
/// the number of distinct callers.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    counters: DashMap<String, WindowCounter>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn hit(&self, key: &str, now: DateTime<Utc>, window: Duration) -> WindowCounter {
        let mut entry = self
            .counters
            .entry(key.to_string())
            .or_insert(WindowCounter {
                count: 0,
                window_start: now,
            });

        if now >= entry.window_start + window {
            entry.count = 1;
            entry.window_start = now;
        } else {
            entry.count += 1;
        }

        *entry
    }
}
