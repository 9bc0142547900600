//! Per-client request-rate governor for the creation path.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{CounterStore, StoreError};

/// Length of a rate-limit window.
pub const RATE_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Outcome of a rate check, with the post-increment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { count: u64, limit: u64 },
    Denied { count: u64, limit: u64 },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed { .. })
    }

    /// Creation requests left in the current window.
    pub fn remaining(&self) -> u64 {
        match *self {
            RateDecision::Allowed { count, limit } | RateDecision::Denied { count, limit } => {
                limit.saturating_sub(count)
            }
        }
    }
}

/// Counts creation attempts per identity against a fixed ceiling.
///
/// Every call consumes a slot, including calls that end up denied. The window
/// starts with an identity's first request and the counter vanishes when it
/// ends (fixed-window approximation of a sliding window).
pub struct RateGovernor {
    store: Arc<dyn CounterStore>,
    limit: u64,
    window: Duration,
}

impl RateGovernor {
    /// Creates a governor allowing `limit` requests per [`RATE_WINDOW`].
    pub fn new(store: Arc<dyn CounterStore>, limit: u64) -> Self {
        Self::with_window(store, limit, RATE_WINDOW)
    }

    pub fn with_window(store: Arc<dyn CounterStore>, limit: u64, window: Duration) -> Self {
        Self {
            store,
            limit,
            window,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Records one creation attempt for `identity` and decides on it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the counter cannot be incremented. Callers
    /// must treat that as a refusal, never as permission.
    pub async fn allow(&self, identity: &str) -> Result<RateDecision, StoreError> {
        let count = self.store.increment(identity, self.window).await?;

        if count > self.limit {
            Ok(RateDecision::Denied {
                count,
                limit: self.limit,
            })
        } else {
            Ok(RateDecision::Allowed {
                count,
                limit: self.limit,
            })
        }
    }
}
