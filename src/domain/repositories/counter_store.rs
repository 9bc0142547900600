//! Store trait for rate-limit counters.

use super::StoreError;
use async_trait::async_trait;
use std::time::Duration;

/// Atomic counters keyed by client identity.
///
/// The first increment of a key starts its window; the key disappears when
/// the window elapses and the next increment starts a fresh one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increments the counter for `identity` and returns the new value.
    ///
    /// Creating the key and arming its expiry happen in the same atomic step
    /// as the increment, so concurrent callers never undercount.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn increment(&self, identity: &str, window: Duration) -> Result<u64, StoreError>;

    /// Reads the current count for `identity` without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn current(&self, identity: &str) -> Result<Option<u64>, StoreError>;

    /// Drops the counter for `identity`. Returns `true` if one existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn reset(&self, identity: &str) -> Result<bool, StoreError>;
}
