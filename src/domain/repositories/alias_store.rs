//! Store trait for alias mappings.

use super::StoreError;
use async_trait::async_trait;
use std::time::Duration;

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The alias was free and now maps to the destination.
    Inserted,
    /// A live mapping already holds the alias; nothing was written.
    Exists,
}

/// Durable alias to destination mapping with per-key expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Shared Redis instance
/// - [`crate::infrastructure::store::MemoryStore`] - Single-process map for tests and development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Writes the mapping unconditionally, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn put(&self, alias: &str, destination: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Writes the mapping only if no live mapping holds `alias`.
    ///
    /// The check and the write happen atomically inside the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn put_if_absent(
        &self,
        alias: &str,
        destination: &str,
        ttl: Duration,
    ) -> Result<PutOutcome, StoreError>;

    /// Looks up the destination for `alias`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(destination))` for a live mapping
    /// - `Ok(None)` if the alias was never issued or has expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreachable or times out.
    async fn get(&self, alias: &str) -> Result<Option<String>, StoreError>;

    /// Checks whether the store answers at all.
    ///
    /// Used by the health endpoint and the admin CLI.
    async fn health_check(&self) -> bool;
}
