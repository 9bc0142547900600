//! In-process store implementation for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::repositories::{AliasStore, CounterStore, PutOutcome, StoreError};

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// A store that keeps everything in local memory.
///
/// Expiry follows `tokio::time`, so tests can pause and advance the clock to
/// observe TTL behaviour. State is not shared between processes and is lost on
/// restart; never use it behind more than one instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    aliases: Mutex<HashMap<String, Entry<String>>>,
    counters: Mutex<HashMap<String, Entry<u64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (single-process, non-durable)");
        Self::default()
    }

    #[cfg(test)]
    fn stored_entries(&self) -> (usize, usize) {
        (
            self.aliases.lock().map(|m| m.len()).unwrap_or(0),
            self.counters.lock().map(|m| m.len()).unwrap_or(0),
        )
    }

    /// Number of live alias mappings.
    pub fn alias_count(&self) -> usize {
        let now = Instant::now();
        self.aliases
            .lock()
            .map(|map| map.values().filter(|e| e.is_live(now)).count())
            .unwrap_or(0)
    }
}

/// Drops every expired entry. Runs on each write so the maps stay bounded by
/// the live set.
fn prune<T>(map: &mut HashMap<String, Entry<T>>, now: Instant) {
    map.retain(|_, e| e.is_live(now));
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Operation("memory store lock poisoned".to_string()))
}

#[async_trait]
impl AliasStore for MemoryStore {
    async fn put(&self, alias: &str, destination: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut aliases = lock(&self.aliases)?;
        prune(&mut aliases, Instant::now());
        aliases.insert(alias.to_string(), Entry::new(destination.to_string(), ttl));
        Ok(())
    }

    async fn put_if_absent(
        &self,
        alias: &str,
        destination: &str,
        ttl: Duration,
    ) -> Result<PutOutcome, StoreError> {
        let now = Instant::now();
        let mut aliases = lock(&self.aliases)?;
        prune(&mut aliases, now);

        if aliases.contains_key(alias) {
            return Ok(PutOutcome::Exists);
        }

        aliases.insert(alias.to_string(), Entry::new(destination.to_string(), ttl));
        Ok(PutOutcome::Inserted)
    }

    async fn get(&self, alias: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let mut aliases = lock(&self.aliases)?;

        match aliases.get(alias) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                aliases.remove(alias);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> bool {
        !self.aliases.is_poisoned() && !self.counters.is_poisoned()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn increment(&self, identity: &str, window: Duration) -> Result<u64, StoreError> {
        let now = Instant::now();
        let mut counters = lock(&self.counters)?;
        prune(&mut counters, now);

        let entry = counters
            .entry(identity.to_string())
            .or_insert_with(|| Entry::new(0, window));

        entry.value += 1;
        Ok(entry.value)
    }

    async fn current(&self, identity: &str) -> Result<Option<u64>, StoreError> {
        let now = Instant::now();
        let counters = lock(&self.counters)?;

        Ok(counters
            .get(identity)
            .filter(|e| e.is_live(now))
            .map(|e| e.value))
    }

    async fn reset(&self, identity: &str) -> Result<bool, StoreError> {
        let now = Instant::now();
        let mut counters = lock(&self.counters)?;

        Ok(counters.remove(identity).is_some_and(|e| e.is_live(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(86_400);

    #[tokio::test(start_paused = true)]
    async fn test_get_returns_live_mapping() {
        let store = MemoryStore::new();
        store.put("ab12", "https://golang.org", DAY).await.unwrap();

        assert_eq!(
            store.get("ab12").await.unwrap().as_deref(),
            Some("https://golang.org")
        );
        assert_eq!(store.get("zzzz").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mapping_expires_after_ttl() {
        let store = MemoryStore::new();
        store.put("ab12", "https://golang.org", DAY).await.unwrap();

        tokio::time::advance(DAY - Duration::from_secs(1)).await;
        assert!(store.get("ab12").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(store.get("ab12").await.unwrap(), None);
        assert_eq!(store.alias_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_overwrites_existing_mapping() {
        let store = MemoryStore::new();
        store.put("ab12", "https://first.example.com", DAY).await.unwrap();
        store.put("ab12", "https://second.example.com", DAY).await.unwrap();

        assert_eq!(
            store.get("ab12").await.unwrap().as_deref(),
            Some("https://second.example.com")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_if_absent_refuses_live_alias() {
        let store = MemoryStore::new();

        let first = store
            .put_if_absent("ab12", "https://first.example.com", DAY)
            .await
            .unwrap();
        let second = store
            .put_if_absent("ab12", "https://second.example.com", DAY)
            .await
            .unwrap();

        assert_eq!(first, PutOutcome::Inserted);
        assert_eq!(second, PutOutcome::Exists);
        assert_eq!(
            store.get("ab12").await.unwrap().as_deref(),
            Some("https://first.example.com")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_if_absent_reuses_expired_alias() {
        let store = MemoryStore::new();
        store
            .put_if_absent("ab12", "https://first.example.com", DAY)
            .await
            .unwrap();

        tokio::time::advance(DAY).await;

        let outcome = store
            .put_if_absent("ab12", "https://second.example.com", DAY)
            .await
            .unwrap();
        assert_eq!(outcome, PutOutcome::Inserted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_increment_counts_within_window() {
        let store = MemoryStore::new();

        for expected in 1..=3 {
            assert_eq!(store.increment("10.0.0.1", DAY).await.unwrap(), expected);
        }
        assert_eq!(store.increment("10.0.0.2", DAY).await.unwrap(), 1);
        assert_eq!(store.current("10.0.0.1").await.unwrap(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_restarts_after_window() {
        let store = MemoryStore::new();
        store.increment("10.0.0.1", DAY).await.unwrap();
        store.increment("10.0.0.1", DAY).await.unwrap();

        tokio::time::advance(DAY).await;

        assert_eq!(store.current("10.0.0.1").await.unwrap(), None);
        assert_eq!(store.increment("10.0.0.1", DAY).await.unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_drops_counter() {
        let store = MemoryStore::new();
        store.increment("10.0.0.1", DAY).await.unwrap();

        assert!(store.reset("10.0.0.1").await.unwrap());
        assert!(!store.reset("10.0.0.1").await.unwrap());
        assert_eq!(store.current("10.0.0.1").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_writes_drop_expired_entries() {
        let store = MemoryStore::new();
        store.put("ab12", "https://golang.org", DAY).await.unwrap();
        store.increment("10.0.0.1", DAY).await.unwrap();

        tokio::time::advance(DAY).await;

        store
            .put_if_absent("cd34", "https://example.com", DAY)
            .await
            .unwrap();
        store.increment("10.0.0.2", DAY).await.unwrap();

        assert_eq!(store.stored_entries(), (1, 1));
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(MemoryStore::new().health_check().await);
    }
}
