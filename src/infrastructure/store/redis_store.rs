//! Redis-backed store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, RedisResult, Script, aio::ConnectionManager};
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use super::{ALIAS_KEY_PREFIX, RATE_KEY_PREFIX};
use crate::config::mask_connection_string;
use crate::domain::repositories::{AliasStore, CounterStore, PutOutcome, StoreError};

/// Increments a counter and arms its expiry in one atomic step.
///
/// A counter found without an expiry (`PTTL == -1`) is re-armed as well.
const INCREMENT_SCRIPT: &str = r#"
local count = redis.call('INCR', KEYS[1])
if count == 1 or redis.call('PTTL', KEYS[1]) == -1 then
  redis.call('PEXPIRE', KEYS[1], ARGV[1])
end
return count
"#;

static INCREMENT: LazyLock<Script> = LazyLock::new(|| Script::new(INCREMENT_SCRIPT));

/// Attempts made to establish the initial connection.
const CONNECT_ATTEMPTS: usize = 5;

/// Redis store for alias mappings and rate counters.
///
/// Uses `ConnectionManager` for a shared, automatically reconnecting
/// multiplexed connection. Every round-trip is bounded by `op_timeout`;
/// an expired timeout is reported as [`StoreError::Timeout`].
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    op_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis, retrying with exponential backoff, and validates
    /// the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `op_timeout` - upper bound for every store round-trip
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established after all attempts, or PING fails.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> Result<Self, StoreError> {
        info!("Connecting to Redis at {}", mask_connection_string(redis_url));

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(CONNECT_ATTEMPTS - 1);

        let conn = Retry::spawn(strategy, || {
            let client = client.clone();
            async move {
                ConnectionManager::new(client).await.inspect_err(|e| {
                    warn!("Redis connection attempt failed: {}", e);
                })
            }
        })
        .await
        .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { conn, op_timeout };

        let mut conn = store.conn.clone();
        store
            .run(conn.ping::<()>())
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(store)
    }

    fn alias_key(alias: &str) -> String {
        format!("{}{}", ALIAS_KEY_PREFIX, alias)
    }

    fn rate_key(identity: &str) -> String {
        format!("{}{}", RATE_KEY_PREFIX, identity)
    }

    /// Awaits a Redis operation, bounded by the configured timeout.
    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        with_timeout(self.op_timeout, op).await
    }
}

/// Awaits `op` for at most `limit`; an elapsed bound is [`StoreError::Timeout`].
async fn with_timeout<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = RedisResult<T>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result.map_err(map_redis_error),
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}

fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}

fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl AliasStore for RedisStore {
    async fn put(&self, alias: &str, destination: &str, ttl: Duration) -> Result<(), StoreError> {
        let key = Self::alias_key(alias);
        let mut conn = self.conn.clone();

        let _: () = self
            .run(
                redis::cmd("SET")
                    .arg(&key)
                    .arg(destination)
                    .arg("PX")
                    .arg(ttl_millis(ttl))
                    .query_async(&mut conn),
            )
            .await?;

        debug!("SET {} -> {} (TTL: {:?})", key, destination, ttl);
        Ok(())
    }

    async fn put_if_absent(
        &self,
        alias: &str,
        destination: &str,
        ttl: Duration,
    ) -> Result<PutOutcome, StoreError> {
        let key = Self::alias_key(alias);
        let mut conn = self.conn.clone();

        let reply: Option<String> = self
            .run(
                redis::cmd("SET")
                    .arg(&key)
                    .arg(destination)
                    .arg("NX")
                    .arg("PX")
                    .arg(ttl_millis(ttl))
                    .query_async(&mut conn),
            )
            .await?;

        match reply {
            Some(_) => {
                debug!("SET NX {} -> {} (TTL: {:?})", key, destination, ttl);
                Ok(PutOutcome::Inserted)
            }
            None => {
                debug!("SET NX {} refused, key exists", key);
                Ok(PutOutcome::Exists)
            }
        }
    }

    async fn get(&self, alias: &str) -> Result<Option<String>, StoreError> {
        let key = Self::alias_key(alias);
        let mut conn = self.conn.clone();

        let destination = self.run(conn.get::<_, Option<String>>(&key)).await?;

        match &destination {
            Some(url) => debug!("HIT: {} -> {}", alias, url),
            None => debug!("MISS: {}", alias),
        }

        Ok(destination)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        self.run(conn.ping::<()>()).await.is_ok()
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn increment(&self, identity: &str, window: Duration) -> Result<u64, StoreError> {
        let key = Self::rate_key(identity);
        let mut conn = self.conn.clone();

        let count: u64 = self
            .run(
                INCREMENT
                    .key(&key)
                    .arg(ttl_millis(window))
                    .invoke_async(&mut conn),
            )
            .await?;

        Ok(count)
    }

    async fn current(&self, identity: &str) -> Result<Option<u64>, StoreError> {
        let key = Self::rate_key(identity);
        let mut conn = self.conn.clone();

        self.run(conn.get::<_, Option<u64>>(&key)).await
    }

    async fn reset(&self, identity: &str) -> Result<bool, StoreError> {
        let key = Self::rate_key(identity);
        let mut conn = self.conn.clone();

        let deleted = self.run(conn.del::<_, u64>(&key)).await?;
        Ok(deleted > 0)
    }
}
