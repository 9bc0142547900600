//! Key-value stores backing alias mappings and rate counters.
//!
//! Provides two implementations of [`crate::domain::repositories::AliasStore`]
//! and [`crate::domain::repositories::CounterStore`]:
//! - [`RedisStore`] - Production store shared by every instance
//! - [`MemoryStore`] - Single-process map for tests and local development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

/// Key namespace for alias mappings.
pub const ALIAS_KEY_PREFIX: &str = "alias:";

/// Key namespace for rate counters.
pub const RATE_KEY_PREFIX: &str = "rate:";
