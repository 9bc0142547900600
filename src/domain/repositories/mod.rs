//! Store trait definitions for the domain layer.
//!
//! Both alias mappings and rate counters live in one shared key-value store
//! with native per-key expiry. These traits describe the operations the
//! service needs from it; implementations live in
//! `crate::infrastructure::store`.
//!
//! # Available Traits
//!
//! - [`AliasStore`] - Alias to destination mapping with TTL
//! - [`CounterStore`] - Atomic per-identity counters with expiry
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod alias_store;
pub mod counter_store;
pub mod store_error;

pub use alias_store::{AliasStore, PutOutcome};
pub use counter_store::CounterStore;
pub use store_error::StoreError;

#[cfg(test)]
pub use alias_store::MockAliasStore;
#[cfg(test)]
pub use counter_store::MockCounterStore;
