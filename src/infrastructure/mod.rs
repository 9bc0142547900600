//! Infrastructure layer for external integrations.
//!
//! Implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory key-value stores
//!
//! # Concurrency
//!
//! Atomicity of increments and conditional writes is delegated to the store
//! itself; the service never does read-then-write on shared keys.

pub mod store;
