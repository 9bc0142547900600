//! # linkdrop
//!
//! An ephemeral URL shortener built with Axum and Redis. A long URL is turned
//! into a 4-character alias that redirects to it for 24 hours.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Alias record entity and store traits
//! - **Application Layer** ([`application`]) - Rate governor, alias issuance, redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Request Flows
//!
//! ```text
//! POST /api/create_url  -> rate governor -> URL validator -> key generator -> alias store (SET NX)
//! GET  /{alias}         -> redirect resolver -> alias store (GET) -> 302
//! ```
//!
//! The service keeps no mutable state of its own: aliases and rate counters
//! live in the shared store, so any number of instances can run side by side.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export FRONTEND_URL="https://links.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AliasService, RateDecision, RateGovernor, RedirectResolver, ShortenService,
    };
    pub use crate::domain::entities::AliasRecord;
    pub use crate::domain::repositories::{AliasStore, CounterStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
