//! Application layer services implementing business logic.
//!
//! Services consume the store traits from [`crate::domain::repositories`] and
//! expose the operations the HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::rate_governor::RateGovernor`] - Per-identity creation quota
//! - [`services::alias_service::AliasService`] - Alias issuance with collision retry
//! - [`services::redirect_resolver::RedirectResolver`] - Alias lookup for redirects
//! - [`services::shorten_service::ShortenService`] - Creation flow tying the above together

pub mod services;
