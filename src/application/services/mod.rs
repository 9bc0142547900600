//! Business logic services for the application layer.

pub mod alias_service;
pub mod rate_governor;
pub mod redirect_resolver;
pub mod shorten_service;

pub use alias_service::AliasService;
pub use rate_governor::{RateDecision, RateGovernor};
pub use redirect_resolver::RedirectResolver;
pub use shorten_service::ShortenService;
