//! Data Transfer Objects for API request/response serialization.

pub mod create_url;
pub mod health;

pub use create_url::CreateUrlRequest;
pub use health::{CheckStatus, HealthChecks, HealthResponse};
