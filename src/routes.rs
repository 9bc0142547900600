//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Liveness text
//! - `GET  /health`          - Store health check
//! - `POST /api/create_url`  - Alias creation (rate limited per client)
//! - `GET  /{alias}`         - Alias redirect
//!
//! # Middleware
//!
//! - **CORS** - Credentialed requests only from the configured origins
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins granted credentialed cross-origin access
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}
