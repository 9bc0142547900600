//! API route configuration.

use crate::api::handlers::create_url_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /create_url` - Issue an alias for a destination URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/create_url", post(create_url_handler))
}
