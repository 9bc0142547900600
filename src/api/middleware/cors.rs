//! Cross-origin policy for browser clients.

use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Creates the CORS layer for the configured origins.
///
/// # Policy
///
/// - **Origins**: exactly the given list; any other origin gets no CORS grant
///   and the browser blocks the response
/// - **Credentials**: allowed
/// - **Methods**: `GET`, `POST`, `OPTIONS`
/// - **Headers**: `Content-Type`
///
/// Origins that are not valid header values are skipped with a warning.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer(&config.allowed_origins()));
/// ```
pub fn layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(600))
}
