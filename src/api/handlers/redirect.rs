//! Handler for alias redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Any single path segment is treated as an alias lookup.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored destination.
///
/// # Errors
///
/// Returns `404 "Not found"` for unknown or expired aliases, including
/// segments that do not percent-decode to UTF-8.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
    alias: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let alias = match alias {
        Ok(Path(alias)) => alias,
        Err(rejection) => {
            debug!("Undecodable alias segment {}: {}", uri.path(), rejection);
            return Err(AppError::not_found(uri.path().trim_start_matches('/')));
        }
    };

    let destination = state.redirect_resolver.resolve(&alias).await?;

    let location = HeaderValue::try_from(destination.as_str()).map_err(|e| {
        AppError::internal(format!("Stored destination for {} is not a valid header: {}", alias, e))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
