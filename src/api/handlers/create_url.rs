//! Handler for the alias creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::CreateUrlRequest;
use crate::api::extract::ClientIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Issues a short alias for a destination URL.
///
/// # Endpoint
///
/// `POST /api/create_url`
///
/// # Request Body
///
/// ```json
/// { "url": "golang.org" }
/// ```
///
/// # Response
///
/// `200 OK` with the 4-character alias as plain text, e.g. `ab12`.
///
/// # Errors
///
/// - `429 "Rate limit exceeded"` when the client is over its daily quota
/// - `400 "Invalid url"` for a malformed URL or an unusable body
/// - `400 "Internal server error"` when the store fails
///
/// The quota is charged before the body is inspected, so a broken body still
/// consumes a slot.
pub async fn create_url_handler(
    State(state): State<AppState>,
    ClientIdentity(identity): ClientIdentity,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let raw_url = match payload {
        Ok(Json(request)) => match request.validate() {
            Ok(()) => Some(request.url),
            Err(e) => {
                debug!("Rejected create_url body: {}", e);
                None
            }
        },
        Err(rejection) => {
            debug!("Unreadable create_url body: {}", rejection);
            None
        }
    };

    let record = state
        .shorten_service
        .shorten(&identity, raw_url.as_deref())
        .await?;

    Ok(record.alias)
}
