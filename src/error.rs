//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a request can hit ends up as an [`AppError`]. The HTTP edge
//! turns it into a status code with a short plain-text body, which is what the
//! frontend renders verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StoreError;
use crate::utils::url_validator::UrlValidationError;

/// Errors surfaced by the creation and redirect paths.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted destination is not an acceptable URL.
    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    /// The client used up its creation quota for the current window.
    #[error("Rate limit exceeded for {identity}")]
    RateLimited { identity: String },

    /// The alias is unknown or has expired.
    #[error("Alias not found: {alias}")]
    NotFound { alias: String },

    /// The backing key-value store failed or timed out.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Every generated candidate collided with a live alias.
    #[error("No free alias after {attempts} attempts")]
    AliasSpaceExhausted { attempts: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    pub fn rate_limited(identity: impl Into<String>) -> Self {
        Self::RateLimited {
            identity: identity.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status code and client-facing message for this error.
    ///
    /// Infrastructure failures all share one generic message.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "Invalid url"),
            AppError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not found"),
            AppError::StoreUnavailable(_)
            | AppError::AliasSpaceExhausted { .. }
            | AppError::Internal(_) => (StatusCode::BAD_REQUEST, "Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::StoreUnavailable(_)
            | AppError::AliasSpaceExhausted { .. }
            | AppError::Internal(_) => tracing::error!(error = %self, "Request failed"),
            _ => tracing::debug!(error = %self, "Request rejected"),
        }

        (status, message).into_response()
    }
}
