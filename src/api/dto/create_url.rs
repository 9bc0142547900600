//! DTO for the alias creation endpoint.

use serde::Deserialize;
use validator::Validate;

/// Longest destination accepted in a request body.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a single URL.
///
/// Only the shape is checked here; URL syntax is the validator's job.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: String,
}
