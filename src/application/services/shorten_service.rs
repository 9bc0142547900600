//! Creation flow: quota check, validation, alias issuance.

use std::sync::Arc;
use tracing::warn;

use super::{AliasService, RateGovernor};
use crate::domain::entities::AliasRecord;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Orchestrates a creation request.
///
/// # Request Flow
///
/// 1. Consume a quota slot for the client identity
/// 2. Validate the submitted URL
/// 3. Issue an alias and store the mapping
///
/// The quota is charged before validation, so malformed submissions count
/// against the client too.
pub struct ShortenService {
    governor: Arc<RateGovernor>,
    aliases: Arc<AliasService>,
}

impl ShortenService {
    pub fn new(governor: Arc<RateGovernor>, aliases: Arc<AliasService>) -> Self {
        Self { governor, aliases }
    }

    /// Runs the creation flow for one request.
    ///
    /// `raw_url` is `None` when the request body carried no usable `url`
    /// field; that case is rejected as an invalid URL after the quota check.
    ///
    /// # Errors
    ///
    /// - [`AppError::RateLimited`] when the identity is over its ceiling
    /// - [`AppError::InvalidUrl`] when validation fails
    /// - [`AppError::StoreUnavailable`] / [`AppError::AliasSpaceExhausted`] from the store
    pub async fn shorten(
        &self,
        identity: &str,
        raw_url: Option<&str>,
    ) -> Result<AliasRecord, AppError> {
        let decision = self.governor.allow(identity).await?;
        if !decision.is_allowed() {
            metrics::counter!("rate_limited_total").increment(1);
            warn!(%identity, ?decision, "Rate limit exceeded");
            return Err(AppError::rate_limited(identity));
        }

        let destination = validate_url(raw_url.unwrap_or_default())?;

        self.aliases.create(destination).await
    }
}
