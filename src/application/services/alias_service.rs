//! Alias issuance service.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{AliasStore, PutOutcome};
use crate::error::AppError;
use crate::utils::key_generator::generate_alias;
use crate::utils::url_validator::ValidatedUrl;

/// Retention window of an issued alias.
pub const ALIAS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Candidates tried before giving up on a free alias.
pub const MAX_ALIAS_ATTEMPTS: usize = 5;

/// Issues aliases for validated destinations.
///
/// Writes are conditional: an alias already held by a live mapping is never
/// overwritten; a fresh candidate is generated instead.
pub struct AliasService {
    store: Arc<dyn AliasStore>,
    ttl: Duration,
    max_attempts: usize,
}

impl AliasService {
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self {
            store,
            ttl: ALIAS_TTL,
            max_attempts: MAX_ALIAS_ATTEMPTS,
        }
    }

    /// Stores `destination` under a newly generated alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store fails, and
    /// [`AppError::AliasSpaceExhausted`] when every candidate collides.
    pub async fn create(&self, destination: ValidatedUrl) -> Result<AliasRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let alias = generate_alias();

            match self
                .store
                .put_if_absent(&alias, destination.as_str(), self.ttl)
                .await?
            {
                PutOutcome::Inserted => {
                    metrics::counter!("aliases_created_total").increment(1);
                    info!(%alias, destination = %destination, "Alias created");
                    return Ok(AliasRecord::new(alias, destination.into_inner(), self.ttl));
                }
                PutOutcome::Exists => {
                    metrics::counter!("alias_collisions_total").increment(1);
                    warn!(%alias, attempt, "Alias collision, regenerating");
                }
            }
        }

        Err(AppError::AliasSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
