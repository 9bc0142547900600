//! Alias resolution for the redirect path.

use std::sync::Arc;

use crate::domain::repositories::AliasStore;
use crate::error::AppError;

/// Read-through lookup of aliases against the store.
///
/// The alias is an opaque key: it is not validated, so any path segment is a
/// legal (if usually unsuccessful) lookup.
pub struct RedirectResolver {
    store: Arc<dyn AliasStore>,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self { store }
    }

    /// Returns the destination stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown or expired aliases and
    /// [`AppError::StoreUnavailable`] if the store fails.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        match self.store.get(alias).await? {
            Some(destination) => {
                metrics::counter!("redirects_total", "outcome" => "hit").increment(1);
                Ok(destination)
            }
            None => {
                metrics::counter!("redirects_total", "outcome" => "miss").increment(1);
                Err(AppError::not_found(alias))
            }
        }
    }
}
