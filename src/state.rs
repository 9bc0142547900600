use std::sync::Arc;

use crate::application::services::{AliasService, RateGovernor, RedirectResolver, ShortenService};
use crate::domain::repositories::{AliasStore, CounterStore};

/// Shared handler state.
///
/// Holds only services and store handles; all mutable data lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_resolver: Arc<RedirectResolver>,
    pub store: Arc<dyn AliasStore>,
}

impl AppState {
    /// Wires the services on top of the given stores.
    ///
    /// `rate_limit` is the number of creation requests an identity may make
    /// per window.
    pub fn new(
        aliases: Arc<dyn AliasStore>,
        counters: Arc<dyn CounterStore>,
        rate_limit: u64,
    ) -> Self {
        let governor = Arc::new(RateGovernor::new(counters, rate_limit));
        let alias_service = Arc::new(AliasService::new(aliases.clone()));

        Self {
            shorten_service: Arc::new(ShortenService::new(governor, alias_service)),
            redirect_resolver: Arc::new(RedirectResolver::new(aliases.clone())),
            store: aliases,
        }
    }

    /// Wires the services on a single store backing both aliases and counters.
    pub fn with_store<S>(store: Arc<S>, rate_limit: u64) -> Self
    where
        S: AliasStore + CounterStore + 'static,
    {
        Self::new(store.clone(), store, rate_limit)
    }
}
