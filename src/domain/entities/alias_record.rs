//! Alias record entity representing a short alias and its destination.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A short alias mapped to a destination URL until `expires_at`.
///
/// Records are created once and never mutated; the store drops them when the
/// TTL elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub alias: String,
    pub destination: String,
    pub expires_at: DateTime<Utc>,
}

impl AliasRecord {
    /// Creates a record expiring `ttl` from now.
    pub fn new(alias: String, destination: String, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let expires_at = Utc::now()
            .checked_add_signed(chrono::Duration::seconds(ttl_secs))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            alias,
            destination,
            expires_at,
        }
    }

    #[cfg(test)]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
