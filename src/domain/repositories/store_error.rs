//! Errors reported by store implementations.

use std::time::Duration;

/// Failure of the backing key-value store.
///
/// All variants mean the same thing to callers: the store could not answer,
/// so the operation must not be treated as a success.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Store did not answer within {0:?}")]
    Timeout(Duration),
}
