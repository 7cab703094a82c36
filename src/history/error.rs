//! History error types.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur while loading or persisting the history log
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Encoding the log as JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Persisted data is not a JSON array of history entries
    #[error("Malformed persisted history: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
