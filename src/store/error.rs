//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be mapped to a storage location
    #[error("Invalid store key '{0}'")]
    InvalidKey(String),

    /// Reading the backing file failed
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
