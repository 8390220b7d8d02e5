//! Storage Errors

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures from the persisted storage layer
///
/// These never reach the user; the list store degrades to "start empty"
/// or "skip the write" and logs them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("invalid stored data: {0}")]
    Codec(#[from] serde_json::Error),
}
