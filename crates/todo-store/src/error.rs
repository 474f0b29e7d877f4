//! Store Errors
//!
//! Typed failures for store operations, durable storage, and the persisted format.

use thiserror::Error;

use crate::item::TodoId;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by `TodoListStore` operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Draft was empty or whitespace-only on submit
    #[error("draft text is empty")]
    EmptyDraft,
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no item with id {0}")]
    UnknownItem(TodoId),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Failures reported by a `DurableStore`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Persisted list text could not be converted
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("stored list is not a JSON array of strings: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("stored list is null")]
    Null,
    #[error("failed to encode list: {0}")]
    Encode(#[source] serde_json::Error),
}
