use crate::id::ContactId;
use thiserror::Error;

/// Failures raised by a storage backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("malformed contact id: {0}")]
    InvalidId(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Failures surfaced by the contact service.
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("contact not found: {0}")]
    NotFound(ContactId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
