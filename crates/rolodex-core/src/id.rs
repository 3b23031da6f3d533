use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier assigned to a contact by the storage backend.
///
/// The gateway never interprets the value; each backend decides what a
/// well-formed id looks like and rejects the rest with
/// [`StorageError::InvalidId`](crate::StorageError::InvalidId).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
