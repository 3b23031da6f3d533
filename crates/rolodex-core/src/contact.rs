use crate::id::ContactId;
use serde::{Deserialize, Serialize};

/// The client-supplied fields of a contact.
///
/// This is the full shape of both the create and the update payload; an
/// update always overwrites all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub age: i64,
    pub mobile: String,
    pub email: String,
}

/// A persisted contact together with its storage-assigned id.
///
/// Serializes flat, e.g. `{"id": "...", "name": "Ann", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: ContactId,
    #[serde(flatten)]
    pub contact: Contact,
}

impl ContactRecord {
    pub fn new(id: ContactId, contact: Contact) -> Self {
        Self { id, contact }
    }
}
