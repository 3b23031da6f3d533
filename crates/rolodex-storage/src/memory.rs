use async_trait::async_trait;
use dashmap::DashMap;
use rolodex_core::repository::{Repository, Result};
use rolodex_core::{Contact, ContactId, ContactRecord, StorageError};
use std::sync::atomic::{AtomicU64, Ordering};

const ID_LENGTH: usize = 24;

/// In-memory implementation of the Repository trait using DashMap.
///
/// Ids are 24 lowercase hex digits, the same shape MongoDB hands out, and
/// anything else is rejected as malformed so both backends behave alike.
/// Ids come from a monotonic counter, which keeps `find_all` in insertion
/// order.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Contact>,
    next_id: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&self) -> String {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{seq:0width$x}", width = ID_LENGTH)
    }
}

fn validate_id(id: &ContactId) -> Result<&str> {
    let raw = id.as_str();
    if raw.len() != ID_LENGTH || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StorageError::InvalidId(format!(
            "'{raw}' is not a {ID_LENGTH}-character hex string"
        )));
    }
    Ok(raw)
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, contact: Contact) -> Result<ContactId> {
        let id = self.generate_id();
        self.storage.insert(id.clone(), contact);
        Ok(ContactId::new(id))
    }

    async fn find_all(&self) -> Result<Vec<ContactRecord>> {
        let mut records: Vec<ContactRecord> = self
            .storage
            .iter()
            .map(|entry| ContactRecord::new(ContactId::new(entry.key()), entry.value().clone()))
            .collect();
        records.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(records)
    }

    async fn update_by_id(&self, id: &ContactId, contact: Contact) -> Result<u64> {
        let key = validate_id(id)?.to_ascii_lowercase();

        match self.storage.get_mut(&key) {
            Some(mut entry) => {
                *entry = contact;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<u64> {
        let key = validate_id(id)?.to_ascii_lowercase();
        Ok(u64::from(self.storage.remove(&key).is_some()))
    }
}
