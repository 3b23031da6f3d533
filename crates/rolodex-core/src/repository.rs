use crate::contact::{Contact, ContactRecord};
use crate::error::StorageError;
use crate::id::ContactId;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The single point of contact with the persistent contact collection.
///
/// Every call performs exactly one document operation. Implementations
/// must be safe to share across concurrently handled requests.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Stores a new contact and returns the id assigned by the backend.
    async fn insert(&self, contact: Contact) -> Result<ContactId>;

    /// Returns every stored contact in backend-native order.
    async fn find_all(&self) -> Result<Vec<ContactRecord>>;

    /// Overwrites all fields of the contact with the given id.
    /// Returns the number of matched contacts (0 or 1).
    async fn update_by_id(&self, id: &ContactId, contact: Contact) -> Result<u64>;

    /// Removes the contact with the given id.
    /// Returns the number of deleted contacts (0 or 1).
    async fn delete_by_id(&self, id: &ContactId) -> Result<u64>;
}
