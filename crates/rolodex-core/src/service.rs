use crate::contact::{Contact, ContactRecord};
use crate::error::ContactError;
use crate::id::ContactId;
use crate::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

type Result<T> = std::result::Result<T, ContactError>;

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Stores a new contact and returns its generated id.
    async fn create(&self, contact: Contact) -> Result<ContactId>;

    /// Returns every stored contact.
    async fn list(&self) -> Result<Vec<ContactRecord>>;

    /// Replaces all fields of an existing contact.
    /// Returns `Err(NotFound)` if no contact has the given id.
    async fn update(&self, id: &ContactId, contact: Contact) -> Result<()>;

    /// Permanently removes a contact.
    /// Returns `Err(NotFound)` if no contact has the given id.
    async fn delete(&self, id: &ContactId) -> Result<()>;
}

/// A concrete implementation of the `ContactService` trait.
///
/// The manager is stateless apart from the shared repository handle, so
/// one instance serves every request.
#[derive(Debug)]
pub struct ContactManager<R> {
    repository: Arc<R>,
}

impl<R> Clone for ContactManager<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> ContactManager<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository> ContactService for ContactManager<R> {
    async fn create(&self, contact: Contact) -> Result<ContactId> {
        match self.repository.insert(contact).await {
            Ok(id) => {
                info!(contact_id = %id, "contact created");
                Ok(id)
            }
            Err(err) => {
                error!(error = %err, "failed to create contact");
                Err(err.into())
            }
        }
    }

    async fn list(&self) -> Result<Vec<ContactRecord>> {
        match self.repository.find_all().await {
            Ok(records) => {
                info!(count = records.len(), "retrieved contacts");
                Ok(records)
            }
            Err(err) => {
                error!(error = %err, "failed to retrieve contacts");
                Err(err.into())
            }
        }
    }

    async fn update(&self, id: &ContactId, contact: Contact) -> Result<()> {
        match self.repository.update_by_id(id, contact).await {
            Ok(0) => {
                info!(contact_id = %id, "contact to update not found");
                Err(ContactError::NotFound(id.clone()))
            }
            Ok(_) => {
                info!(contact_id = %id, "contact updated");
                Ok(())
            }
            Err(err) => {
                error!(contact_id = %id, error = %err, "failed to update contact");
                Err(err.into())
            }
        }
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        match self.repository.delete_by_id(id).await {
            Ok(0) => {
                info!(contact_id = %id, "contact to delete not found");
                Err(ContactError::NotFound(id.clone()))
            }
            Ok(_) => {
                info!(contact_id = %id, "contact deleted");
                Ok(())
            }
            Err(err) => {
                error!(contact_id = %id, error = %err, "failed to delete contact");
                Err(err.into())
            }
        }
    }
}
