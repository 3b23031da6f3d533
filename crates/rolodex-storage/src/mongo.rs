use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection};
use rolodex_core::repository::{Repository, Result};
use rolodex_core::{Contact, ContactId, ContactRecord, StorageError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "contact_manager";
/// Collection used when none is configured.
pub const DEFAULT_COLLECTION: &str = "contacts";

/// A contact as stored in MongoDB, including the server-assigned `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    age: i64,
    mobile: String,
    email: String,
}

impl ContactDocument {
    fn into_record(self) -> ContactRecord {
        ContactRecord::new(
            ContactId::new(self.id.to_hex()),
            Contact {
                name: self.name,
                age: self.age,
                mobile: self.mobile,
                email: self.email,
            },
        )
    }
}

/// MongoDB implementation of the repository contract.
///
/// One `Client` is opened at startup and shared by every request; the
/// driver pools connections internally. Ids are the hex form of the
/// document's `ObjectId`, and any other string is rejected before a
/// round trip is made.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    client: Client,
    contacts: Collection<Contact>,
    documents: Collection<ContactDocument>,
}

impl MongoRepository {
    /// Creates a repository over an existing client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let contacts = client.database(database).collection::<Contact>(collection);
        let documents = contacts.clone_with_type::<ContactDocument>();
        Self {
            client,
            contacts,
            documents,
        }
    }

    /// Opens a client from a connection string and verifies the server is
    /// reachable, so a bad deployment fails at startup instead of on the
    /// first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;

        info!(database, collection, "connected to mongodb");
        Ok(Self::new(client, database, collection))
    }

    /// Shuts the client down, waiting for in-flight operations to finish.
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("mongodb connection closed");
    }
}

fn parse_object_id(id: &ContactId) -> Result<ObjectId> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| StorageError::InvalidId(format!("'{}': {e}", id.as_str())))
}

fn map_mongo_error(err: mongodb::error::Error) -> StorageError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StorageError::Timeout(message)
        }
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => StorageError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::InvalidData(message)
        }
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl Repository for MongoRepository {
    async fn insert(&self, contact: Contact) -> Result<ContactId> {
        let result = self
            .contacts
            .insert_one(&contact)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StorageError::InvalidData(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        Ok(ContactId::new(id.to_hex()))
    }

    async fn find_all(&self) -> Result<Vec<ContactRecord>> {
        let documents: Vec<ContactDocument> = self
            .documents
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        Ok(documents
            .into_iter()
            .map(ContactDocument::into_record)
            .collect())
    }

    async fn update_by_id(&self, id: &ContactId, contact: Contact) -> Result<u64> {
        let object_id = parse_object_id(id)?;
        let fields = to_document(&contact)
            .map_err(|e| StorageError::InvalidData(format!("cannot encode contact: {e}")))?;

        let result = self
            .contacts
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<u64> {
        let object_id = parse_object_id(id)?;

        let result = self
            .contacts
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count)
    }
}
