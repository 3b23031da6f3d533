pub mod memory;
pub mod mongo;

pub use memory::InMemoryRepository;
pub use mongo::{MongoRepository, DEFAULT_COLLECTION, DEFAULT_DATABASE};
pub use rolodex_core::{Repository, StorageError};
