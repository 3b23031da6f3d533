//! Core types and traits for the Rolodex contact service.
//!
//! This crate provides the contact data model, the storage contract
//! implemented by `rolodex-storage`, and the service that the HTTP
//! gateway delegates to.

pub mod contact;
pub mod error;
pub mod id;
pub mod repository;
pub mod service;

pub use contact::{Contact, ContactRecord};
pub use error::{ContactError, StorageError};
pub use id::ContactId;
pub use repository::Repository;
pub use service::{ContactManager, ContactService};
