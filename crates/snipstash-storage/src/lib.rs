//! Storage layer for snipstash.
//!
//! This crate provides a document-store abstraction with two backends:
//! - JSON file storage (default)
//! - In-memory storage (for testing)

pub mod error;
pub mod json;
pub mod memory;

pub use error::{StorageError, StorageResult};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// A trait for document storage backends.
///
/// Documents are grouped into collections and addressed by id, e.g.
/// `("snippet", "snp_01hq...")`. Values are serialized as JSON.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a document.
    ///
    /// Returns `None` if the document doesn't exist.
    async fn read<T: DeserializeOwned + Send>(
        &self,
        collection: &str,
        id: &str,
    ) -> StorageResult<Option<T>>;

    /// Write a document, creating the collection if necessary.
    async fn write<T: Serialize + Send + Sync>(
        &self,
        collection: &str,
        id: &str,
        value: &T,
    ) -> StorageResult<()>;

    /// Remove a document. Removing a missing document is not an error.
    async fn remove(&self, collection: &str, id: &str) -> StorageResult<()>;

    /// List all document ids in a collection.
    async fn list(&self, collection: &str) -> StorageResult<Vec<String>>;
}

/// Validate a collection or id component.
///
/// Components become path segments in the JSON backend, so path
/// separators and dot traversal are rejected for every backend.
pub(crate) fn validate_component(component: &str) -> StorageResult<()> {
    if component.is_empty()
        || component.contains('/')
        || component.contains('\\')
        || component == "."
        || component == ".."
    {
        return Err(StorageError::invalid_key(format!(
            "invalid key component: {component:?}"
        )));
    }
    Ok(())
}
