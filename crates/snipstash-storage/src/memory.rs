//! In-memory storage implementation for testing.

use crate::{validate_component, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory storage for testing.
///
/// This stores all documents in memory and is not persistent.
pub struct MemoryStorage {
    data: RwLock<BTreeMap<(String, String), String>>,
}

impl MemoryStorage {
    /// Create a new in-memory storage.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn read<T: DeserializeOwned + Send>(
        &self,
        collection: &str,
        id: &str,
    ) -> StorageResult<Option<T>> {
        validate_component(collection)?;
        validate_component(id)?;
        let data = self
            .data
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        match data.get(&(collection.to_string(), id.to_string())) {
            Some(json) => {
                let value: T = serde_json::from_str(json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn write<T: Serialize + Send + Sync>(
        &self,
        collection: &str,
        id: &str,
        value: &T,
    ) -> StorageResult<()> {
        validate_component(collection)?;
        validate_component(id)?;
        let json = serde_json::to_string(value)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        data.insert((collection.to_string(), id.to_string()), json);

        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> StorageResult<()> {
        validate_component(collection)?;
        validate_component(id)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        data.remove(&(collection.to_string(), id.to_string()));
        Ok(())
    }

    async fn list(&self, collection: &str) -> StorageResult<Vec<String>> {
        validate_component(collection)?;
        let data = self
            .data
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(data
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, id)| id.clone())
            .collect())
    }
}
