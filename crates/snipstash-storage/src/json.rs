//! JSON file-based storage implementation.
//!
//! Each document is stored as its own file:
//! `("snippet", "snp_123")` -> `<base>/snippet/snp_123.json`

use crate::{validate_component, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// JSON file-based storage.
#[derive(Clone)]
pub struct JsonStorage {
    base_path: PathBuf,
}

impl JsonStorage {
    /// Create a new JSON storage at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Get the file path for a document.
    fn document_path(&self, collection: &str, id: &str) -> StorageResult<PathBuf> {
        validate_component(collection)?;
        validate_component(id)?;
        let mut path = self.base_path.join(collection);
        path.push(id);
        path.set_extension("json");
        Ok(path)
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn read<T: DeserializeOwned + Send>(
        &self,
        collection: &str,
        id: &str,
    ) -> StorageResult<Option<T>> {
        let path = self.document_path(collection, id)?;
        debug!(path = %path.display(), "Reading from storage");

        match fs::read_to_string(&path).await {
            Ok(content) => {
                let value: T = serde_json::from_str(&content)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn write<T: Serialize + Send + Sync>(
        &self,
        collection: &str,
        id: &str,
        value: &T,
    ) -> StorageResult<()> {
        let path = self.document_path(collection, id)?;
        debug!(path = %path.display(), "Writing to storage");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(value)?;

        // Write atomically (write to temp file, then rename)
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &path).await?;

        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> StorageResult<()> {
        let path = self.document_path(collection, id)?;
        debug!(path = %path.display(), "Removing from storage");

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn list(&self, collection: &str) -> StorageResult<Vec<String>> {
        validate_component(collection)?;
        let dir = self.base_path.join(collection);
        debug!(path = %dir.display(), "Listing storage");

        let mut ids = Vec::new();

        match fs::read_dir(&dir).await {
            Ok(mut entries) => {
                while let Some(entry) = entries.next_entry().await? {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "json") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            ids.push(stem.to_string());
                        }
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Collection doesn't exist yet, return empty list
            }
            Err(e) => return Err(StorageError::Io(e)),
        }

        ids.sort();
        Ok(ids)
    }
}

/// Create a storage instance at the default data directory.
pub fn default_storage() -> Option<JsonStorage> {
    snipstash_util::path::data_dir().map(|p| JsonStorage::new(p.join("data")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestDoc {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let doc = TestDoc {
            name: "test".to_string(),
            value: 42,
        };

        storage.write("snippet", "snp_1", &doc).await.unwrap();

        let read: Option<TestDoc> = storage.read("snippet", "snp_1").await.unwrap();
        assert_eq!(read, Some(doc));
    }

    #[tokio::test]
    async fn test_read_not_found() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let read: Option<TestDoc> = storage.read("snippet", "missing").await.unwrap();
        assert_eq!(read, None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let first = TestDoc {
            name: "first".to_string(),
            value: 1,
        };
        let second = TestDoc {
            name: "second".to_string(),
            value: 2,
        };

        storage.write("snippet", "snp_1", &first).await.unwrap();
        storage.write("snippet", "snp_1", &second).await.unwrap();

        let read: Option<TestDoc> = storage.read("snippet", "snp_1").await.unwrap();
        assert_eq!(read.unwrap().name, "second");
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let doc = TestDoc::default();
        storage.write("snippet", "snp_1", &doc).await.unwrap();
        storage.remove("snippet", "snp_1").await.unwrap();

        let read: Option<TestDoc> = storage.read("snippet", "snp_1").await.unwrap();
        assert_eq!(read, None);

        // Removing again is fine
        storage.remove("snippet", "snp_1").await.unwrap();
    }

    #[tokio::test]
    async fn test_list() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let doc = TestDoc::default();
        storage.write("snippet", "snp_1", &doc).await.unwrap();
        storage.write("snippet", "snp_2", &doc).await.unwrap();
        storage.write("other", "x", &doc).await.unwrap();

        let ids = storage.list("snippet").await.unwrap();
        assert_eq!(ids, vec!["snp_1", "snp_2"]);
    }

    #[tokio::test]
    async fn test_list_missing_collection() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let ids = storage.list("nothing").await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(dir.path());

        let doc = TestDoc::default();

        // Path traversal attempt
        assert!(storage.write("..", "passwd", &doc).await.is_err());
        assert!(storage.write("snippet", "../etc", &doc).await.is_err());
        assert!(storage.write("snippet", "a/b", &doc).await.is_err());
        assert!(storage.write("", "x", &doc).await.is_err());
    }
}
