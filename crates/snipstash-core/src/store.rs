//! Snippet store contract and repository.
//!
//! The edit session talks to an opaque [`SnippetStore`]; the default
//! implementation is [`SnippetRepository`], which persists snippets
//! through the storage layer and publishes change events on the bus.

use crate::bus::{Bus, SnippetCopied, SnippetDeleted, SnippetUpdated};
use crate::error::{CoreError, CoreResult};
use crate::snippet::Snippet;
use async_trait::async_trait;
use snipstash_storage::Storage;
use tracing::debug;

/// Storage collection snippets live under.
const COLLECTION: &str = "snippet";

/// The persistence contract consumed by the edit session.
///
/// Calls are fire-and-forget from the session's perspective: it logs
/// failures and moves on without inspecting results.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Persist the snippet, replacing the stored version.
    async fn update_snippet(&self, snippet: &Snippet) -> CoreResult<()>;

    /// Remove the snippet from storage.
    async fn delete_snippet(&self, snippet: &Snippet) -> CoreResult<()>;

    /// Record one more copy of the snippet's content.
    async fn increase_copy_time(&self, snippet: &Snippet) -> CoreResult<()>;
}

/// Snippet repository over a storage backend.
pub struct SnippetRepository<S: Storage> {
    storage: S,
    bus: Bus,
}

impl<S: Storage> SnippetRepository<S> {
    /// Create a new snippet repository.
    pub fn new(storage: S, bus: Bus) -> Self {
        Self { storage, bus }
    }

    /// Create and persist a new snippet.
    pub async fn create(&self, mut snippet: Snippet) -> CoreResult<Snippet> {
        snippet.touch();
        self.storage.write(COLLECTION, &snippet.id, &snippet).await?;
        self.bus
            .publish(SnippetUpdated {
                snippet_id: snippet.id.clone(),
            })
            .await;
        Ok(snippet)
    }

    /// Get a snippet by ID.
    pub async fn get(&self, snippet_id: &str) -> CoreResult<Snippet> {
        self.storage
            .read(COLLECTION, snippet_id)
            .await?
            .ok_or_else(|| CoreError::SnippetNotFound(snippet_id.to_string()))
    }

    /// List all snippets, newest id first.
    pub async fn list(&self) -> CoreResult<Vec<Snippet>> {
        let ids = self.storage.list(COLLECTION).await?;

        let mut snippets = Vec::new();
        for id in ids {
            if let Some(snippet) = self.storage.read::<Snippet>(COLLECTION, &id).await? {
                snippets.push(snippet);
            }
        }

        snippets.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(snippets)
    }
}

#[async_trait]
impl<S: Storage> SnippetStore for SnippetRepository<S> {
    async fn update_snippet(&self, snippet: &Snippet) -> CoreResult<()> {
        let mut snippet = snippet.clone();
        snippet.touch();

        debug!(snippet_id = %snippet.id, files = snippet.files.len(), "Updating snippet");
        self.storage.write(COLLECTION, &snippet.id, &snippet).await?;

        self.bus
            .publish(SnippetUpdated {
                snippet_id: snippet.id.clone(),
            })
            .await;
        Ok(())
    }

    async fn delete_snippet(&self, snippet: &Snippet) -> CoreResult<()> {
        debug!(snippet_id = %snippet.id, "Deleting snippet");
        self.storage.remove(COLLECTION, &snippet.id).await?;

        self.bus
            .publish(SnippetDeleted {
                snippet_id: snippet.id.clone(),
            })
            .await;
        Ok(())
    }

    async fn increase_copy_time(&self, snippet: &Snippet) -> CoreResult<()> {
        // Prefer the stored version so concurrent copies don't reset the count
        let mut current = match self.storage.read::<Snippet>(COLLECTION, &snippet.id).await? {
            Some(stored) => stored,
            None => snippet.clone(),
        };
        current.copy_count += 1;

        debug!(snippet_id = %current.id, copy_count = current.copy_count, "Copy count bumped");
        self.storage.write(COLLECTION, &current.id, &current).await?;

        self.bus
            .publish(SnippetCopied {
                snippet_id: current.id.clone(),
                copy_count: current.copy_count,
            })
            .await;
        Ok(())
    }
}
