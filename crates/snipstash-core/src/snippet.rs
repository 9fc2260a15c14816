//! Snippet data model.
//!
//! A snippet is a named bundle of files with tags, a description, and
//! usage metadata. A persisted snippet always carries at least one file.

use serde::{Deserialize, Serialize};
use snipstash_util::Identifier;

/// A single file inside a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFile {
    /// Stable file key (`fil_` ULID). Survives renames and list shifts.
    pub key: String,

    /// File name. May be empty; empty names display as "untitled".
    #[serde(default)]
    pub name: String,

    /// File content.
    #[serde(default)]
    pub content: String,
}

impl SnippetFile {
    /// Create an empty file with a fresh key.
    pub fn new() -> Self {
        Self {
            key: Identifier::file(),
            name: String::new(),
            content: String::new(),
        }
    }

    /// Create a file with a name and content.
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: Identifier::file(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Name shown in file lists.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "untitled"
        } else {
            &self.name
        }
    }
}

impl Default for SnippetFile {
    fn default() -> Self {
        Self::new()
    }
}

/// A multi-file code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Snippet ID (`snp_` ULID).
    #[serde(default)]
    pub id: String,

    /// Snippet name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ordered files. Never empty once persisted.
    #[serde(default)]
    pub files: Vec<SnippetFile>,

    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,

    /// Last update time, epoch milliseconds.
    #[serde(default)]
    pub updated_at: i64,

    /// How many times the snippet has been copied.
    #[serde(default)]
    pub copy_count: u32,
}

impl Snippet {
    /// Create a new snippet seeded with one empty file.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: Identifier::snippet(),
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            files: vec![SnippetFile::new()],
            created_at: now,
            updated_at: now,
            copy_count: 0,
        }
    }

    /// Update the last modified time.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }

    /// Get created_at as a DateTime.
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(self.created_at).unwrap_or_else(chrono::Utc::now)
    }

    /// Get updated_at as a DateTime.
    pub fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(self.updated_at).unwrap_or_else(chrono::Utc::now)
    }
}

impl Default for Snippet {
    fn default() -> Self {
        Self::new("")
    }
}
