//! Error types for the core crate.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Session error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] snipstash_storage::StorageError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snippet not found.
    #[error("snippet not found: {0}")]
    SnippetNotFound(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid JSON syntax.
    #[error("invalid config at {path}: {message}")]
    InvalidJson { path: String, message: String },

    /// Invalid path (e.g., could not determine config directory).
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Policy conditions raised by the edit session.
///
/// These are user-facing outcomes rather than faults: callers decide
/// whether to surface, retry, or ignore them. None of them leaves the
/// session in a partially applied state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Deleting would reduce the persisted or working file list below one.
    #[error("the snippet must have at least 1 file")]
    MinimumFileCount,

    /// A guarded destructive action was declined at the confirmation prompt.
    #[error("confirmation declined")]
    ConfirmationDeclined,

    /// The operation is only valid while editing.
    #[error("operation requires edit mode")]
    NotEditing,
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for edit-session operations.
pub type SessionResult<T> = Result<T, SessionError>;
