//! Edit-session core for snipstash.
//!
//! This crate provides the editing state machine for a multi-file code
//! snippet:
//! - Snippet and file data model
//! - Edit-session controller (viewing/editing transitions, working-copy
//!   isolation, selection handling across inserts and deletes)
//! - Syntax mode resolution from file extensions
//! - Snippet store contract and repository
//! - Event bus for save-all/discard-all broadcasts and store notifications
//! - Configuration and collaborator contracts (editor surface, prompts,
//!   notifications, clipboard)

pub mod bus;
pub mod config;
pub mod editor;
pub mod error;
pub mod mode;
pub mod session;
pub mod snippet;
pub mod store;
pub mod ui;

pub use bus::{Bus, DiscardAll, EditorSignal, SaveAll, SignalSubscription};
pub use config::{Config, UiConfig};
pub use editor::EditorSurface;
pub use error::{CoreError, CoreResult, SessionError, SessionResult};
pub use mode::{resolve_mode, SyntaxMode, PLAIN_TEXT};
pub use session::EditSession;
pub use snippet::{Snippet, SnippetFile};
pub use store::{SnippetRepository, SnippetStore};
pub use ui::{Clipboard, ConfirmPrompt, Frontend, Notifier};
