//! Presentation collaborator contracts.
//!
//! Confirmation prompts, user notices, and the clipboard are owned by
//! the embedding UI. The session only consumes these seams; headless
//! implementations are provided for hosts without a presentation layer.

/// Asks the user to confirm a destructive action.
pub trait ConfirmPrompt: Send {
    /// Returns `true` if the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Surfaces user-visible notices.
pub trait Notifier: Send {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// System clipboard access.
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str);
}

/// The presentation collaborators handed to an edit session.
pub struct Frontend {
    pub prompt: Box<dyn ConfirmPrompt>,
    pub notifier: Box<dyn Notifier>,
    pub clipboard: Box<dyn Clipboard>,
}

impl Frontend {
    /// A frontend that confirms everything, drops notices, and swallows
    /// clipboard writes. Suitable for headless hosts.
    pub fn headless() -> Self {
        Self {
            prompt: Box::new(AutoConfirm),
            notifier: Box::new(SilentNotifier),
            clipboard: Box::new(NullClipboard),
        }
    }
}

/// Confirms every prompt.
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Drops all notices.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Swallows clipboard writes.
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn set_text(&mut self, _text: &str) {}
}
