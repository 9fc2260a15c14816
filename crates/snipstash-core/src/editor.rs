//! Editor widget contract.
//!
//! The core never renders text itself; it drives an external editor
//! widget through this minimal surface. Mode changes must be applied
//! before content swaps so the highlighter never tokenizes the outgoing
//! file's content under the incoming mode.

use crate::mode::SyntaxMode;

/// The editing surface the session controls.
pub trait EditorSurface {
    /// Current live text of the editor.
    fn value(&self) -> String;

    /// Replace the displayed text.
    fn set_value(&mut self, text: &str);

    /// Toggle the read-only flag.
    fn set_read_only(&mut self, read_only: bool);

    /// Apply a syntax mode (including the embedded-markup flag).
    fn set_mode(&mut self, mode: SyntaxMode);

    /// Recompute visual height/layout.
    ///
    /// Called after any operation that changes the visible line count or
    /// editing affordances.
    fn apply_editor_style(&mut self);
}
