//! Edit-session controller.
//!
//! An [`EditSession`] owns the viewing/editing state machine for one
//! snippet: it snapshots a working copy of the file list when editing
//! starts, keeps the selected-file index coherent while files are added
//! and deleted, drives the external editor widget (mode before content),
//! and commits or discards the accumulated edits as one batch.
//!
//! Store calls are fire-and-forget: the session flips back to viewing
//! without waiting on persistence, and failures are logged, not raised.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::bus::EditorSignal;
use crate::config::Config;
use crate::editor::EditorSurface;
use crate::error::{SessionError, SessionResult};
use crate::mode::resolve_mode;
use crate::snippet::{Snippet, SnippetFile};
use crate::store::SnippetStore;
use crate::ui::Frontend;

/// Editing state machine over one snippet.
pub struct EditSession {
    /// Persisted view of the snippet. Mutated only when the store is.
    snippet: Snippet,
    /// Working copy of the file list. Authoritative while editing,
    /// stale otherwise.
    working_files: Vec<SnippetFile>,
    /// Index into the active file list.
    selected: usize,
    editing: bool,

    /// Staged metadata, compared against the snippet at commit time.
    draft_name: String,
    draft_description: String,
    draft_tags: Vec<String>,

    editor: Box<dyn EditorSurface>,
    store: Arc<dyn SnippetStore>,
    config: Config,
    frontend: Frontend,
}

impl EditSession {
    /// Create a session over a snippet, starting in viewing mode.
    pub fn new(
        snippet: Snippet,
        editor: Box<dyn EditorSurface>,
        store: Arc<dyn SnippetStore>,
        config: Config,
        frontend: Frontend,
    ) -> Self {
        let working_files = snippet.files.clone();
        let draft_name = snippet.name.clone();
        let draft_description = snippet.description.clone();
        let draft_tags = snippet.tags.clone();
        Self {
            snippet,
            working_files,
            selected: 0,
            editing: false,
            draft_name,
            draft_description,
            draft_tags,
            editor,
            store,
            config,
            frontend,
        }
    }

    /// The persisted snippet as this session sees it.
    pub fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Working copy of the file list.
    pub fn working_files(&self) -> &[SnippetFile] {
        &self.working_files
    }

    /// The file list the view is showing: the working copy while
    /// editing, the persisted list otherwise.
    pub fn active_files(&self) -> &[SnippetFile] {
        if self.editing {
            &self.working_files
        } else {
            &self.snippet.files
        }
    }

    /// Switch from viewing to editing.
    ///
    /// Snapshots the persisted file list into the working copy; edits
    /// from here on touch only the snapshot until commit.
    pub fn enter_edit(&mut self) {
        if self.editing {
            return;
        }
        self.editing = true;
        // Structural copy: mutating the working list must never reach
        // the persisted snippet
        self.working_files = self.snippet.files.clone();
        self.draft_name = self.snippet.name.clone();
        self.draft_description = self.snippet.description.clone();
        self.draft_tags = self.snippet.tags.clone();
        self.editor.set_read_only(false);
        self.editor.apply_editor_style();
        debug!(snippet_id = %self.snippet.id, "Entered edit mode");
    }

    /// Leave editing, committing (`true`) or discarding (`false`) the
    /// accumulated edits.
    pub async fn exit_edit(&mut self, commit: bool) {
        if !self.editing {
            return;
        }
        if commit {
            self.commit_changes().await;
        } else {
            self.discard_changes();
        }
    }

    async fn commit_changes(&mut self) {
        let metadata_changed = self.draft_name != self.snippet.name
            || self.draft_tags != self.snippet.tags
            || self.draft_description != self.snippet.description;
        let files_changed = self.working_files != self.snippet.files;

        self.leave_editing();

        if !(metadata_changed || files_changed) {
            debug!(snippet_id = %self.snippet.id, "Nothing changed, skipping store update");
            return;
        }

        let mut next = self.snippet.clone();
        next.name = self.draft_name.clone();
        next.tags = self.draft_tags.clone();
        next.description = self.draft_description.clone();
        next.files = self.working_files.clone();

        if let Err(e) = self.store.update_snippet(&next).await {
            warn!(error = %e, snippet_id = %next.id, "Snippet update failed");
        }
        self.snippet = next;
        debug!(snippet_id = %self.snippet.id, "Committed edits");
    }

    fn discard_changes(&mut self) {
        self.working_files = self.snippet.files.clone();
        self.leave_editing();
        self.select_file(0, None);
        debug!(snippet_id = %self.snippet.id, "Discarded edits");
    }

    fn leave_editing(&mut self) {
        self.editing = false;
        self.editor.set_read_only(true);
        self.editor.apply_editor_style();
    }

    /// Select a file and show it in the editor.
    ///
    /// `content_source` overrides which entry supplies the displayed
    /// content; the deletion flow uses it when the same logical file has
    /// shifted to a new index. A missing target leaves the session and
    /// the editor untouched, since that can legitimately happen while a
    /// list mutation is being sequenced.
    pub fn select_file(&mut self, index: usize, content_source: Option<usize>) {
        let files = self.active_files();
        if files.get(index).is_none() {
            return;
        }
        let source = content_source.unwrap_or(index);
        let Some(file) = files.get(source).cloned() else {
            self.selected = index;
            return;
        };
        self.selected = index;
        self.show_file(&file);
    }

    /// Apply a file to the editor. Mode first, content second, so the
    /// highlighter never tokenizes content under the wrong mode.
    fn show_file(&mut self, file: &SnippetFile) {
        self.editor.set_mode(resolve_mode(&file.name));
        self.editor.set_value(&file.content);
        self.editor.apply_editor_style();
    }

    /// Rename a working file.
    ///
    /// The syntax mode binds to the edited name immediately: the editor
    /// re-highlights under the new name's mode without waiting for a
    /// selection change.
    pub fn rename_file(&mut self, index: usize, new_name: &str) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        let Some(file) = self.working_files.get_mut(index) else {
            return Ok(());
        };
        file.name = new_name.to_string();
        self.editor.set_mode(resolve_mode(new_name));
        Ok(())
    }

    /// Append a new empty file to the working copy and select it.
    pub fn add_file(&mut self, name: impl Into<String>) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        let mut file = SnippetFile::new();
        file.name = name.into();
        self.working_files.push(file);
        self.select_file(self.working_files.len() - 1, None);
        Ok(())
    }

    /// Delete a file from the active list.
    ///
    /// Refuses if either the persisted or the working list would drop
    /// below one file. While viewing, the persisted list is updated and
    /// stored immediately; while editing only the working copy changes.
    pub async fn delete_file(&mut self, index: usize) -> SessionResult<()> {
        if self.snippet.files.len() <= 1 || self.working_files.len() <= 1 {
            self.frontend
                .notifier
                .error("The snippet must have at least 1 file");
            return Err(SessionError::MinimumFileCount);
        }
        if self.active_files().get(index).is_none() {
            return Ok(());
        }
        if self.config.ui.show_delete_confirm_dialog
            && !self
                .frontend
                .prompt
                .confirm("Are you sure to delete this file?")
        {
            return Err(SessionError::ConfirmationDeclined);
        }

        // Pre-removal view: reselection content must come from here so a
        // shifted index still shows the same logical file
        let before: Vec<SnippetFile> = self.active_files().to_vec();

        if self.editing {
            self.working_files.remove(index);
        } else {
            let mut next = self.snippet.clone();
            next.files.remove(index);
            if let Err(e) = self.store.update_snippet(&next).await {
                warn!(error = %e, snippet_id = %next.id, "Snippet update failed");
            }
            self.snippet = next;
            // The ignored working copy tracks the persisted list so the
            // minimum-count guard sees the real count
            self.working_files = self.snippet.files.clone();
        }
        debug!(snippet_id = %self.snippet.id, index, editing = self.editing, "Deleted file");

        // Reselection happens in the same logical step as the removal.
        let selected = self.selected;
        if index != selected {
            if index < selected {
                // The selection shifted down one slot; keep showing the
                // file it pointed at before the shift
                self.selected = selected - 1;
                if let Some(file) = before.get(selected) {
                    self.show_file(file);
                }
            }
            // index > selected: nothing at or below the selection moved,
            // so there is deliberately no corrective action here
        } else if index == 0 {
            // The selected head was deleted; slot 0 now holds the next file
            self.selected = 0;
            if let Some(file) = before.get(1) {
                self.show_file(file);
            }
        } else {
            self.selected = index - 1;
            if let Some(file) = before.get(index - 1) {
                self.show_file(file);
            }
        }
        Ok(())
    }

    /// Pull the editor's live text into the selected working file.
    ///
    /// Invoked by the editor widget's change notification; the session
    /// never polls.
    pub fn update_editing_content(&mut self) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        let text = self.editor.value();
        if let Some(file) = self.working_files.get_mut(self.selected) {
            file.content = text;
        }
        Ok(())
    }

    /// Stage a new snippet name.
    pub fn set_name(&mut self, name: &str) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        self.draft_name = name.to_string();
        Ok(())
    }

    /// Stage a new description.
    pub fn set_description(&mut self, description: &str) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        self.draft_description = description.to_string();
        Ok(())
    }

    /// Stage a new tag list.
    pub fn set_tags(&mut self, tags: Vec<String>) -> SessionResult<()> {
        if !self.editing {
            return Err(SessionError::NotEditing);
        }
        self.draft_tags = tags;
        Ok(())
    }

    /// Copy the selected file's content to the clipboard and record the
    /// copy with the store.
    pub async fn copy_snippet(&mut self) {
        let Some(file) = self.active_files().get(self.selected) else {
            return;
        };
        let content = file.content.clone();
        self.frontend.clipboard.set_text(&content);
        if self.config.ui.show_copy_notification {
            self.frontend.notifier.info("Copied to clipboard");
        }

        let snapshot = self.snippet.clone();
        if let Err(e) = self.store.increase_copy_time(&snapshot).await {
            warn!(error = %e, snippet_id = %snapshot.id, "Copy count update failed");
        }
        self.snippet.copy_count += 1;
    }

    /// Delete the whole snippet, confirmation permitting.
    pub async fn delete_snippet(&mut self) -> SessionResult<()> {
        if self.config.ui.show_delete_confirm_dialog
            && !self
                .frontend
                .prompt
                .confirm("Are you sure to delete this snippet?")
        {
            return Err(SessionError::ConfirmationDeclined);
        }
        let snapshot = self.snippet.clone();
        if let Err(e) = self.store.delete_snippet(&snapshot).await {
            warn!(error = %e, snippet_id = %snapshot.id, "Snippet delete failed");
        }
        Ok(())
    }

    /// React to a save-all/discard-all broadcast. Only acts while editing.
    pub async fn handle_signal(&mut self, signal: EditorSignal) {
        if !self.editing {
            return;
        }
        match signal {
            EditorSignal::SaveAll => self.exit_edit(true).await,
            EditorSignal::DiscardAll => self.exit_edit(false).await,
        }
    }
}
