//! End-to-end edit-session flows over the real repository, storage, and bus.

use std::sync::{Arc, Mutex};

use snipstash_core::bus::{DiscardAll, SaveAll, SnippetUpdated};
use snipstash_core::{
    Bus, Config, EditSession, EditorSurface, Frontend, SignalSubscription, Snippet, SnippetFile,
    SnippetRepository, SnippetStore, SyntaxMode,
};
use snipstash_storage::json::JsonStorage;
use snipstash_storage::memory::MemoryStorage;

#[derive(Clone, Default)]
struct FakeEditor {
    state: Arc<Mutex<FakeEditorState>>,
}

#[derive(Default)]
struct FakeEditorState {
    value: String,
    read_only: bool,
    mode: Option<SyntaxMode>,
}

impl EditorSurface for FakeEditor {
    fn value(&self) -> String {
        self.state.lock().unwrap().value.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.state.lock().unwrap().value = text.to_string();
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.state.lock().unwrap().read_only = read_only;
    }

    fn set_mode(&mut self, mode: SyntaxMode) {
        self.state.lock().unwrap().mode = Some(mode);
    }

    fn apply_editor_style(&mut self) {}
}

fn config_without_confirmations() -> Config {
    let mut config = Config::default();
    config.ui.show_delete_confirm_dialog = false;
    config
}

fn seed_snippet() -> Snippet {
    let mut snippet = Snippet::new("http client");
    snippet.files = vec![
        SnippetFile::named("client.rs", "pub struct Client;"),
        SnippetFile::named("retry.rs", "pub fn backoff() {}"),
        SnippetFile::named("README.md", "# http client"),
    ];
    snippet
}

#[tokio::test]
async fn save_all_broadcast_commits_through_the_repository() {
    let bus = Bus::new();
    let repo = Arc::new(SnippetRepository::new(MemoryStorage::new(), bus.clone()));
    let created = repo.create(seed_snippet()).await.unwrap();

    let mut signals = SignalSubscription::new(&bus).await;
    let mut updates = bus.subscribe::<SnippetUpdated>().await;

    let editor = FakeEditor::default();
    let store: Arc<dyn SnippetStore> = repo.clone();
    let mut session = EditSession::new(
        created.clone(),
        Box::new(editor.clone()),
        store,
        config_without_confirmations(),
        Frontend::headless(),
    );

    session.select_file(0, None);
    session.enter_edit();
    editor.state.lock().unwrap().value = "pub struct Client { retries: u8 }".to_string();
    session.update_editing_content().unwrap();

    bus.publish(SaveAll).await;
    let signal = signals.recv().await.unwrap();
    session.handle_signal(signal).await;

    assert!(!session.is_editing());
    let stored = repo.get(&created.id).await.unwrap();
    assert_eq!(stored.files[0].content, "pub struct Client { retries: u8 }");

    let event = updates.recv().await.unwrap();
    assert_eq!(event.snippet_id, created.id);
}

#[tokio::test]
async fn discard_all_broadcast_leaves_the_store_untouched() {
    let bus = Bus::new();
    let repo = Arc::new(SnippetRepository::new(MemoryStorage::new(), bus.clone()));
    let created = repo.create(seed_snippet()).await.unwrap();

    let mut signals = SignalSubscription::new(&bus).await;

    let editor = FakeEditor::default();
    let store: Arc<dyn SnippetStore> = repo.clone();
    let mut session = EditSession::new(
        created.clone(),
        Box::new(editor.clone()),
        store,
        config_without_confirmations(),
        Frontend::headless(),
    );

    session.enter_edit();
    session.rename_file(1, "retry.py").unwrap();
    editor.state.lock().unwrap().value = "scrapped".to_string();
    session.update_editing_content().unwrap();

    bus.publish(DiscardAll).await;
    let signal = signals.recv().await.unwrap();
    session.handle_signal(signal).await;

    assert!(!session.is_editing());
    assert_eq!(session.selected_index(), 0);
    let stored = repo.get(&created.id).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn viewing_delete_is_persisted_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let bus = Bus::new();
    let repo = Arc::new(SnippetRepository::new(
        JsonStorage::new(dir.path()),
        bus.clone(),
    ));
    let created = repo.create(seed_snippet()).await.unwrap();

    let editor = FakeEditor::default();
    let store: Arc<dyn SnippetStore> = repo.clone();
    let mut session = EditSession::new(
        created.clone(),
        Box::new(editor),
        store,
        config_without_confirmations(),
        Frontend::headless(),
    );

    session.delete_file(1).await.unwrap();

    let stored = repo.get(&created.id).await.unwrap();
    assert_eq!(stored.files.len(), 2);
    assert_eq!(stored.files[0].name, "client.rs");
    assert_eq!(stored.files[1].name, "README.md");
}

#[tokio::test]
async fn mode_follows_selection_across_files() {
    let bus = Bus::new();
    let repo = Arc::new(SnippetRepository::new(MemoryStorage::new(), bus.clone()));
    let created = repo.create(seed_snippet()).await.unwrap();

    let editor = FakeEditor::default();
    let store: Arc<dyn SnippetStore> = repo.clone();
    let mut session = EditSession::new(
        created,
        Box::new(editor.clone()),
        store,
        config_without_confirmations(),
        Frontend::headless(),
    );

    session.select_file(0, None);
    assert_eq!(editor.state.lock().unwrap().mode.unwrap().name, "rust");

    session.select_file(2, None);
    let state = editor.state.lock().unwrap();
    assert_eq!(state.mode.unwrap().name, "markdown");
    assert_eq!(state.value, "# http client");
}
