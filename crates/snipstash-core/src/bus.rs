//! Event bus for inter-component communication.
//!
//! The bus provides typed publish/subscribe so the edit session, the
//! store, and the surrounding UI can communicate without direct
//! coupling. The session consumes the `SaveAll`/`DiscardAll` broadcast
//! signals through an explicit [`SignalSubscription`]; dropping the
//! subscription is the deterministic unsubscribe, so a disposed session
//! can never be reached by a stale callback.

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::RwLock;

/// Default channel capacity.
const DEFAULT_CAPACITY: usize = 64;

/// Trait for events that can be published on the bus.
pub trait Event: Clone + Send + Sync + 'static {
    /// Event type name for serialization/logging.
    fn event_type() -> &'static str;
}

/// The event bus for pub/sub communication.
#[derive(Clone)]
pub struct Bus {
    inner: Arc<BusInner>,
}

struct BusInner {
    /// Typed channels by TypeId.
    channels: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    /// Wildcard subscribers (receive all events as JSON).
    wildcard: broadcast::Sender<BusEvent>,
}

/// A serialized event for wildcard subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusEvent {
    /// Event type name.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload as JSON.
    pub payload: serde_json::Value,
}

impl Bus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (wildcard, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self {
            inner: Arc::new(BusInner {
                channels: RwLock::new(HashMap::new()),
                wildcard,
            }),
        }
    }

    /// Publish an event to all subscribers.
    pub async fn publish<E: Event + Serialize>(&self, event: E) {
        let type_id = TypeId::of::<E>();

        // Send to typed subscribers
        let channels = self.inner.channels.read().await;
        if let Some(sender) = channels.get(&type_id) {
            if let Some(tx) = sender.downcast_ref::<broadcast::Sender<E>>() {
                // Ignore send errors (no receivers)
                let _ = tx.send(event.clone());
            }
        }
        drop(channels);

        // Send to wildcard subscribers
        if let Ok(payload) = serde_json::to_value(&event) {
            let bus_event = BusEvent {
                event_type: E::event_type().to_string(),
                payload,
            };
            let _ = self.inner.wildcard.send(bus_event);
        }
    }

    /// Subscribe to events of type E.
    pub async fn subscribe<E: Event>(&self) -> broadcast::Receiver<E> {
        let type_id = TypeId::of::<E>();

        // Check if channel exists
        {
            let channels = self.inner.channels.read().await;
            if let Some(sender) = channels.get(&type_id) {
                if let Some(tx) = sender.downcast_ref::<broadcast::Sender<E>>() {
                    return tx.subscribe();
                }
            }
        }

        // Create new channel
        let mut channels = self.inner.channels.write().await;
        let (tx, rx) = broadcast::channel::<E>(DEFAULT_CAPACITY);
        channels.insert(type_id, Box::new(tx));
        rx
    }

    /// Subscribe to all events (wildcard).
    pub fn subscribe_all(&self) -> broadcast::Receiver<BusEvent> {
        self.inner.wildcard.subscribe()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Event Types
// ============================================================================

/// "Save all open editors" broadcast signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAll;

impl Event for SaveAll {
    fn event_type() -> &'static str {
        "snippets.save_all"
    }
}

/// "Discard all open editors" broadcast signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscardAll;

impl Event for DiscardAll {
    fn event_type() -> &'static str {
        "snippets.discard_all"
    }
}

/// Snippet persisted through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetUpdated {
    pub snippet_id: String,
}

impl Event for SnippetUpdated {
    fn event_type() -> &'static str {
        "snippet.updated"
    }
}

/// Snippet removed from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetDeleted {
    pub snippet_id: String,
}

impl Event for SnippetDeleted {
    fn event_type() -> &'static str {
        "snippet.deleted"
    }
}

/// Snippet copy count incremented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetCopied {
    pub snippet_id: String,
    pub copy_count: u32,
}

impl Event for SnippetCopied {
    fn event_type() -> &'static str {
        "snippet.copied"
    }
}

// ============================================================================
// Editor broadcast signals
// ============================================================================

/// A broadcast signal routed to an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    /// Commit pending edits.
    SaveAll,
    /// Throw pending edits away.
    DiscardAll,
}

/// Subscription to the save-all/discard-all broadcast signals.
///
/// Held by whoever drives an [`crate::EditSession`]; drop it at session
/// teardown to unsubscribe.
pub struct SignalSubscription {
    save: broadcast::Receiver<SaveAll>,
    discard: broadcast::Receiver<DiscardAll>,
}

impl SignalSubscription {
    /// Subscribe to both broadcast signals on the given bus.
    pub async fn new(bus: &Bus) -> Self {
        Self {
            save: bus.subscribe::<SaveAll>().await,
            discard: bus.subscribe::<DiscardAll>().await,
        }
    }

    /// Wait for the next signal.
    ///
    /// Lagged channels skip to the newest signal. Returns `None` once the
    /// bus has been dropped.
    pub async fn recv(&mut self) -> Option<EditorSignal> {
        use broadcast::error::RecvError;
        loop {
            tokio::select! {
                res = self.save.recv() => match res {
                    Ok(_) => return Some(EditorSignal::SaveAll),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => return None,
                },
                res = self.discard.recv() => match res {
                    Ok(_) => return Some(EditorSignal::DiscardAll),
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => return None,
                },
            }
        }
    }
}
