//! Change notifications for views layered on top of the state.
//!
//! Every mutating command emits one [`AppEvent`]; a view subscribes and
//! re-reads whatever the event names.

use serde::Serialize;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum AppEvent {
    SessionChanged { authenticated: bool },
    TimetableChanged,
    TopicUpdated { topic_id: String },
    ChatUpdated { chat_id: String },
    ChatRemoved { chat_id: String },
    NotificationsChanged,
    ActivityChanged,
}

#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: AppEvent) {
        // no subscribers is normal when nothing is rendering
        if let Err(e) = self.tx.send(event) {
            tracing::trace!(event = ?e.0, "no event subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
