//! Per-topic generated-content cache and free-text notes.

use erudio_shared::constants::{KEY_TOPIC_CONTENT_PREFIX, KEY_TOPIC_NOTES_PREFIX};
use erudio_shared::protocol::TopicContent;

use crate::database::Database;
use crate::error::Result;

fn content_key(topic_id: &str) -> String {
    format!("{KEY_TOPIC_CONTENT_PREFIX}{topic_id}")
}

fn notes_key(topic_id: &str) -> String {
    format!("{KEY_TOPIC_NOTES_PREFIX}{topic_id}")
}

impl Database {
    /// Cached content for a topic. A corrupt cache entry reads as absent so
    /// the caller regenerates it.
    pub fn cached_topic_content(&self, topic_id: &str) -> Result<Option<TopicContent>> {
        self.get_json(&content_key(topic_id))
    }

    pub fn cache_topic_content(&self, topic_id: &str, content: &TopicContent) -> Result<()> {
        self.set_json(&content_key(topic_id), content)
    }

    pub fn invalidate_topic_content(&self, topic_id: &str) -> Result<bool> {
        self.remove(&content_key(topic_id))
    }

    /// Saved notes, empty when none were written.
    pub fn topic_notes(&self, topic_id: &str) -> Result<String> {
        Ok(self.get_raw(&notes_key(topic_id))?.unwrap_or_default())
    }

    pub fn save_topic_notes(&self, topic_id: &str, notes: &str) -> Result<()> {
        self.set_raw(&notes_key(topic_id), notes)
    }
}
