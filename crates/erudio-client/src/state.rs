//! Application state shared across all commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` so that every command
//! can reach it. It is the single owner of the in-memory study collections
//! for the lifetime of the process.

use std::sync::{Arc, Mutex, MutexGuard};

use erudio_shared::seed;
use erudio_shared::types::{
    ChatSession, Exam, Notification, RecentActivity, Subject, TimeBlock, Topic, User,
};
use erudio_store::Database;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::events::{AppEvent, EventBus};

pub type SharedState = Arc<Mutex<AppState>>;

/// Manual edits remembered for undo.
const UNDO_LIMIT: usize = 20;

/// What a manual timetable edit replaced or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableEdit {
    Replaced(TimeBlock),
    Deleted { index: usize, block: TimeBlock },
}

/// Central application state.
pub struct AppState {
    /// Signed-in user. `None` until login, signup or a restored session.
    pub user: Option<User>,
    pub is_authenticated: bool,

    pub subjects: Vec<Subject>,
    pub topics: Vec<Topic>,
    pub timetable: Vec<TimeBlock>,
    /// Newest first.
    pub recent_activity: Vec<RecentActivity>,
    pub notifications: Vec<Notification>,
    pub exams: Vec<Exam>,
    /// Newest first.
    pub chat_history: Vec<ChatSession>,

    /// Inverse of each manual timetable edit, most recent last.
    pub timetable_undo: Vec<TimetableEdit>,

    /// Local key-value storage.
    pub database: Database,
    pub api: ApiClient,
    pub events: EventBus,
    pub config: ClientConfig,
}

impl AppState {
    /// Build a state seeded with the initial datasets.
    pub fn new(config: ClientConfig, database: Database) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            subjects: seed::subjects(),
            topics: seed::topics(),
            timetable: seed::timetable(),
            recent_activity: seed::recent_activity(),
            notifications: seed::notifications(),
            exams: seed::exams(),
            chat_history: seed::chat_history(),
            timetable_undo: Vec::new(),
            database,
            api: ApiClient::new(&config.api_base_url),
            events: EventBus::new(),
            config,
        }
    }

    /// Open the configured database and build a seeded state on top of it.
    pub fn open(config: ClientConfig) -> Result<Self> {
        let database = match &config.data_dir {
            Some(dir) => Database::open_in_dir(dir)?,
            None => Database::new()?,
        };
        Ok(Self::new(config, database))
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn topic(&self, topic_id: &str) -> Result<&Topic> {
        self.topics
            .iter()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| ClientError::not_found("Topic", topic_id))
    }

    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    pub fn chat(&self, chat_id: &str) -> Result<&ChatSession> {
        self.chat_history
            .iter()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| ClientError::not_found("Chat", chat_id))
    }

    pub(crate) fn chat_mut(&mut self, chat_id: &str) -> Result<&mut ChatSession> {
        self.chat_history
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| ClientError::not_found("Chat", chat_id))
    }

    /// Stored bearer token, if any. A storage failure is logged and treated
    /// as no token.
    pub(crate) fn token(&self) -> Option<String> {
        match self.database.access_token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "could not read access token");
                None
            }
        }
    }

    /// Remember an edit for undo, forgetting the oldest beyond the limit.
    pub(crate) fn push_undo(&mut self, edit: TimetableEdit) {
        if self.timetable_undo.len() == UNDO_LIMIT {
            self.timetable_undo.remove(0);
        }
        self.timetable_undo.push(edit);
    }

    pub(crate) fn emit(&self, event: AppEvent) {
        self.events.emit(event);
    }
}

/// Lock the shared state.
pub fn lock(state: &SharedState) -> Result<MutexGuard<'_, AppState>> {
    state.lock().map_err(|_| ClientError::LockPoisoned)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use super::*;

    /// A seeded state on a throwaway database. Keep the directory alive for
    /// the duration of the test.
    pub fn test_state() -> (tempfile::TempDir, SharedState) {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            data_dir: Some(dir.path().to_path_buf()),
            plan_generation_delay: Duration::ZERO,
            ..ClientConfig::default()
        };
        let state = AppState::open(config).unwrap().into_shared();
        (dir, state)
    }
}
