//! Request and response bodies exchanged with the Erudio backend.
//!
//! Field names are snake_case as the backend expects them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Body of `POST /auth/google`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTokenRequest {
    /// Opaque Google identity token
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AuthUser,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /chat`. A missing conversation id asks the backend to open
/// a new conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<WireChatMessage>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply_text: String,
    #[serde(default)]
    pub suggested_topic: Option<String>,
    pub conversation_id: String,
}

/// One entry of `GET /chat/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /chat/add-to-plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToPlanRequest {
    pub topic_name: String,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToPlanResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Generated study material
// ---------------------------------------------------------------------------

/// Body of `POST /chat/generate-quiz` and `POST /chat/generate-topic-content`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer
    #[serde(alias = "correct")]
    pub correct_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleProblem {
    pub question: String,
    pub solution: String,
}

/// Generated learning material for one topic; also the cached form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicContent {
    pub introduction: String,
    #[serde(default)]
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub formulas: Vec<String>,
    pub example_problem: ExampleProblem,
}
