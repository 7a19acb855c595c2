//! In-process stand-in for the Erudio backend.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use erudio_client::{AppState, ClientConfig, SharedState};
use erudio_shared::protocol::{
    AddToPlanRequest, AddToPlanResponse, AuthResponse, AuthUser, ChatRequest, ChatResponse,
    ConversationSummary, ExampleProblem, GoogleTokenRequest, TopicContent, TopicRequest,
};
use serde_json::json;
use tempfile::TempDir;

pub const TEST_JWT: &str = "test-jwt";

#[derive(Default)]
pub struct Recorded {
    pub fail_chat: AtomicBool,
    pub content_calls: AtomicUsize,
    pub chat_requests: Mutex<Vec<ChatRequest>>,
    pub deleted: Mutex<Vec<String>>,
    pub plan_requests: Mutex<Vec<AddToPlanRequest>>,
}

pub struct MockBackend {
    pub base_url: String,
    pub recorded: Arc<Recorded>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_JWT}"))
        .unwrap_or(false)
}

async fn google(Json(req): Json<GoogleTokenRequest>) -> Response {
    if req.token != "good-google-token" {
        return (StatusCode::UNAUTHORIZED, "invalid Google token").into_response();
    }
    Json(AuthResponse {
        access_token: TEST_JWT.into(),
        token_type: "bearer".into(),
        user: AuthUser {
            id: "u-42".into(),
            email: "ada@example.com".into(),
            name: "Ada Lovelace".into(),
            avatar_url: None,
        },
    })
    .into_response()
}

async fn history(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let now = Utc::now();
    Json(vec![
        ConversationSummary {
            id: "conv-a".into(),
            title: "Limits and continuity".into(),
            created_at: now - chrono::Duration::hours(2),
        },
        ConversationSummary {
            id: "conv-b".into(),
            title: "Newton's second law".into(),
            created_at: now - chrono::Duration::days(3),
        },
    ])
    .into_response()
}

async fn chat(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if rec.fail_chat.load(Ordering::SeqCst) {
        return (StatusCode::SERVICE_UNAVAILABLE, "model unavailable").into_response();
    }
    let conversation_id = req.conversation_id.clone().unwrap_or_else(|| "conv-new".into());
    rec.chat_requests.lock().unwrap().push(req);
    Json(ChatResponse {
        reply_text: "Try factoring the numerator first.".into(),
        suggested_topic: Some("Factoring".into()),
        conversation_id,
    })
    .into_response()
}

async fn quiz(headers: HeaderMap, Json(req): Json<TopicRequest>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "questions": [
            {
                "question": format!("What is central to {}?", req.topic_name),
                "options": ["a", "b", "c", "d"],
                "correct": 2
            },
            {
                "question": "Pick b",
                "options": ["a", "b"],
                "correct_index": 1,
                "explanation": "It says so."
            }
        ]
    }))
    .into_response()
}

async fn topic_content(
    State(rec): State<Arc<Recorded>>,
    Json(req): Json<TopicRequest>,
) -> Json<TopicContent> {
    rec.content_calls.fetch_add(1, Ordering::SeqCst);
    Json(TopicContent {
        introduction: format!("An introduction to {}.", req.topic_name),
        key_concepts: vec!["approach".into(), "one-sided limits".into()],
        formulas: vec!["lim x->a f(x) = L".into()],
        example_problem: ExampleProblem {
            question: "lim x->2 (x^2 - 4)/(x - 2)".into(),
            solution: "4".into(),
        },
    })
}

async fn add_to_plan(
    State(rec): State<Arc<Recorded>>,
    Json(req): Json<AddToPlanRequest>,
) -> Json<AddToPlanResponse> {
    let message = format!("Added {} to your plan", req.topic_name);
    rec.plan_requests.lock().unwrap().push(req);
    Json(AddToPlanResponse { message })
}

async fn delete_conversation(
    State(rec): State<Arc<Recorded>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    rec.deleted.lock().unwrap().push(id);
    StatusCode::NO_CONTENT
}

pub async fn spawn_backend() -> MockBackend {
    let recorded = Arc::new(Recorded::default());
    let app = Router::new()
        .route("/auth/google", post(google))
        .route("/chat", post(chat))
        .route("/chat/history", get(history))
        .route("/chat/generate-quiz", post(quiz))
        .route("/chat/generate-topic-content", post(topic_content))
        .route("/chat/add-to-plan", post(add_to_plan))
        .route("/chat/:id", delete(delete_conversation))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        recorded,
    }
}

/// A seeded client state on a fresh database, talking to `backend`.
pub fn client_for(backend: &MockBackend) -> (TempDir, SharedState) {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig {
        data_dir: Some(dir.path().to_path_buf()),
        plan_generation_delay: Duration::ZERO,
        ..ClientConfig::default()
    }
    .with_api_url(&backend.base_url);
    let state = AppState::open(config).unwrap().into_shared();
    (dir, state)
}
