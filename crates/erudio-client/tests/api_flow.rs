mod common;

use std::sync::atomic::Ordering;

use erudio_client::commands::{chat, session, topics};
use erudio_client::{lock, AppEvent, ClientError};
use erudio_shared::types::{ActivityType, Role};

use common::{client_for, spawn_backend, TEST_JWT};

#[tokio::test]
async fn google_login_stores_token_and_user() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    let mut events = lock(&state).unwrap().events.subscribe();

    let user = session::google_login(&state, "good-google-token").await.unwrap();
    assert_eq!(user.id, "u-42");
    assert_eq!(user.name, "Ada Lovelace");
    assert!(session::is_authenticated(&state).unwrap());

    {
        let guard = lock(&state).unwrap();
        assert_eq!(guard.database.access_token().unwrap().as_deref(), Some(TEST_JWT));
        assert_eq!(guard.database.load_user().unwrap(), Some(user));
    }
    assert_eq!(
        events.recv().await.unwrap(),
        AppEvent::SessionChanged {
            authenticated: true
        }
    );
}

#[tokio::test]
async fn rejected_google_token_leaves_session_signed_out() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);

    let err = session::google_login(&state, "forged").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 401, .. }));
    assert!(!session::is_authenticated(&state).unwrap());
    assert!(lock(&state).unwrap().database.access_token().unwrap().is_none());
}

#[tokio::test]
async fn remote_chat_keeps_conversation_id() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();

    let chat_id = chat::create_new_chat(&state, Some("math"), Some("t2")).unwrap();
    let suggestion = chat::send_message_remote(&state, &chat_id, "How do I evaluate this limit?")
        .await
        .unwrap();
    assert_eq!(suggestion.as_deref(), Some("Factoring"));

    chat::send_message_remote(&state, &chat_id, "And after that?")
        .await
        .unwrap();

    let requests = backend.recorded.chat_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].conversation_id, None);
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[1].conversation_id.as_deref(), Some("conv-new"));
    // two earlier messages plus the new question
    assert_eq!(requests[1].messages.len(), 3);
    assert_eq!(requests[1].messages[1].role, Role::Assistant);

    let guard = lock(&state).unwrap();
    let convo = guard.chat(&chat_id).unwrap();
    assert_eq!(convo.conversation_id.as_deref(), Some("conv-new"));
    assert_eq!(convo.messages.len(), 4);
    assert_eq!(convo.messages[1].content, "Try factoring the numerator first.");
}

#[tokio::test]
async fn failed_remote_send_changes_nothing() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();
    backend.recorded.fail_chat.store(true, Ordering::SeqCst);

    let before = lock(&state).unwrap().chat("chat1").unwrap().clone();
    let err = chat::send_message_remote(&state, "chat1", "hello?")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 503, .. }));
    assert_eq!(lock(&state).unwrap().chat("chat1").unwrap(), &before);
}

#[tokio::test]
async fn history_sync_replaces_chat_activity() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();

    assert_eq!(chat::sync_chat_history(&state).await.unwrap(), 2);

    let guard = lock(&state).unwrap();
    let feed = &guard.recent_activity;
    assert_eq!(feed.len(), 4);
    assert_eq!(feed[0].id, "conv-a");
    assert_eq!(feed[0].ref_id, "conv-a");
    assert_eq!(feed[0].timestamp, "2 hours ago");
    assert_eq!(feed[1].timestamp, "3 days ago");
    let chats = feed.iter().filter(|a| a.kind == ActivityType::Chat).count();
    assert_eq!(chats, 2);
    assert!(feed.iter().all(|a| a.id != "a1"));
}

#[tokio::test]
async fn history_sync_without_auth_header_fails_cleanly() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    lock(&state).unwrap().database.save_access_token("stale").unwrap();

    let before = lock(&state).unwrap().recent_activity.clone();
    assert!(chat::sync_chat_history(&state).await.is_err());
    assert_eq!(lock(&state).unwrap().recent_activity, before);
}

#[tokio::test]
async fn topic_content_is_generated_once_then_cached() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);

    let first = topics::load_topic_content(&state, "t2").await.unwrap();
    assert_eq!(first.introduction, "An introduction to Calculus I: Limits.");
    let second = topics::load_topic_content(&state, "t2").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(backend.recorded.content_calls.load(Ordering::SeqCst), 1);

    topics::refresh_topic_content(&state, "t2").unwrap();
    topics::load_topic_content(&state, "t2").await.unwrap();
    assert_eq!(backend.recorded.content_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn generated_quiz_feeds_completion() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();

    let questions = topics::generate_quiz(&state, "t5").await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].correct_index, 2);

    let result = topics::complete_quiz(&state, "t5", &questions, &[2, 1]).unwrap();
    assert_eq!(result.score, 100);
    let guard = lock(&state).unwrap();
    assert_eq!(guard.topic("t5").unwrap().score, Some(100));
}

#[tokio::test]
async fn add_to_plan_sends_conversation_id() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();

    let chat_id = chat::create_new_chat(&state, None, None).unwrap();
    chat::send_message_remote(&state, &chat_id, "limits?").await.unwrap();

    let message = chat::add_suggested_topic_to_plan(&state, "Factoring", Some(&chat_id))
        .await
        .unwrap();
    assert_eq!(message, "Added Factoring to your plan");

    let sent = backend.recorded.plan_requests.lock().unwrap().clone();
    assert_eq!(sent[0].conversation_id.as_deref(), Some("conv-new"));
}

#[tokio::test]
async fn deleting_a_remote_chat_calls_backend() {
    let backend = spawn_backend().await;
    let (_dir, state) = client_for(&backend);
    session::google_login(&state, "good-google-token").await.unwrap();

    let chat_id = chat::create_new_chat(&state, None, None).unwrap();
    chat::send_message_remote(&state, &chat_id, "hi").await.unwrap();
    chat::delete_chat(&state, &chat_id).await.unwrap();

    assert_eq!(*backend.recorded.deleted.lock().unwrap(), vec!["conv-new".to_string()]);
    assert!(lock(&state).unwrap().chat(&chat_id).is_err());
}
