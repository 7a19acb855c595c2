//! AI chat sessions.
//!
//! A session lives only in memory. [`send_message`] answers locally with a
//! canned reply; [`send_message_remote`] asks the backend and remembers the
//! conversation id it hands back so later turns continue the same thread.

use chrono::{SecondsFormat, Utc};
use erudio_shared::constants::{DEFAULT_CHAT_TITLE, OFFLINE_ASSISTANT_REPLY};
use erudio_shared::ids::unique_id;
use erudio_shared::protocol::{AddToPlanRequest, ChatRequest, WireChatMessage};
use erudio_shared::time::relative_label;
use erudio_shared::types::{ActivityType, ChatMessage, ChatSession, RecentActivity, Role};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::events::AppEvent;
use crate::state::{lock, AppState, SharedState};

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Message id unique within `chat`, also avoiding ids already handed out in
/// the same batch.
fn next_message_id(chat: &ChatSession, pending: &[String]) -> String {
    unique_id("msg", |c| {
        pending.iter().any(|p| p == c) || chat.messages.iter().any(|m| m.id == c)
    })
}

fn append_exchange(chat: &mut ChatSession, user_text: &str, reply_text: &str) {
    let user_id = next_message_id(chat, &[]);
    let reply_id = next_message_id(chat, std::slice::from_ref(&user_id));
    let at = now_rfc3339();

    chat.messages.push(ChatMessage {
        id: user_id,
        role: Role::User,
        content: user_text.to_string(),
        timestamp: at.clone(),
    });
    chat.messages.push(ChatMessage {
        id: reply_id,
        role: Role::Assistant,
        content: reply_text.to_string(),
        timestamp: at,
    });
}

/// Start a new session, placed first in the history. Returns its id.
pub fn create_new_chat(
    state: &SharedState,
    subject_id: Option<&str>,
    topic_id: Option<&str>,
) -> Result<String> {
    let mut guard = lock(state)?;

    let title = topic_id
        .and_then(|id| guard.topics.iter().find(|t| t.id == id))
        .map(|t| format!("Chat about {}", t.name))
        .unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string());
    let id = unique_id("chat", |c| guard.chat_history.iter().any(|s| s.id == c));

    guard.chat_history.insert(
        0,
        ChatSession {
            id: id.clone(),
            title,
            timestamp: now_rfc3339(),
            subject_id: subject_id.map(str::to_string),
            topic_id: topic_id.map(str::to_string),
            conversation_id: None,
            messages: Vec::new(),
        },
    );
    guard.emit(AppEvent::ChatUpdated {
        chat_id: id.clone(),
    });
    info!(chat = %id, "Chat created");
    Ok(id)
}

/// Append the user's message and the offline assistant reply.
pub fn send_message(state: &SharedState, chat_id: &str, content: &str) -> Result<()> {
    let mut guard = lock(state)?;
    let chat = guard.chat_mut(chat_id)?;
    append_exchange(chat, content, OFFLINE_ASSISTANT_REPLY);
    guard.emit(AppEvent::ChatUpdated {
        chat_id: chat_id.to_string(),
    });
    Ok(())
}

/// Send the conversation to the backend and append its reply.
///
/// Returns the topic the assistant suggests adding to the plan, if any. On
/// failure the session is left exactly as it was.
pub async fn send_message_remote(
    state: &SharedState,
    chat_id: &str,
    content: &str,
) -> Result<Option<String>> {
    let (api, token, request) = {
        let guard = lock(state)?;
        let chat = guard.chat(chat_id)?;
        let mut messages: Vec<WireChatMessage> = chat
            .messages
            .iter()
            .map(|m| WireChatMessage {
                role: m.role,
                content: m.content.clone(),
            })
            .collect();
        messages.push(WireChatMessage {
            role: Role::User,
            content: content.to_string(),
        });
        let request = ChatRequest {
            messages,
            conversation_id: chat.conversation_id.clone(),
        };
        (guard.api.clone(), guard.token(), request)
    };

    let resp = api.chat(token.as_deref(), &request).await.map_err(|e| {
        error!(chat = %chat_id, error = %e, "Chat request failed");
        e
    })?;

    let mut guard = lock(state)?;
    let chat = guard.chat_mut(chat_id)?;
    append_exchange(chat, content, &resp.reply_text);
    chat.conversation_id = Some(resp.conversation_id);
    guard.emit(AppEvent::ChatUpdated {
        chat_id: chat_id.to_string(),
    });
    Ok(resp.suggested_topic)
}

/// Ask the backend to add `topic_name` to the study plan. Returns the
/// backend's confirmation message.
pub async fn add_suggested_topic_to_plan(
    state: &SharedState,
    topic_name: &str,
    chat_id: Option<&str>,
) -> Result<String> {
    let (api, token, conversation_id) = {
        let guard = lock(state)?;
        let conversation_id = match chat_id {
            Some(id) => guard.chat(id)?.conversation_id.clone(),
            None => None,
        };
        (guard.api.clone(), guard.token(), conversation_id)
    };

    let req = AddToPlanRequest {
        topic_name: topic_name.to_string(),
        conversation_id,
    };
    let resp = api.add_to_plan(token.as_deref(), &req).await.map_err(|e| {
        error!(topic = topic_name, error = %e, "Adding topic to plan failed");
        e
    })?;

    info!(topic = topic_name, "Topic added to plan");
    Ok(resp.message)
}

/// Remove a session. Sessions known to the backend are deleted there first;
/// if that fails the local copy is kept.
pub async fn delete_chat(state: &SharedState, chat_id: &str) -> Result<()> {
    let (api, token, conversation_id) = {
        let guard = lock(state)?;
        let conversation_id = guard.chat(chat_id)?.conversation_id.clone();
        (guard.api.clone(), guard.token(), conversation_id)
    };

    if let Some(conversation_id) = &conversation_id {
        api.delete_conversation(token.as_deref(), conversation_id)
            .await
            .map_err(|e| {
                error!(chat = %chat_id, error = %e, "Deleting remote conversation failed");
                e
            })?;
    }

    let mut guard = lock(state)?;
    guard.chat_history.retain(|c| c.id != chat_id);
    let refs: Vec<&str> = std::iter::once(chat_id)
        .chain(conversation_id.as_deref())
        .collect();
    guard
        .recent_activity
        .retain(|a| a.kind != ActivityType::Chat || !refs.contains(&a.ref_id.as_str()));
    guard.emit(AppEvent::ChatRemoved {
        chat_id: chat_id.to_string(),
    });
    guard.emit(AppEvent::ActivityChanged);
    info!(chat = %chat_id, "Chat deleted");
    Ok(())
}

fn replace_chat_activity(guard: &mut AppState, entries: Vec<RecentActivity>) {
    let others: Vec<RecentActivity> = guard
        .recent_activity
        .drain(..)
        .filter(|a| a.kind != ActivityType::Chat)
        .collect();
    guard.recent_activity = entries;
    guard.recent_activity.extend(others);
}

/// Pull the user's conversations from the backend into recent activity.
///
/// Every Chat entry is replaced by one entry per remote conversation. Without
/// a stored token nothing is fetched and `0` is returned.
pub async fn sync_chat_history(state: &SharedState) -> Result<usize> {
    let (api, token) = {
        let guard = lock(state)?;
        (guard.api.clone(), guard.token())
    };
    let Some(token) = token else {
        warn!("No access token, skipping chat history sync");
        return Ok(0);
    };

    let conversations = api.chat_history(Some(&token)).await.map_err(|e| {
        error!(error = %e, "Error fetching chat history");
        e
    })?;

    let now = Utc::now();
    let entries: Vec<RecentActivity> = conversations
        .into_iter()
        .map(|conv| RecentActivity {
            id: conv.id.clone(),
            kind: ActivityType::Chat,
            title: conv.title,
            subtitle: None,
            timestamp: relative_label(conv.created_at, now),
            ref_id: conv.id,
        })
        .collect();
    let count = entries.len();

    let mut guard = lock(state)?;
    replace_chat_activity(&mut guard, entries);
    guard.emit(AppEvent::ActivityChanged);
    info!(conversations = count, "Chat history synced");
    Ok(count)
}

pub fn chat_sessions(state: &SharedState) -> Result<Vec<ChatSession>> {
    Ok(lock(state)?.chat_history.clone())
}
