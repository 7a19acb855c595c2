//! Topic progress, quizzes, generated learning material, notes and study
//! time tracking.

use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use erudio_shared::constants::MAX_SCORE;
use erudio_shared::ids::unique_id;
use erudio_shared::protocol::{QuizQuestion, TopicContent};
use erudio_shared::types::{ActivityType, QuizResult, RecentActivity, Topic};
use tracing::{debug, error, info, warn};

use crate::error::{ClientError, Result};
use crate::events::AppEvent;
use crate::state::{lock, SharedState};

fn clamp_score(score: u32) -> u8 {
    score.min(u32::from(MAX_SCORE)) as u8
}

/// Record a quiz score for a topic. 80 and above is Mastered, anything else
/// In progress. Scores above 100 are clamped.
pub fn update_topic_status(state: &SharedState, topic_id: &str, score: u32) -> Result<Topic> {
    let score = clamp_score(score);

    let mut guard = lock(state)?;
    let topic = guard
        .topics
        .iter_mut()
        .find(|t| t.id == topic_id)
        .ok_or_else(|| ClientError::not_found("Topic", topic_id))?;
    topic.apply_score(score);
    let updated = topic.clone();

    guard.emit(AppEvent::TopicUpdated {
        topic_id: topic_id.to_string(),
    });
    info!(topic = %updated.name, score, status = %updated.status, "Topic status updated");
    Ok(updated)
}

/// Score a finished quiz, update the topic and log the attempt.
///
/// `answers[i]` is the option index chosen for `questions[i]`; unanswered
/// trailing questions count as wrong.
pub fn complete_quiz(
    state: &SharedState,
    topic_id: &str,
    questions: &[QuizQuestion],
    answers: &[usize],
) -> Result<QuizResult> {
    if questions.is_empty() {
        return Err(ClientError::InvalidInput("quiz has no questions".into()));
    }

    let total = questions.len();
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.correct_index == **a)
        .count();
    let score = ((correct as f64 / total as f64) * 100.0).round() as u32;

    let mut guard = lock(state)?;
    let mut topic = guard.topic(topic_id)?.clone();
    topic.apply_score(clamp_score(score));

    let result = QuizResult {
        topic_id: topic_id.to_string(),
        score: topic.score.unwrap_or_default(),
        correct,
        total,
        taken_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    // persist before touching memory
    guard.database.append_quiz_result(&result)?;

    let subject = guard
        .subject(&topic.subject_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| topic.subject_id.clone());
    let id = unique_id("quiz", |c| guard.recent_activity.iter().any(|a| a.id == c));
    let activity = RecentActivity {
        id,
        kind: ActivityType::Quiz,
        title: format!("{subject} – {}", topic.name),
        subtitle: Some(format!("Score: {}%", result.score)),
        timestamp: "just now".into(),
        ref_id: topic_id.to_string(),
    };

    if let Some(slot) = guard.topics.iter_mut().find(|t| t.id == topic_id) {
        *slot = topic.clone();
    }
    guard.recent_activity.insert(0, activity);
    guard.emit(AppEvent::TopicUpdated {
        topic_id: topic_id.to_string(),
    });
    guard.emit(AppEvent::ActivityChanged);
    info!(topic = %topic.name, correct, total, score = result.score, "Quiz completed");
    Ok(result)
}

pub fn quiz_history(state: &SharedState) -> Result<Vec<QuizResult>> {
    Ok(lock(state)?.database.quiz_history()?)
}

/// Generate a fresh quiz for a topic through the backend.
pub async fn generate_quiz(state: &SharedState, topic_id: &str) -> Result<Vec<QuizQuestion>> {
    let (api, token, name) = {
        let guard = lock(state)?;
        let name = guard.topic(topic_id)?.name.clone();
        (guard.api.clone(), guard.token(), name)
    };

    let questions = api.generate_quiz(token.as_deref(), &name).await.map_err(|e| {
        error!(topic = %name, error = %e, "Quiz generation failed");
        e
    })?;
    debug!(topic = %name, questions = questions.len(), "Quiz generated");
    Ok(questions)
}

/// Learning material for a topic: the cached copy when there is one,
/// otherwise generated by the backend and cached.
pub async fn load_topic_content(state: &SharedState, topic_id: &str) -> Result<TopicContent> {
    let (api, token, name) = {
        let guard = lock(state)?;
        let name = guard.topic(topic_id)?.name.clone();
        if let Some(content) = guard.database.cached_topic_content(topic_id)? {
            debug!(topic = %name, "Topic content served from cache");
            return Ok(content);
        }
        (guard.api.clone(), guard.token(), name)
    };

    let content = api
        .generate_topic_content(token.as_deref(), &name)
        .await
        .map_err(|e| {
            error!(topic = %name, error = %e, "Error fetching topic content");
            e
        })?;

    let guard = lock(state)?;
    if let Err(e) = guard.database.cache_topic_content(topic_id, &content) {
        warn!(topic = %name, error = %e, "could not cache topic content");
    }
    info!(topic = %name, "Topic content generated");
    Ok(content)
}

/// Drop the cached material so the next load regenerates it.
pub fn refresh_topic_content(state: &SharedState, topic_id: &str) -> Result<bool> {
    Ok(lock(state)?.database.invalidate_topic_content(topic_id)?)
}

pub fn topic_notes(state: &SharedState, topic_id: &str) -> Result<String> {
    Ok(lock(state)?.database.topic_notes(topic_id)?)
}

pub fn save_topic_notes(state: &SharedState, topic_id: &str, notes: &str) -> Result<()> {
    let guard = lock(state)?;
    guard.topic(topic_id)?;
    guard.database.save_topic_notes(topic_id, notes)?;
    info!(topic = topic_id, "Notes saved");
    Ok(())
}

/// Add a study session to the running total. Returns the new total in
/// seconds.
pub fn record_study_time(state: &SharedState, elapsed: Duration) -> Result<u64> {
    let total = lock(state)?.database.add_study_seconds(elapsed.as_secs())?;
    debug!(added = elapsed.as_secs(), total, "Study time recorded");
    Ok(total)
}

pub fn total_study_seconds(state: &SharedState) -> Result<u64> {
    Ok(lock(state)?.database.study_seconds()?)
}

/// Measures time spent on a topic page.
#[derive(Debug)]
pub struct StudyTimer {
    started: Instant,
}

impl StudyTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the timer and add the elapsed time to the stored total.
    pub fn stop(self, state: &SharedState) -> Result<u64> {
        record_study_time(state, self.elapsed())
    }
}
