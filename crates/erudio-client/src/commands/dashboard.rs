//! Read-only summaries for the home screen.

use chrono::{Datelike, NaiveDate};
use erudio_shared::constants::{PRIORITY_BANNER_LIMIT, TODAYS_PLAN_LIMIT};
use erudio_shared::time::{days_until, weekday_label};
use erudio_shared::types::{
    Exam, Notification, RecentActivity, TimeBlock, Topic, TopicStatus, User,
};
use serde::Serialize;

use crate::error::Result;
use crate::state::{lock, AppState, SharedState};

const RECENT_ACTIVITY_LIMIT: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MasteryBreakdown {
    pub mastered: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl MasteryBreakdown {
    fn from_topics(topics: &[Topic]) -> Self {
        topics.iter().fold(Self::default(), |mut acc, t| {
            match t.status {
                TopicStatus::Mastered => acc.mastered += 1,
                TopicStatus::InProgress => acc.in_progress += 1,
                TopicStatus::NotStarted => acc.not_started += 1,
            }
            acc
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingExam {
    pub exam: Exam,
    pub days_remaining: i64,
}

impl UpcomingExam {
    pub fn label(&self) -> String {
        match self.days_remaining {
            0 => "Today!".to_string(),
            1 => "in 1 day".to_string(),
            n => format!("in {n} days"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub user: Option<User>,
    pub day: String,
    pub todays_plan: Vec<TimeBlock>,
    pub priority_notifications: Vec<Notification>,
    pub next_exam: Option<UpcomingExam>,
    pub active_topics: Vec<Topic>,
    pub recent_activity: Vec<RecentActivity>,
    pub mastery: MasteryBreakdown,
    pub unread_notifications: usize,
    pub study_seconds: u64,
}

fn todays_plan(state: &AppState, day: &str) -> Vec<TimeBlock> {
    let mut blocks: Vec<TimeBlock> = state
        .timetable
        .iter()
        .filter(|b| b.day == day)
        .cloned()
        .collect();
    blocks.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    blocks.truncate(TODAYS_PLAN_LIMIT);
    blocks
}

/// The soonest exam that has not passed yet. Exams with unreadable dates are
/// skipped.
fn next_exam(exams: &[Exam], today: NaiveDate) -> Option<UpcomingExam> {
    exams
        .iter()
        .filter_map(|exam| match days_until(&exam.date, today) {
            Ok(days) if days >= 0 => Some(UpcomingExam {
                exam: exam.clone(),
                days_remaining: days,
            }),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(exam = %exam.id, error = %e, "skipping exam with bad date");
                None
            }
        })
        .min_by_key(|u| u.days_remaining)
}

/// Summarise the state as of `today`.
pub fn dashboard(state: &SharedState, today: NaiveDate) -> Result<DashboardSnapshot> {
    let guard = lock(state)?;
    let day = weekday_label(today.weekday());

    let study_seconds = guard.database.study_seconds().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read study time");
        0
    });

    Ok(DashboardSnapshot {
        user: guard.user.clone(),
        day: day.to_string(),
        todays_plan: todays_plan(&guard, day),
        priority_notifications: guard
            .notifications
            .iter()
            .filter(|n| !n.read && n.is_high_priority())
            .take(PRIORITY_BANNER_LIMIT)
            .cloned()
            .collect(),
        next_exam: next_exam(&guard.exams, today),
        active_topics: guard
            .topics
            .iter()
            .filter(|t| t.status != TopicStatus::NotStarted)
            .cloned()
            .collect(),
        recent_activity: guard
            .recent_activity
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect(),
        mastery: MasteryBreakdown::from_topics(&guard.topics),
        unread_notifications: guard.notifications.iter().filter(|n| !n.read).count(),
        study_seconds,
    })
}
