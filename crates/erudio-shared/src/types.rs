//! Study entities held in memory by the client and persisted as JSON.
//!
//! Field names serialize in camelCase and enumerations with their display
//! labels so that records written by earlier app versions keep loading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MASTERY_THRESHOLD, MAX_SCORE};
use crate::error::SharedError;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    School,
    #[default]
    College,
    Other,
}

impl FromStr for EducationLevel {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "school" => Ok(Self::School),
            "college" => Ok(Self::College),
            "other" => Ok(Self::Other),
            _ => Err(SharedError::UnknownVariant {
                kind: "education level",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub level: EducationLevel,
    pub streak: u32,
}

// ---------------------------------------------------------------------------
// Subjects and topics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// 0-100
    pub progress: u8,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicStatus {
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    Mastered,
}

impl TopicStatus {
    /// Status implied by a quiz score.
    pub fn from_score(score: u8) -> Self {
        if score >= MASTERY_THRESHOLD {
            Self::Mastered
        } else {
            Self::InProgress
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Mastered => "Mastered",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub subject_id: String,
    pub name: String,
    pub status: TopicStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// ISO date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_revised: Option<String>,
    /// ISO date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_remedial_video: Option<bool>,
}

impl Topic {
    /// Record a quiz score and the status it implies. Scores above 100 are
    /// clamped.
    pub fn apply_score(&mut self, score: u8) {
        let score = score.min(MAX_SCORE);
        self.score = Some(score);
        self.status = TopicStatus::from_score(score);
    }
}

// ---------------------------------------------------------------------------
// Timetable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    Class,
    Study,
    Revision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    /// Day-of-week label, e.g. "Monday"
    pub day: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
}

impl TimeBlock {
    /// Fixed blocks (school classes) cannot be edited.
    pub fn is_fixed(&self) -> bool {
        self.is_fixed.unwrap_or(false)
    }

    /// Check that both ends are well-formed HH:MM times.
    pub fn validate_times(&self) -> Result<(), SharedError> {
        crate::time::parse_hhmm(&self.start_time)?;
        crate::time::parse_hhmm(&self.end_time)?;
        Ok(())
    }
}

/// Options collected by the plan-generation wizard. Accepted for API
/// compatibility; plan generation does not read them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanPreferences {
    #[serde(default)]
    pub study_hours_per_day: Option<u8>,
    #[serde(default)]
    pub preferred_days: Vec<String>,
    #[serde(default)]
    pub focus_subject_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// RFC 3339
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    /// RFC 3339 creation time
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    /// Backend conversation id, assigned on the first remote completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    StudyReminder,
    WeeklyRevision,
    SuggestedRevision,
    ScheduledRevision,
    RemedialContent,
    PlanUpdate,
    ExamAlert,
    Achievement,
    ChatNotes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Timetable,
    Revision,
    Topic,
    Quiz,
    Video,
    Analytics,
    Chat,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Display label such as "1 hour ago"
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

impl Notification {
    pub fn is_high_priority(&self) -> bool {
        self.priority == Some(Priority::High)
    }
}

// ---------------------------------------------------------------------------
// Activity and exams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Chat,
    Quiz,
    Video,
    Revision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Display label such as "Yesterday, 4:30 PM"
    pub timestamp: String,
    /// Id of the chat, topic or quiz result this entry points at
    pub ref_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    /// YYYY-MM-DD
    pub date: String,
    pub importance: Importance,
}

// ---------------------------------------------------------------------------
// Quiz results
// ---------------------------------------------------------------------------

/// One finished quiz attempt, kept in the persisted quiz history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub topic_id: String,
    pub score: u8,
    pub correct: usize,
    pub total: usize,
    /// RFC 3339
    pub taken_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_score_threshold() {
        assert_eq!(TopicStatus::from_score(80), TopicStatus::Mastered);
        assert_eq!(TopicStatus::from_score(79), TopicStatus::InProgress);
        assert_eq!(TopicStatus::from_score(0), TopicStatus::InProgress);
    }

    #[test]
    fn apply_score_clamps() {
        let mut topic = Topic {
            id: "t".into(),
            subject_id: "s".into(),
            name: "Limits".into(),
            status: TopicStatus::NotStarted,
            exam_relevance: None,
            score: None,
            last_revised: None,
            next_revision: None,
            has_remedial_video: None,
        };
        topic.apply_score(250);
        assert_eq!(topic.score, Some(100));
        assert_eq!(topic.status, TopicStatus::Mastered);
    }

    #[test]
    fn enum_labels_on_the_wire() {
        let json = serde_json::to_string(&TopicStatus::NotStarted).unwrap();
        assert_eq!(json, "\"Not started\"");
        let json = serde_json::to_string(&NotificationType::ChatNotes).unwrap();
        assert_eq!(json, "\"chat_notes\"");
    }

    #[test]
    fn time_block_uses_type_field() {
        let json = r#"{"id":"b","day":"Monday","startTime":"09:00","endTime":"10:00","type":"Class","title":"Math","isFixed":true}"#;
        let block: TimeBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Class);
        assert!(block.is_fixed());
        assert!(block.subject_id.is_none());
    }

    #[test]
    fn education_level_parse() {
        assert_eq!("school".parse::<EducationLevel>(), Ok(EducationLevel::School));
        assert!("phd".parse::<EducationLevel>().is_err());
    }
}
