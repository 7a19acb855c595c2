//! Initial datasets loaded into a fresh application state.

use crate::types::*;

fn subject(id: &str, name: &str, progress: u8, color: &str) -> Subject {
    Subject {
        id: id.into(),
        name: name.into(),
        progress,
        color: color.into(),
    }
}

fn topic(id: &str, subject_id: &str, name: &str, status: TopicStatus) -> Topic {
    Topic {
        id: id.into(),
        subject_id: subject_id.into(),
        name: name.into(),
        status,
        exam_relevance: None,
        score: None,
        last_revised: None,
        next_revision: None,
        has_remedial_video: None,
    }
}

fn block(id: &str, day: &str, start: &str, end: &str, kind: BlockType, title: &str) -> TimeBlock {
    TimeBlock {
        id: id.into(),
        day: day.into(),
        start_time: start.into(),
        end_time: end.into(),
        block_type: kind,
        subject_id: None,
        topic_id: None,
        title: title.into(),
        is_fixed: None,
    }
}

pub fn subjects() -> Vec<Subject> {
    vec![
        subject("math", "Mathematics", 65, "bg-blue-500"),
        subject("phys", "Physics", 42, "bg-purple-500"),
        subject("chem", "Chemistry", 28, "bg-green-500"),
        subject("cs", "Computer Science", 80, "bg-indigo-500"),
    ]
}

pub fn topics() -> Vec<Topic> {
    use TopicStatus::*;

    let t1 = Topic {
        exam_relevance: Some("High importance for Midterm".into()),
        score: Some(90),
        last_revised: Some("2023-10-15".into()),
        ..topic("t1", "math", "Quadratic Equations", Mastered)
    };
    let t2 = Topic {
        exam_relevance: Some("Medium".into()),
        score: Some(45),
        has_remedial_video: Some(true),
        ..topic("t2", "math", "Calculus I: Limits", InProgress)
    };
    let t3 = Topic {
        exam_relevance: Some("Low".into()),
        ..topic("t3", "math", "Trigonometry", NotStarted)
    };
    let t4 = Topic {
        exam_relevance: Some("High".into()),
        score: Some(85),
        last_revised: Some("2023-10-20".into()),
        ..topic("t4", "phys", "Kinematics", Mastered)
    };
    let t5 = Topic {
        exam_relevance: Some("High".into()),
        ..topic("t5", "phys", "Newton's Laws", InProgress)
    };
    let t6 = Topic {
        exam_relevance: Some("Medium".into()),
        ..topic("t6", "phys", "Thermodynamics", NotStarted)
    };
    let t7 = Topic {
        score: Some(95),
        ..topic("t7", "cs", "Arrays & Strings", Mastered)
    };
    let t8 = Topic {
        has_remedial_video: Some(true),
        ..topic("t8", "cs", "Pointers in C", InProgress)
    };

    vec![t1, t2, t3, t4, t5, t6, t7, t8]
}

pub fn timetable() -> Vec<TimeBlock> {
    let class = |id, start, end, title| TimeBlock {
        is_fixed: Some(true),
        ..block(id, "Monday", start, end, BlockType::Class, title)
    };
    vec![
        class("c1", "09:00", "10:00", "Math Class"),
        class("c2", "10:00", "11:00", "Physics Class"),
        class("c3", "11:00", "12:00", "CS Class"),
        TimeBlock {
            subject_id: Some("math".into()),
            topic_id: Some("t2".into()),
            ..block("s1", "Monday", "17:00", "18:00", BlockType::Study, "Calculus Study")
        },
        TimeBlock {
            subject_id: Some("phys".into()),
            topic_id: Some("t4".into()),
            ..block(
                "s2",
                "Monday",
                "18:15",
                "19:00",
                BlockType::Revision,
                "Kinematics Revision",
            )
        },
    ]
}

pub fn exams() -> Vec<Exam> {
    vec![
        Exam {
            id: "e1".into(),
            name: "Midterm Physics".into(),
            date: "2023-11-15".into(),
            importance: Importance::High,
        },
        Exam {
            id: "e2".into(),
            name: "Math Quiz".into(),
            date: "2023-11-05".into(),
            importance: Importance::Medium,
        },
    ]
}

pub fn recent_activity() -> Vec<RecentActivity> {
    vec![
        RecentActivity {
            id: "a1".into(),
            kind: ActivityType::Chat,
            title: "Algebra – Quadratic equations".into(),
            subtitle: None,
            timestamp: "Today, 6:20 PM".into(),
            ref_id: "chat1".into(),
        },
        RecentActivity {
            id: "a2".into(),
            kind: ActivityType::Quiz,
            title: "Physics – Kinematics".into(),
            subtitle: Some("Score: 85%".into()),
            timestamp: "Yesterday, 4:30 PM".into(),
            ref_id: "t4".into(),
        },
        RecentActivity {
            id: "a3".into(),
            kind: ActivityType::Video,
            title: "Fix your weak spot: Pointers".into(),
            subtitle: None,
            timestamp: "Yesterday, 8:00 PM".into(),
            ref_id: "t8".into(),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    use ActionType as A;
    use NotificationType as N;
    use Priority as P;

    let n = |id: &str,
             kind,
             title: &str,
             message: &str,
             read,
             timestamp: &str,
             priority,
             action,
             action_id: Option<&str>| Notification {
        id: id.into(),
        kind,
        title: title.into(),
        message: message.into(),
        read,
        timestamp: timestamp.into(),
        priority: Some(priority),
        action_type: Some(action),
        action_id: action_id.map(Into::into),
    };

    vec![
        n(
            "n1",
            N::RemedialContent,
            "New remedial video ready",
            "Video generated for Quadratic Equations based on your last quiz",
            false,
            "1 hour ago",
            P::High,
            A::Video,
            Some("t8"),
        ),
        n(
            "n2",
            N::PlanUpdate,
            "Plan updated",
            "Your timetable was updated after yesterday's quiz",
            false,
            "1 day ago",
            P::Normal,
            A::Timetable,
            None,
        ),
        n(
            "n3",
            N::StudyReminder,
            "Study session starting soon",
            "Math – Quadratic equations at 5:00 PM",
            true,
            "2 hours ago",
            P::High,
            A::Timetable,
            Some("s1"),
        ),
        n(
            "n4",
            N::WeeklyRevision,
            "Weekly revision reminder",
            "You have 3 pending revisions from last week",
            false,
            "3 hours ago",
            P::High,
            A::Dashboard,
            None,
        ),
        n(
            "n5",
            N::SuggestedRevision,
            "Suggested revision",
            "Algebra – Quadratic equations (low quiz score, high exam weight)",
            false,
            "5 hours ago",
            P::High,
            A::Topic,
            Some("t2"),
        ),
        n(
            "n6",
            N::ScheduledRevision,
            "Revision due today",
            "Kinematics – you scheduled this for today",
            true,
            "1 day ago",
            P::Normal,
            A::Topic,
            Some("t4"),
        ),
        n(
            "n7",
            N::ExamAlert,
            "Exam coming up",
            "Math Midterm in 3 days",
            false,
            "2 days ago",
            P::High,
            A::Analytics,
            None,
        ),
        n(
            "n8",
            N::Achievement,
            "Nice work!",
            "You're on a 7-day study streak, keep it going!",
            true,
            "2 days ago",
            P::Low,
            A::Dashboard,
            None,
        ),
        n(
            "n9",
            N::ChatNotes,
            "AI chat summary ready",
            "Your conversation about Pointers in C has been converted to notes",
            false,
            "3 days ago",
            P::Normal,
            A::Chat,
            Some("chat1"),
        ),
    ]
}

pub fn chat_history() -> Vec<ChatSession> {
    vec![ChatSession {
        id: "chat1".into(),
        title: "Algebra – Quadratic equations".into(),
        timestamp: "2023-10-25T18:20:00Z".into(),
        subject_id: None,
        topic_id: None,
        conversation_id: None,
        messages: vec![
            ChatMessage {
                id: "m1".into(),
                role: Role::User,
                content: "Explain quadratic formula".into(),
                timestamp: "2023-10-25T18:20:00Z".into(),
            },
            ChatMessage {
                id: "m2".into(),
                role: Role::Assistant,
                content: "The quadratic formula is used to find the roots of a quadratic equation..."
                    .into(),
                timestamp: "2023-10-25T18:20:05Z".into(),
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_ids_are_unique() {
        let ids: HashSet<_> = timetable().into_iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), timetable().len());
        let ids: HashSet<_> = topics().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), topics().len());
    }

    #[test]
    fn seeded_topics_respect_mastery_rule() {
        for t in topics() {
            if let Some(score) = t.score {
                if t.status != TopicStatus::NotStarted {
                    assert_eq!(t.status, TopicStatus::from_score(score), "topic {}", t.id);
                }
            }
        }
    }

    #[test]
    fn classes_are_fixed() {
        for b in timetable() {
            assert_eq!(b.block_type == BlockType::Class, b.is_fixed());
        }
    }
}
