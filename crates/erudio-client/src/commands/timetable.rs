//! Timetable editing, lesson-plan generation and revision scheduling.
//!
//! Blocks are appended or replaced by id; overlapping blocks are allowed.
//! Fixed blocks (school classes) cannot be replaced or deleted.

use erudio_shared::constants::FALLBACK_REVISION_DAY;
use erudio_shared::ids::unique_id;
use erudio_shared::time::day_label_for_date;
use erudio_shared::types::{BlockType, LessonPlanPreferences, TimeBlock};
use tracing::info;

use crate::error::{ClientError, Result};
use crate::events::AppEvent;
use crate::state::{lock, SharedState, TimetableEdit};

pub fn add_time_block(state: &SharedState, block: TimeBlock) -> Result<()> {
    block.validate_times()?;

    let mut guard = lock(state)?;
    info!(block = %block.id, day = %block.day, "Added to timetable");
    guard.timetable.push(block);
    guard.emit(AppEvent::TimetableChanged);
    Ok(())
}

/// Replace the block with the same id.
pub fn update_time_block(state: &SharedState, block: TimeBlock) -> Result<()> {
    block.validate_times()?;

    let mut guard = lock(state)?;
    let idx = guard
        .timetable
        .iter()
        .position(|b| b.id == block.id)
        .ok_or_else(|| ClientError::not_found("Time block", &block.id))?;
    if guard.timetable[idx].is_fixed() {
        return Err(ClientError::FixedBlock(block.id));
    }

    let previous = std::mem::replace(&mut guard.timetable[idx], block);
    guard.push_undo(TimetableEdit::Replaced(previous));
    guard.emit(AppEvent::TimetableChanged);
    info!("Timetable updated manually");
    Ok(())
}

/// Remove a block and return it.
pub fn delete_time_block(state: &SharedState, block_id: &str) -> Result<TimeBlock> {
    let mut guard = lock(state)?;
    let idx = guard
        .timetable
        .iter()
        .position(|b| b.id == block_id)
        .ok_or_else(|| ClientError::not_found("Time block", block_id))?;
    if guard.timetable[idx].is_fixed() {
        return Err(ClientError::FixedBlock(block_id.to_string()));
    }

    let removed = guard.timetable.remove(idx);
    guard.push_undo(TimetableEdit::Deleted {
        index: idx,
        block: removed.clone(),
    });
    guard.emit(AppEvent::TimetableChanged);
    info!(block = %block_id, "Block deleted");
    Ok(removed)
}

/// Roll back the most recent manual edit. Blocks added since then by other
/// operations are kept. Returns `false` when there is nothing to undo.
pub fn undo_timetable_edit(state: &SharedState) -> Result<bool> {
    let mut guard = lock(state)?;
    let Some(edit) = guard.timetable_undo.pop() else {
        return Ok(false);
    };
    match edit {
        TimetableEdit::Replaced(previous) => {
            match guard.timetable.iter().position(|b| b.id == previous.id) {
                Some(idx) => guard.timetable[idx] = previous,
                None => guard.timetable.push(previous),
            }
        }
        TimetableEdit::Deleted { index, block } => {
            let index = index.min(guard.timetable.len());
            guard.timetable.insert(index, block);
        }
    }
    guard.emit(AppEvent::TimetableChanged);
    info!("Changes undone");
    Ok(true)
}

/// Produce a lesson plan after the configured delay.
///
/// The generated blocks are fixed sessions; `preferences` is accepted but not
/// consulted yet.
pub async fn generate_lesson_plan(
    state: &SharedState,
    _preferences: &LessonPlanPreferences,
) -> Result<Vec<TimeBlock>> {
    let delay = lock(state)?.config.plan_generation_delay;
    tokio::time::sleep(delay).await;

    let mut guard = lock(state)?;
    let stamp = unique_id("gen", |c| {
        let first = format!("{c}-1");
        guard.timetable.iter().any(|b| b.id == first)
    });

    let generated = vec![
        TimeBlock {
            id: format!("{stamp}-1"),
            day: "Tuesday".into(),
            start_time: "16:00".into(),
            end_time: "18:00".into(),
            block_type: BlockType::Study,
            subject_id: None,
            topic_id: None,
            title: "Generated Study Session".into(),
            is_fixed: None,
        },
        TimeBlock {
            id: format!("{stamp}-2"),
            day: "Wednesday".into(),
            start_time: "16:00".into(),
            end_time: "17:00".into(),
            block_type: BlockType::Revision,
            subject_id: None,
            topic_id: None,
            title: "Generated Revision".into(),
            is_fixed: None,
        },
    ];

    guard.timetable.extend(generated.iter().cloned());
    guard.emit(AppEvent::TimetableChanged);
    info!(blocks = generated.len(), "Lesson plan generated");
    Ok(generated)
}

/// Book a one-hour revision of `topic_id` at 18:00 on the weekday of `date`
/// (YYYY-MM-DD), or on Friday when the date cannot be read. Only a readable
/// date is recorded as the topic's next revision.
pub fn schedule_revision(state: &SharedState, topic_id: &str, date: &str) -> Result<TimeBlock> {
    let mut guard = lock(state)?;
    let topic = guard.topic(topic_id)?.clone();

    let (day, dated) = match day_label_for_date(date) {
        Ok(day) => (day, true),
        Err(_) => {
            tracing::debug!(date, "unreadable revision date, using fallback day");
            (FALLBACK_REVISION_DAY, false)
        }
    };
    let id = unique_id("rev", |c| guard.timetable.iter().any(|b| b.id == c));

    let block = TimeBlock {
        id,
        day: day.to_string(),
        start_time: "18:00".into(),
        end_time: "19:00".into(),
        block_type: BlockType::Revision,
        subject_id: Some(topic.subject_id.clone()),
        topic_id: Some(topic.id.clone()),
        title: format!("Revise: {}", topic.name),
        is_fixed: None,
    };

    if dated {
        if let Some(t) = guard.topics.iter_mut().find(|t| t.id == topic_id) {
            t.next_revision = Some(date.to_string());
        }
    }
    guard.timetable.push(block.clone());
    guard.emit(AppEvent::TimetableChanged);
    info!(topic = %topic.name, day, "Revision scheduled");
    Ok(block)
}

/// Blocks on `day`, earliest first.
pub fn blocks_for_day(state: &SharedState, day: &str) -> Result<Vec<TimeBlock>> {
    let guard = lock(state)?;
    let mut blocks: Vec<TimeBlock> = guard
        .timetable
        .iter()
        .filter(|b| b.day == day)
        .cloned()
        .collect();
    blocks.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    Ok(blocks)
}

pub fn timetable(state: &SharedState) -> Result<Vec<TimeBlock>> {
    Ok(lock(state)?.timetable.clone())
}
