use erudio_shared::types::RecentActivity;

use crate::error::Result;
use crate::events::AppEvent;
use crate::state::{lock, SharedState};

/// Put an entry at the top of the recent-activity feed.
pub fn add_recent_activity(state: &SharedState, activity: RecentActivity) -> Result<()> {
    let mut guard = lock(state)?;
    tracing::debug!(activity = %activity.id, kind = ?activity.kind, "Activity recorded");
    guard.recent_activity.insert(0, activity);
    guard.emit(AppEvent::ActivityChanged);
    Ok(())
}

pub fn recent_activity(state: &SharedState) -> Result<Vec<RecentActivity>> {
    Ok(lock(state)?.recent_activity.clone())
}
