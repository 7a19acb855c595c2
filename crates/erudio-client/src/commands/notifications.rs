use erudio_shared::types::Notification;
use tracing::info;

use crate::error::{ClientError, Result};
use crate::events::AppEvent;
use crate::state::{lock, SharedState};

/// Flag a notification as read. Marking an already-read notification again
/// changes nothing.
pub fn mark_notification_as_read(state: &SharedState, notification_id: &str) -> Result<()> {
    let mut guard = lock(state)?;
    let notification = guard
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id)
        .ok_or_else(|| ClientError::not_found("Notification", notification_id))?;
    if notification.read {
        return Ok(());
    }
    notification.read = true;
    guard.emit(AppEvent::NotificationsChanged);
    Ok(())
}

/// Returns how many notifications were flipped.
pub fn mark_all_notifications_read(state: &SharedState) -> Result<usize> {
    let mut guard = lock(state)?;
    let mut flipped = 0;
    for n in guard.notifications.iter_mut().filter(|n| !n.read) {
        n.read = true;
        flipped += 1;
    }
    if flipped > 0 {
        guard.emit(AppEvent::NotificationsChanged);
        info!(count = flipped, "All notifications marked as read");
    }
    Ok(flipped)
}

pub fn notifications(state: &SharedState) -> Result<Vec<Notification>> {
    Ok(lock(state)?.notifications.clone())
}

pub fn unread_notifications(state: &SharedState) -> Result<Vec<Notification>> {
    let guard = lock(state)?;
    Ok(guard.notifications.iter().filter(|n| !n.read).cloned().collect())
}

pub fn read_notifications(state: &SharedState) -> Result<Vec<Notification>> {
    let guard = lock(state)?;
    Ok(guard.notifications.iter().filter(|n| n.read).cloned().collect())
}

pub fn unread_count(state: &SharedState) -> Result<usize> {
    Ok(lock(state)?.notifications.iter().filter(|n| !n.read).count())
}
