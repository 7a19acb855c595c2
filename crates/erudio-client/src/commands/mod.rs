//! Application actions.
//!
//! Each sub-module groups related operations by domain. Every public
//! function takes the [`SharedState`](crate::state::SharedState), applies its
//! change under the lock and emits an [`AppEvent`](crate::events::AppEvent)
//! so that views can refresh.

pub mod activity;
pub mod chat;
pub mod dashboard;
pub mod notifications;
pub mod session;
pub mod timetable;
pub mod topics;
