//! Navigation table.
//!
//! Maps URL-style paths to screens and applies the sign-in gate. The gate is
//! open unless `enforce` is set, in which case protected screens redirect
//! signed-out users to the login screen.

use std::fmt;

use crate::error::Result;
use crate::state::{lock, SharedState};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Timetable,
    Lessons,
    TopicDetail { topic_id: String },
    Quiz,
    Analytics,
    Chat,
    ChatSession { chat_id: String },
    Notifications,
    Exams,
    Reports,
    UploadSetup,
    Video { video_id: String },
    Revision { topic_id: String },
}

impl Route {
    /// Match a path such as `/lessons/t2`. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            ["timetable"] => Self::Timetable,
            ["lessons"] => Self::Lessons,
            ["lessons", id] => Self::TopicDetail {
                topic_id: id.to_string(),
            },
            ["quiz"] => Self::Quiz,
            ["analytics"] => Self::Analytics,
            ["chat"] => Self::Chat,
            ["chat", id] => Self::ChatSession {
                chat_id: id.to_string(),
            },
            ["notifications"] => Self::Notifications,
            ["exams"] => Self::Exams,
            ["reports"] => Self::Reports,
            ["upload-setup"] => Self::UploadSetup,
            ["video", id] => Self::Video {
                video_id: id.to_string(),
            },
            ["revision", id] => Self::Revision {
                topic_id: id.to_string(),
            },
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::Login => "/login".into(),
            Self::Signup => "/signup".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::Timetable => "/timetable".into(),
            Self::Lessons => "/lessons".into(),
            Self::TopicDetail { topic_id } => format!("/lessons/{topic_id}"),
            Self::Quiz => "/quiz".into(),
            Self::Analytics => "/analytics".into(),
            Self::Chat => "/chat".into(),
            Self::ChatSession { chat_id } => format!("/chat/{chat_id}"),
            Self::Notifications => "/notifications".into(),
            Self::Exams => "/exams".into(),
            Self::Reports => "/reports".into(),
            Self::UploadSetup => "/upload-setup".into(),
            Self::Video { video_id } => format!("/video/{video_id}"),
            Self::Revision { topic_id } => format!("/revision/{topic_id}"),
        }
    }

    /// Everything except the landing, login and signup screens needs a
    /// signed-in user.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Landing | Self::Login | Self::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
    NotFound,
}

pub fn resolve(path: &str, authenticated: bool, enforce: bool) -> Navigation {
    let Some(route) = Route::parse(path) else {
        tracing::debug!(path, "no route");
        return Navigation::NotFound;
    };
    if enforce && route.is_protected() && !authenticated {
        tracing::debug!(%route, "not signed in, redirecting to login");
        return Navigation::Redirect(Route::Login);
    }
    Navigation::Render(route)
}

/// [`resolve`] against the current session and configured gate.
pub fn navigate(state: &SharedState, path: &str) -> Result<Navigation> {
    let guard = lock(state)?;
    Ok(resolve(path, guard.is_authenticated, guard.config.enforce_auth))
}
