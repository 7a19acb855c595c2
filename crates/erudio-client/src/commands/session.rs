//! Sign-in, sign-up, sign-out and session restore.
//!
//! Local login and signup build the user record on the device; only the
//! Google exchange talks to the backend.

use erudio_shared::types::{EducationLevel, User};
use tracing::info;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::events::AppEvent;
use crate::state::{lock, AppState, SharedState};

fn sign_in(guard: &mut AppState, user: User) -> Result<User> {
    guard.database.save_user(&user)?;
    guard.user = Some(user.clone());
    guard.is_authenticated = true;
    guard.emit(AppEvent::SessionChanged {
        authenticated: true,
    });
    Ok(user)
}

/// Sign in with an email. The display name defaults to the part before `@`.
pub fn login(state: &SharedState, email: &str, name: Option<&str>) -> Result<User> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ClientError::InvalidInput("email is required".into()));
    }

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email))
        .to_string();

    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
        email: email.to_string(),
        level: EducationLevel::College,
        streak: 0,
    };

    let mut guard = lock(state)?;
    let user = sign_in(&mut guard, user)?;
    info!(user = %user.name, "Signed in");
    Ok(user)
}

/// Create an account. `level` is parsed leniently and defaults to College.
pub fn signup(state: &SharedState, name: &str, email: &str, level: Option<&str>) -> Result<User> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ClientError::InvalidInput("email is required".into()));
    }

    let level = match level {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(level = raw, "unknown education level, using College");
            EducationLevel::College
        }),
        None => EducationLevel::College,
    };

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        email: email.to_string(),
        level,
        streak: 0,
    };

    let mut guard = lock(state)?;
    let user = sign_in(&mut guard, user)?;
    info!(user = %user.name, "Account created");
    Ok(user)
}

/// Exchange a Google identity token with the backend, store the returned
/// access token and sign in as the returned profile.
pub async fn google_login(state: &SharedState, google_token: &str) -> Result<User> {
    let api = lock(state)?.api.clone();

    let resp = api.google_login(google_token).await.map_err(|e| {
        tracing::error!(error = %e, "Google login failed");
        e
    })?;

    let user = User {
        id: resp.user.id,
        name: resp.user.name,
        email: resp.user.email,
        level: EducationLevel::College,
        streak: 0,
    };

    let mut guard = lock(state)?;
    guard.database.save_access_token(&resp.access_token)?;
    let user = sign_in(&mut guard, user)?;
    info!(user = %user.name, "Signed in with Google");
    Ok(user)
}

/// Sign out: drop the user and remove the persisted record and token.
pub fn logout(state: &SharedState) -> Result<()> {
    let mut guard = lock(state)?;
    guard.database.clear_user()?;
    guard.database.clear_access_token()?;
    guard.user = None;
    guard.is_authenticated = false;
    guard.emit(AppEvent::SessionChanged {
        authenticated: false,
    });
    info!("Signed out");
    Ok(())
}

/// Reload a saved session on startup. Returns the restored user, if any.
pub fn restore_session(state: &SharedState) -> Result<Option<User>> {
    let mut guard = lock(state)?;
    let Some(user) = guard.database.load_user()? else {
        return Ok(None);
    };
    guard.user = Some(user.clone());
    guard.is_authenticated = true;
    guard.emit(AppEvent::SessionChanged {
        authenticated: true,
    });
    info!(user = %user.name, "Session restored");
    Ok(Some(user))
}

pub fn current_user(state: &SharedState) -> Result<Option<User>> {
    Ok(lock(state)?.user.clone())
}

pub fn is_authenticated(state: &SharedState) -> Result<bool> {
    Ok(lock(state)?.is_authenticated)
}

#[cfg(test)]
mod tests {
    use erudio_shared::constants::KEY_USER;

    use super::*;
    use crate::state::testing::test_state;

    #[test]
    fn login_persists_user() {
        let (_dir, state) = test_state();
        let user = login(&state, "ada@example.com", None).unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.level, EducationLevel::College);
        assert_eq!(user.streak, 0);
        assert!(is_authenticated(&state).unwrap());

        let stored = lock(&state).unwrap().database.load_user().unwrap().unwrap();
        assert_eq!(stored.email, "ada@example.com");
    }

    #[test]
    fn login_rejects_blank_email() {
        let (_dir, state) = test_state();
        assert!(matches!(
            login(&state, "  ", None),
            Err(ClientError::InvalidInput(_))
        ));
        assert!(!is_authenticated(&state).unwrap());
    }

    #[test]
    fn signup_defaults() {
        let (_dir, state) = test_state();
        let user = signup(&state, "Grace", "grace@example.com", None).unwrap();
        assert_eq!(user.level, EducationLevel::College);
        assert_eq!(user.streak, 0);

        let user = signup(&state, "Grace", "grace@example.com", Some("School")).unwrap();
        assert_eq!(user.level, EducationLevel::School);
    }

    #[test]
    fn logout_clears_everything() {
        let (_dir, state) = test_state();
        login(&state, "ada@example.com", Some("Ada")).unwrap();
        lock(&state).unwrap().database.save_access_token("jwt").unwrap();

        logout(&state).unwrap();

        assert!(!is_authenticated(&state).unwrap());
        assert!(current_user(&state).unwrap().is_none());
        let guard = lock(&state).unwrap();
        assert!(guard.database.get_raw(KEY_USER).unwrap().is_none());
        assert!(guard.database.access_token().unwrap().is_none());
    }

    #[test]
    fn restore_picks_up_saved_user() {
        let (_dir, state) = test_state();
        assert!(restore_session(&state).unwrap().is_none());

        let user = login(&state, "ada@example.com", Some("Ada")).unwrap();
        {
            let mut guard = lock(&state).unwrap();
            guard.user = None;
            guard.is_authenticated = false;
        }

        assert_eq!(restore_session(&state).unwrap(), Some(user));
        assert!(is_authenticated(&state).unwrap());
    }

    #[test]
    fn restore_ignores_corrupt_record() {
        let (_dir, state) = test_state();
        lock(&state).unwrap().database.set_raw(KEY_USER, "oops").unwrap();
        assert!(restore_session(&state).unwrap().is_none());
        assert!(!is_authenticated(&state).unwrap());
    }
}
