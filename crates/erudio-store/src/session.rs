//! Persisted login session: the user record and the backend bearer token.

use erudio_shared::constants::{KEY_ACCESS_TOKEN, KEY_USER};
use erudio_shared::types::User;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Load the saved user. An unreadable record is removed and treated as
    /// absent.
    pub fn load_user(&self) -> Result<Option<User>> {
        let Some(raw) = self.get_raw(KEY_USER)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt saved user");
                self.remove(KEY_USER)?;
                Ok(None)
            }
        }
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        self.set_json(KEY_USER, user)
    }

    pub fn clear_user(&self) -> Result<()> {
        self.remove(KEY_USER)?;
        Ok(())
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.get_raw(KEY_ACCESS_TOKEN)?.filter(|t| !t.is_empty()))
    }

    pub fn save_access_token(&self, token: &str) -> Result<()> {
        self.set_raw(KEY_ACCESS_TOKEN, token)
    }

    pub fn clear_access_token(&self) -> Result<()> {
        self.remove(KEY_ACCESS_TOKEN)?;
        Ok(())
    }
}
