//! Schema versioning for `erudio.db`.
//!
//! The schema is a single `kv` table, so there is one step today. The
//! SQLite `user_version` pragma records how far a file has been upgraded;
//! [`Database::open_at`] calls [`run_migrations`] before handing out the
//! connection.
//!
//! [`Database::open_at`]: crate::Database::open_at

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current schema version.
const CURRENT_VERSION: u32 = 1;

/// Run all pending migrations against the open connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if current >= CURRENT_VERSION {
        tracing::debug!(version = current, "kv schema up to date");
        return Ok(());
    }

    if current < 1 {
        v001_initial::up(conn).map_err(|e| StoreError::Migration(format!("v001: {e}")))?;
        conn.pragma_update(None, "user_version", 1)?;
        tracing::info!("created kv table");
    }

    Ok(())
}
