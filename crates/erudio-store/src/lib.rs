//! # erudio-store
//!
//! Local key-value persistence for the Erudio client, backed by SQLite.
//!
//! Every value lives under a plain string key in a single `kv` table; last
//! write wins. The crate exposes a synchronous `Database` handle with typed
//! helpers for the session record, bearer token, per-topic content cache and
//! notes, cumulative study time and quiz history.

pub mod database;
pub mod kv;
pub mod migrations;
pub mod progress;
pub mod session;
pub mod topics;

mod error;

pub use database::Database;
pub use error::StoreError;
