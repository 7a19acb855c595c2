//! Types shared by the Erudio store and client crates: study entities, the
//! backend wire format, seed data and a few small helpers.

pub mod constants;
pub mod error;
pub mod ids;
pub mod protocol;
pub mod seed;
pub mod time;
pub mod types;
