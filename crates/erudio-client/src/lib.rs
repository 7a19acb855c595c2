//! # erudio-client
//!
//! Application core of the Erudio study planner: session handling, the
//! in-memory study collections, the backend API client and the actions the
//! screens invoke.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod routes;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use events::AppEvent;
pub use state::{lock, AppState, SharedState};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("erudio_client=debug,erudio_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
