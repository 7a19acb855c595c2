use chrono::Local;
use tracing::{info, warn};

use erudio_client::commands::{chat, dashboard, session};
use erudio_client::{AppState, ClientConfig};
use erudio_shared::constants::APP_NAME;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    erudio_client::init_tracing();
    info!("Starting {APP_NAME} v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");

    let state = AppState::open(config)?.into_shared();

    match session::restore_session(&state)? {
        Some(user) => {
            info!(user = %user.name, "Welcome back");
            if let Err(e) = chat::sync_chat_history(&state).await {
                warn!(error = %e, "Chat history unavailable, showing local activity");
            }
        }
        None => info!("No saved session"),
    }

    let snapshot = dashboard::dashboard(&state, Local::now().date_naive())?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
