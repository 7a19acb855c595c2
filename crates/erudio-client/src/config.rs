//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client runs with zero configuration
//! against the hosted backend.

use std::path::PathBuf;
use std::time::Duration;

use erudio_shared::constants::{DEFAULT_API_URL, DEFAULT_PLAN_DELAY_MS};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash.
    /// Env: `ERUDIO_API_URL`
    /// Default: the hosted deployment.
    pub api_base_url: String,

    /// Directory holding `erudio.db`.
    /// Env: `ERUDIO_DATA_DIR`
    /// Default: `None` (platform data directory).
    pub data_dir: Option<PathBuf>,

    /// Simulated latency of lesson-plan generation.
    /// Env: `ERUDIO_PLAN_DELAY_MS`
    /// Default: 1500 ms
    pub plan_generation_delay: Duration,

    /// Whether protected routes redirect signed-out users to the login page.
    /// Env: `ERUDIO_ENFORCE_AUTH` (true/false)
    /// Default: `false`
    pub enforce_auth: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            plan_generation_delay: Duration::from_millis(DEFAULT_PLAN_DELAY_MS),
            enforce_auth: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("ERUDIO_API_URL") {
            let url = normalize_base_url(&url);
            if url.is_empty() {
                tracing::warn!("Empty ERUDIO_API_URL, using default");
            } else {
                config.api_base_url = url;
            }
        }

        if let Some(dir) = lookup("ERUDIO_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(val) = lookup("ERUDIO_PLAN_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.plan_generation_delay = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %val, "Invalid ERUDIO_PLAN_DELAY_MS, using default"),
            }
        }

        if let Some(val) = lookup("ERUDIO_ENFORCE_AUTH") {
            config.enforce_auth = val == "true" || val == "1";
        }

        config
    }

    /// Point the client at another backend (tests, self-hosting).
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
