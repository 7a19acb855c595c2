use erudio_shared::error::SharedError;
use erudio_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Time block {0} is fixed and cannot be changed")]
    FixedBlock(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] SharedError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Application state lock poisoned")]
    LockPoisoned,
}

impl ClientError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
