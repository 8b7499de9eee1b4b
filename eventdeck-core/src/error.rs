//! Error types for eventdeck.

use thiserror::Error;

/// Errors that can occur in eventdeck operations.
///
/// Lookups of unknown events never produce an error; they resolve to
/// `None` or an empty list instead.
#[derive(Error, Debug)]
pub enum EventDeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("Notification hook '{0}' not found in PATH")]
    HookNotInstalled(String),

    #[error("Notification error: {0}")]
    Notify(String),
}

impl From<serde_json::Error> for EventDeckError {
    fn from(e: serde_json::Error) -> Self {
        EventDeckError::Serialization(e.to_string())
    }
}

/// Result type alias for eventdeck operations.
pub type EventDeckResult<T> = Result<T, EventDeckError>;
