use thiserror::Error;

/// All errors that can occur in kvpeek.
#[derive(Debug, Error)]
pub enum KvPeekError {
    // --- Config errors ---
    #[error("{0} is required!")]
    MissingCredential(&'static str),

    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- API errors ---
    #[error("{operation} failed (HTTP {status}): {body}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} returned an unreadable response: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    #[error("Key listing did not finish within {0} pages")]
    PageLimitExceeded(usize),

    // --- Selection errors ---
    #[error("Selection '{0}' not found")]
    SelectionNotFound(String),

    #[error("No {0} available to choose from")]
    NothingToSelect(&'static str),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience type alias for kvpeek results.
pub type Result<T> = std::result::Result<T, KvPeekError>;
