use std::io;

/// Errors that can occur while computing indent scopes
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid tab size {0}: indentation width must be at least 1")]
    InvalidTabSize(usize),

    #[error("Document has no lines")]
    EmptyDocument,

    #[error("Invalid language pattern: {0}")]
    LanguagePatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for indenticator operations
pub type Result<T> = std::result::Result<T, Error>;
