use thiserror::Error;

/// Top-level error type for polyglot.
#[derive(Debug, Error)]
pub enum PolyglotError {
    /// Error from a translation backend.
    #[error("provider error: {0}")]
    Provider(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// String table could not be loaded or written.
    #[error("table error: {0}")]
    Table(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
