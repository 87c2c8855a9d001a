//! Error types for the SQL compiler.

use thiserror::Error;

/// The main error type for compiler operations.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A builder was handed to a compiler without the state it needs to exist.
    #[error("Cannot construct compiler: {0}")]
    Construction(String),

    /// An argument or builder field has a value the compiler cannot render.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operator token outside the supported set.
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlError {
    /// Create an invalid argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction(message.into())
    }
}

/// Result type alias for compiler operations.
pub type SqlResult<T> = Result<T, SqlError>;
