//! Error types.
//!
//! Absence of a number, duration or datetime is never an error: extraction
//! functions return `None` for that. Errors only come from the edges where a
//! caller hands us something malformed (reference timestamps, CLI arguments,
//! language tags) or from I/O in the binary.

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reference timestamp could not be parsed.
    #[error("invalid reference time '{0}' (expected YYYY-MM-DDTHH:MM:SS)")]
    InvalidReference(String),

    /// Default time-of-day could not be parsed.
    #[error("invalid default time '{0}' (expected HH:MM or HH:MM:SS)")]
    InvalidDefaultTime(String),

    /// Only Russian is implemented here.
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),

    /// Bad command line usage.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Nothing to parse.
    #[error("no input provided")]
    MissingInput,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-argument error with message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
