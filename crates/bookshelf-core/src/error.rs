//! Error types for Bookshelf Core
//!
//! Two failure kinds are part of normal operation and are recovered by the
//! caller: [`BookshelfError::NotFound`] and [`BookshelfError::InvalidInput`].
//! Everything else (a failed write, a broken config file) is expected to
//! propagate to the top of the binary.

use thiserror::Error;

/// Result type alias for Bookshelf operations
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Main error type for Bookshelf operations
#[derive(Error, Debug)]
pub enum BookshelfError {
    /// No record matched the requested title
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Unrecognized search kind, or an absent/unreadable storage file
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        source: Box<BookshelfError>,
    },
}

impl BookshelfError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether the shell should report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::InvalidInput(_) => true,
            Self::WithContext { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}
