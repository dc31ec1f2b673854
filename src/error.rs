use thiserror::Error;

/// Unified error type for gver operations
#[derive(Error, Debug)]
pub enum GverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Cannot open repository: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid version: {0}")]
    Version(String),

    #[error("Failed {operation}: {source}")]
    Context {
        operation: &'static str,
        #[source]
        source: Box<GverError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in gver
pub type Result<T> = std::result::Result<T, GverError>;

impl GverError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GverError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GverError::Version(msg.into())
    }

    /// Create a pattern compilation error for the named trigger
    pub fn pattern(name: &'static str, source: regex::Error) -> Self {
        GverError::Pattern { name, source }
    }

    /// Wrap this error with the operation that was running when it occurred
    pub fn during(self, operation: &'static str) -> Self {
        GverError::Context {
            operation,
            source: Box::new(self),
        }
    }
}
