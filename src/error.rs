//! Error types for Jibflags
//!
//! All modules use `JibFlagsResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Jibflags operations
pub type JibFlagsResult<T> = Result<T, JibFlagsError>;

/// All errors that can occur in Jibflags
#[derive(Error, Debug)]
pub enum JibFlagsError {
    // Project errors
    #[error("Project manifest not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid project manifest at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Build plan errors
    #[error("Invalid container path '{path}': {reason}")]
    PathInvalid { path: String, reason: String },

    #[error("Invalid permission mode '{0}': expected three octal digits")]
    ModeInvalid(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("Build plan JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl JibFlagsError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound(_) => Some("Run from the project directory or pass --project"),
            Self::ModeInvalid(_) => Some("Use a three-digit octal mode like 644 or 755"),
            Self::PathInvalid { .. } => Some("Container paths must start with '/'"),
            _ => None,
        }
    }
}
