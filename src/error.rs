//! Error types for deepren.
//!
//! All operations return `Result<T>` which aliases `Result<T, DeepRenError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from transform operations.
///
/// Configuration errors (`PathNotFound`, `NotADirectory`, `InvalidPattern`,
/// `InvalidFilter`) abort the run before traversal. Everything else is raised
/// per item and reported inline by the walker.
#[derive(Debug, Error)]
pub enum DeepRenError {
    /// Root directory does not exist.
    #[error("The provided path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory.
    #[error("The provided path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Find pattern is not a valid regular expression.
    #[error("Invalid find pattern '{0}': {1}")]
    InvalidPattern(String, #[source] regex::Error),

    /// File filter is not a valid glob.
    #[error("Invalid file filter '{0}': {1}")]
    InvalidFilter(String, #[source] glob::PatternError),

    /// Rename target is already taken by another entry.
    #[error("Cannot rename to '{}': target already exists", .0.display())]
    TargetExists(PathBuf),

    /// Replacement produced a name that cannot be used on disk.
    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for deepren operations.
pub type Result<T> = std::result::Result<T, DeepRenError>;
