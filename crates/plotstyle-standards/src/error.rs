//! Error types for the standards crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering or checking files.
#[derive(Debug, Error)]
pub enum StandardsError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The root has no `.git` directory, so tracked files cannot be listed.
    #[error("{} is not a git repository", .0.display())]
    NotARepository(PathBuf),

    /// `git` could not be run or exited unsuccessfully.
    #[error("git ls-tree failed in {}: {message}", .root.display())]
    Git { root: PathBuf, message: String },

    /// Filesystem error while walking or reading.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("invalid standards configuration: {0}")]
    Config(String),
}

/// Result type for standards operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
