//! Stylesheet error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for stylesheet parsing and loading failures.
///
/// Merging itself never fails; these errors only arise when turning external
/// documents into [`StyleDict`](super::StyleDict)s.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// YAML or JSON parse error.
    #[error("failed to parse stylesheet{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// A mapping key that is not a string.
    #[error("non-string key {key} in style mapping{}", location(.path))]
    NonStringKey {
        /// Debug rendering of the offending key.
        key: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// A value that is not a scalar.
    #[error("unsupported value for '{key}'{}: {message}", location(.path))]
    UnsupportedValue {
        /// The attribute whose value was rejected.
        key: String,
        /// Description of what was wrong.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// The document root is neither a mapping nor a list of mappings.
    #[error("invalid stylesheet structure{}: {message}", location(.path))]
    InvalidStructure {
        /// Description of what was found.
        message: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// File extension not recognized as a stylesheet format.
    #[error("unrecognized stylesheet extension for {}", .path.display())]
    UnknownFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// File could not be read.
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StylesheetError {
    /// Attaches a source path to errors that carry one.
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        match &mut self {
            StylesheetError::Parse { path, .. }
            | StylesheetError::NonStringKey { path, .. }
            | StylesheetError::UnsupportedValue { path, .. }
            | StylesheetError::InvalidStructure { path, .. } => *path = Some(new_path.into()),
            StylesheetError::UnknownFormat { .. } | StylesheetError::Io { .. } => {}
        }
        self
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for stylesheet operations.
pub type Result<T> = std::result::Result<T, StylesheetError>;
