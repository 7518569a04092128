//! Scan error types for stg-scan.
//!
//! Content problems are never errors here; they become
//! [`ContentIssue`](stg_core::ContentIssue)s in the report. A `ScanError`
//! means the environment got in the way and the current check cannot finish.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Reading a file or directory failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(String),

    /// The index glob could not be compiled.
    #[error("invalid glob '{glob}': {reason}")]
    Glob { glob: String, reason: String },

    /// A requested path escapes the content root or is not relative.
    #[error("path is outside the content root: {0}")]
    OutsideRoot(String),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means "nothing there" rather than a broken environment.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::OutsideRoot(_) => true,
            Self::Walk(_) | Self::Glob { .. } => false,
        }
    }
}
