//! Error types for signatory-fs

use std::path::PathBuf;

/// Result type for signatory-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in signatory-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be opened or read for digesting.
    ///
    /// Kept apart from [`Error::Io`] so callers can tell a missing or
    /// unreadable input from a failed write.
    #[error("File unreadable at {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported checksum algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("Invalid relative path '{path}': {reason}")]
    InvalidRelativePath { path: String, reason: String },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is a path that does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } | Self::FileUnreadable { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ),
            _ => false,
        }
    }
}
