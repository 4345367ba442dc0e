//! Error types for signatory-scm

use std::path::PathBuf;

/// Result type for signatory-scm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating project files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Project root {path} is invalid: {reason}")]
    ProjectRootInvalid { path: PathBuf, reason: String },

    #[error("The {differ} differ is unavailable for {root}: {message}")]
    DifferUnavailable {
        differ: &'static str,
        root: PathBuf,
        message: String,
    },

    #[error("Unsupported SCM '{name}' (expected git, directory or auto)")]
    UnsupportedScm { name: String },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] signatory_fs::Error),
}
