//! Error types for signatory-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from signatory-core
    #[error(transparent)]
    Core(#[from] signatory_core::Error),

    /// Error from signatory-fs
    #[error(transparent)]
    Fs(#[from] signatory_fs::Error),

    /// Error from signatory-scm
    #[error(transparent)]
    Scm(#[from] signatory_scm::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// Validation found discrepancies. The report has already been printed.
    #[error("Checksum validation failed with {count} discrepancies")]
    ValidationFailed { count: usize },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// `2` means the tree did not match its manifest; everything else that
    /// stops a command is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 2,
            _ => 1,
        }
    }

    /// Whether the command already reported this error on stdout.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}
