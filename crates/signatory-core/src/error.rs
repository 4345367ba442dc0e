//! Error types for signatory-core

/// Result type for signatory-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in signatory-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A manifest line could not be parsed; the whole manifest is rejected
    #[error("Malformed manifest at line {line}: {message}")]
    ManifestMalformed { line: usize, message: String },

    /// The same path appears on more than one manifest line
    #[error("Duplicate manifest entry at line {line}: {path}")]
    DuplicateManifestEntry { line: usize, path: String },

    /// Verification found discrepancies
    #[error("Checksum mismatch:\n{0}")]
    ChecksumMismatch(crate::ChecksumMismatch),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from signatory-fs
    #[error(transparent)]
    Fs(#[from] signatory_fs::Error),

    /// Differ error from signatory-scm
    #[error(transparent)]
    Scm(#[from] signatory_scm::Error),
}
