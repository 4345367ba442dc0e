//! Well-known file names inside a signed project.

use std::path::Path;

/// Standard project filesystem markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `.git` directory (Git database)
    GitDir,
    /// The default checksum manifest, `sha256sum.txt`
    ChecksumFile,
    /// The detached signature next to the default manifest
    SignatureFile,
    /// Optional per-project settings, `.signatory.toml`
    ConfigFile,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitDir => ".git",
            Self::ChecksumFile => "sha256sum.txt",
            Self::SignatureFile => "sha256sum.txt.sig",
            Self::ConfigFile => ".signatory.toml",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
