//! Verification outcome types
//!
//! A verification pass collects every discrepancy instead of stopping at the
//! first one, so the outcome carries all categories at once.

use serde::Serialize;
use signatory_fs::RelativePath;

use crate::{Error, Result};

/// A file whose current digest differs from the recorded one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentMismatch {
    pub path: RelativePath,
    /// Digest recorded in the manifest
    pub expected: String,
    /// Digest computed from the file on disk
    pub actual: String,
}

/// A manifest file that exists but could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableFile {
    pub path: RelativePath,
    pub reason: String,
}

/// Every discrepancy found by one verification pass.
///
/// Each list is sorted by path. Individual lists may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChecksumMismatch {
    /// Files whose content no longer matches the manifest
    pub changed: Vec<ContentMismatch>,
    /// Files in the authoritative set but not in the manifest
    pub added: Vec<RelativePath>,
    /// Manifest files that vanished or left the authoritative set
    pub removed: Vec<RelativePath>,
    /// Manifest files that exist but could not be read
    pub unreadable: Vec<UnreadableFile>,
}

impl ChecksumMismatch {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && self.unreadable.is_empty()
    }

    /// Total number of discrepancies across all categories
    pub fn len(&self) -> usize {
        self.changed.len() + self.added.len() + self.removed.len() + self.unreadable.len()
    }

    pub(crate) fn sort(&mut self) {
        self.changed.sort_by(|a, b| a.path.cmp(&b.path));
        self.added.sort();
        self.removed.sort();
        self.unreadable.sort_by(|a, b| a.path.cmp(&b.path));
    }
}

impl std::fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for item in &self.changed {
            writeln!(
                f,
                "changed: {} (expected {}, got {})",
                item.path, item.expected, item.actual
            )?;
        }
        for path in &self.added {
            writeln!(f, "added: {path}")?;
        }
        for path in &self.removed {
            writeln!(f, "removed: {path}")?;
        }
        for item in &self.unreadable {
            writeln!(f, "unreadable: {} ({})", item.path, item.reason)?;
        }
        Ok(())
    }
}

/// Result of verifying a tree against a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VerificationOutcome {
    /// Every manifest entry matched and nothing was added or removed
    Success,
    /// At least one discrepancy was found
    Mismatch(ChecksumMismatch),
}

impl VerificationOutcome {
    /// `Success` for an empty mismatch, `Mismatch` otherwise.
    pub fn from_mismatch(mut mismatch: ChecksumMismatch) -> Self {
        if mismatch.is_empty() {
            Self::Success
        } else {
            mismatch.sort();
            Self::Mismatch(mismatch)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn mismatch(&self) -> Option<&ChecksumMismatch> {
        match self {
            Self::Success => None,
            Self::Mismatch(mismatch) => Some(mismatch),
        }
    }

    /// Convert to a `Result`, turning a mismatch into [`Error::ChecksumMismatch`].
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Success => Ok(()),
            Self::Mismatch(mismatch) => Err(Error::ChecksumMismatch(mismatch)),
        }
    }
}
