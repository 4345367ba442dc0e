//! Manifest generation and verification for a project root

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use signatory_fs::{Algorithm, RelativePath, digest_file};
use signatory_scm::provider::ensure_project_root;
use signatory_scm::{Differ, FileExistenceDiffer};

use crate::outcome::{ContentMismatch, UnreadableFile};
use crate::{ChecksumMismatch, Manifest, ManifestEntry, Result, VerificationOutcome};

/// Coordinates the differ, the digest engine and the manifest codec for one
/// project root.
///
/// Holds configuration only. Every call re-reads the tree and asks the
/// differ afresh, so nothing goes stale between calls.
#[derive(Debug, Clone)]
pub struct ChecksumFile<D = Differ> {
    root: PathBuf,
    differ: D,
    algorithm: Algorithm,
    excluded: BTreeSet<RelativePath>,
}

impl<D: FileExistenceDiffer> ChecksumFile<D> {
    /// Create a coordinator using the default algorithm.
    pub fn new(root: impl Into<PathBuf>, differ: D) -> Self {
        Self {
            root: root.into(),
            differ,
            algorithm: Algorithm::default(),
            excluded: BTreeSet::new(),
        }
    }

    /// Set the algorithm used by [`ChecksumFile::parse`].
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Leave paths out of the authoritative file set.
    ///
    /// Used to keep the manifest and its signature from listing themselves.
    pub fn with_excluded(mut self, paths: impl IntoIterator<Item = RelativePath>) -> Self {
        self.excluded.extend(paths);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn differ(&self) -> &D {
        &self.differ
    }

    /// Parse manifest text with this coordinator's algorithm.
    pub fn parse(&self, text: &str) -> Result<Manifest> {
        Manifest::parse(text, self.algorithm)
    }

    /// Build a manifest of the current tree.
    ///
    /// Entries follow the differ's order. An empty tree gives an empty
    /// manifest. The first enumeration or digest failure aborts.
    pub fn generate(&self, algorithm: Algorithm) -> Result<Manifest> {
        let files = self.authoritative_files()?;

        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            let digest = digest_file(&path.to_native(&self.root), algorithm)?;
            tracing::debug!(path = %path, "Checksummed file");
            entries.push(ManifestEntry { path, digest });
        }

        tracing::info!(
            root = %self.root.display(),
            differ = self.differ.name(),
            %algorithm,
            entries = entries.len(),
            "Generated manifest"
        );
        Manifest::from_entries(algorithm, entries)
    }

    /// Check the tree against `manifest`.
    ///
    /// Every manifest entry is re-digested with the manifest's algorithm.
    /// Vanished files are reported as removed whatever `reconcile_file_list`
    /// says. When reconciling, the differ's file set is compared with the
    /// manifest to find added files, and manifest files that left that set
    /// are reported as removed.
    ///
    /// Per-file problems are collected into the outcome. Only structural
    /// failures (invalid root, unusable differ) return `Err`.
    pub fn verify(&self, manifest: &Manifest, reconcile_file_list: bool) -> Result<VerificationOutcome> {
        ensure_project_root(&self.root)?;

        let algorithm = manifest.algorithm();
        let mut mismatch = ChecksumMismatch::default();
        let mut unavailable = BTreeSet::new();

        for entry in manifest.entries() {
            let native = entry.path.to_native(&self.root);
            match digest_file(&native, algorithm) {
                Ok(actual) if actual == entry.digest => {
                    tracing::debug!(path = %entry.path, "Checksum matched");
                }
                Ok(actual) => {
                    tracing::debug!(path = %entry.path, "Checksum changed");
                    mismatch.changed.push(ContentMismatch {
                        path: entry.path.clone(),
                        expected: entry.digest.clone(),
                        actual,
                    });
                }
                Err(e) if e.is_not_found() => {
                    tracing::debug!(path = %entry.path, "File removed");
                    mismatch.removed.push(entry.path.clone());
                    unavailable.insert(&entry.path);
                }
                Err(e) => {
                    tracing::warn!(path = %entry.path, error = %e, "File unreadable");
                    mismatch.unreadable.push(UnreadableFile {
                        path: entry.path.clone(),
                        reason: source_message(&e),
                    });
                    unavailable.insert(&entry.path);
                }
            }
        }

        if reconcile_file_list {
            let current: BTreeSet<RelativePath> = self.authoritative_files()?.into_iter().collect();

            mismatch.added.extend(
                current
                    .iter()
                    .filter(|path| !manifest.contains(path.as_str()))
                    .cloned(),
            );
            mismatch.removed.extend(
                manifest
                    .entries()
                    .iter()
                    .map(|entry| &entry.path)
                    .filter(|path| {
                        !current.contains(*path)
                            && !unavailable.contains(path)
                            && !self.excluded.contains(*path)
                    })
                    .cloned(),
            );
        }

        let outcome = VerificationOutcome::from_mismatch(mismatch);
        match outcome.mismatch() {
            None => tracing::info!(
                root = %self.root.display(),
                entries = manifest.len(),
                "Verification succeeded"
            ),
            Some(found) => tracing::info!(
                root = %self.root.display(),
                changed = found.changed.len(),
                added = found.added.len(),
                removed = found.removed.len(),
                unreadable = found.unreadable.len(),
                "Verification found discrepancies"
            ),
        }
        Ok(outcome)
    }

    fn authoritative_files(&self) -> Result<Vec<RelativePath>> {
        let mut files = self.differ.enumerate(&self.root)?;
        if !self.excluded.is_empty() {
            files.retain(|path| !self.excluded.contains(path));
        }
        Ok(files)
    }
}

/// The I/O cause of an unreadable file, without the path prefix.
fn source_message(error: &signatory_fs::Error) -> String {
    match error {
        signatory_fs::Error::FileUnreadable { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
