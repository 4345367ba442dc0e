//! Checksum manifest text format
//!
//! One entry per line, `<hex-digest>  <relative/path>`, newline terminated,
//! no header. The algorithm is not recorded in the file; the caller supplies
//! it and every digest must have exactly that algorithm's length.

use std::collections::HashMap;

use serde::Serialize;
use signatory_fs::{Algorithm, RelativePath};

use crate::{Error, Result};

/// Separator between digest and path on a manifest line
const SEPARATOR: &str = "  ";

/// A single manifest line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Project-relative path, unique within a manifest
    pub path: RelativePath,
    /// Lowercase hex digest of the file content
    pub digest: String,
}

/// An immutable, ordered set of manifest entries sharing one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    algorithm: Algorithm,
    entries: Vec<ManifestEntry>,
    index: HashMap<RelativePath, usize>,
}

impl Manifest {
    /// Build a manifest from entries, keeping their order.
    ///
    /// Entries are checked the same way parsed lines are: digests must match
    /// the algorithm and paths must be unique. Digests are lowercased. Errors
    /// report the 1-based position of the offending entry as its line.
    pub fn from_entries(algorithm: Algorithm, mut entries: Vec<ManifestEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter_mut().enumerate() {
            let line = position + 1;
            validate_digest(&entry.digest, algorithm, line)?;
            entry.digest.make_ascii_lowercase();
            if index.insert(entry.path.clone(), position).is_some() {
                return Err(Error::DuplicateManifestEntry {
                    line,
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(Self {
            algorithm,
            entries,
            index,
        })
    }

    /// Parse manifest text.
    ///
    /// Blank lines are skipped. Any other line that is not a valid
    /// `<digest>  <path>` pair rejects the whole manifest.
    pub fn parse(text: &str, algorithm: Algorithm) -> Result<Self> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (digest, path) =
                line.split_once(SEPARATOR)
                    .ok_or_else(|| Error::ManifestMalformed {
                        line: line_no,
                        message: "expected '<digest>  <path>'".into(),
                    })?;

            validate_digest(digest, algorithm, line_no)?;
            let path = RelativePath::parse(path).map_err(|e| Error::ManifestMalformed {
                line: line_no,
                message: e.to_string(),
            })?;

            if index.contains_key(&path) {
                return Err(Error::DuplicateManifestEntry {
                    line: line_no,
                    path: path.to_string(),
                });
            }
            index.insert(path.clone(), entries.len());
            entries.push(ManifestEntry {
                path,
                digest: digest.to_ascii_lowercase(),
            });
        }

        tracing::debug!(entries = entries.len(), %algorithm, "Parsed manifest");
        Ok(Self {
            algorithm,
            entries,
            index,
        })
    }

    /// Render the manifest in stored order.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(
            self.entries
                .iter()
                .map(|e| e.digest.len() + SEPARATOR.len() + e.path.as_str().len() + 1)
                .sum(),
        );
        for entry in &self.entries {
            out.push_str(&entry.digest);
            out.push_str(SEPARATOR);
            out.push_str(entry.path.as_str());
            out.push('\n');
        }
        out
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by path.
    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        self.index.get(path).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }
}

fn validate_digest(digest: &str, algorithm: Algorithm, line: usize) -> Result<()> {
    if digest.len() != algorithm.hex_len() {
        return Err(Error::ManifestMalformed {
            line,
            message: format!(
                "digest has {} characters, {algorithm} needs {}",
                digest.len(),
                algorithm.hex_len()
            ),
        });
    }
    if !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::ManifestMalformed {
            line,
            message: "digest is not hexadecimal".into(),
        });
    }
    Ok(())
}
