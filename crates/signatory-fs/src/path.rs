//! Project-relative path handling
//!
//! Manifests record paths relative to the project root using forward
//! slashes regardless of platform. [`RelativePath`] is the validated form
//! of such a path and the unit every differ and manifest works in.

use std::borrow::Borrow;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// A validated, forward-slash separated path relative to a project root.
///
/// Never absolute, never empty, and never contains `.` or `..` segments,
/// so joining it onto a root cannot escape that root. Ordering is
/// byte-lexicographic on the string form, which is the ordering manifests
/// and differs emit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RelativePath {
    inner: String,
}

impl RelativePath {
    /// Parse a manifest-style path string.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidRelativePath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("path is empty"));
        }
        if raw.starts_with('/') {
            return Err(invalid("path is absolute"));
        }
        if raw.contains(['\n', '\r', '\0']) {
            return Err(invalid("path contains a control character"));
        }
        for segment in raw.split('/') {
            match segment {
                "" => return Err(invalid("path contains an empty segment")),
                "." | ".." => return Err(invalid("path contains a dot segment")),
                _ => {}
            }
        }

        Ok(Self {
            inner: raw.to_string(),
        })
    }

    /// Build from a native relative path made only of normal components.
    pub fn from_native(path: &Path) -> Result<Self> {
        let display = path.to_string_lossy();
        let mut segments = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| Error::InvalidRelativePath {
                        path: display.to_string(),
                        reason: "path is not valid UTF-8".into(),
                    })?;
                    segments.push(name);
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::InvalidRelativePath {
                        path: display.to_string(),
                        reason: "path is not relative to the project root".into(),
                    });
                }
            }
        }

        Self::parse(&segments.join("/"))
    }

    /// Express `path` relative to `root`.
    pub fn strip_root(root: &Path, path: &Path) -> Result<Self> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| Error::InvalidRelativePath {
                path: path.to_string_lossy().into_owned(),
                reason: format!("path is outside {}", root.display()),
            })?;
        Self::from_native(relative)
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Resolve against a project root for I/O.
    pub fn to_native(&self, root: &Path) -> PathBuf {
        let mut native = root.to_path_buf();
        native.extend(self.inner.split('/'));
        native
    }

    /// Remove a leading directory prefix, e.g. `docs/a.md` under `docs`.
    pub fn strip_dir_prefix(&self, prefix: &RelativePath) -> Option<RelativePath> {
        let rest = self.inner.strip_prefix(prefix.as_str())?;
        let rest = rest.strip_prefix('/')?;
        Some(Self {
            inner: rest.to_string(),
        })
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for RelativePath {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::str::FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
