//! Differ trait for project file enumeration

use std::path::Path;

use signatory_fs::RelativePath;

use crate::{Error, Result};

/// Produces the authoritative file set for a project root.
///
/// Implementations must return paths sorted byte-lexicographically and
/// free of duplicates, so that two calls against an unchanged tree yield
/// identical sequences. Nothing is cached between calls.
pub trait FileExistenceDiffer {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// List the files under `root` that belong in a manifest.
    ///
    /// Fails with [`Error::ProjectRootInvalid`] when `root` is missing or
    /// not a directory; never returns an empty set in that case.
    fn enumerate(&self, root: &Path) -> Result<Vec<RelativePath>>;
}

/// Check that `root` exists and is a directory.
pub fn ensure_project_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|e| Error::ProjectRootInvalid {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(Error::ProjectRootInvalid {
            path: root.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    Ok(())
}
