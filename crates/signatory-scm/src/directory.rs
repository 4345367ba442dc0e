//! Plain recursive directory walk

use std::path::Path;

use signatory_fs::RelativePath;
use walkdir::WalkDir;

use crate::provider::{FileExistenceDiffer, ensure_project_root};
use crate::{Error, Result};

/// Lists every regular file under the project root.
///
/// No ignore rules are applied and symlinks are not followed, so a symlink
/// is never listed as a file. Used when the project is not under a
/// recognised SCM, or when requested explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryDiffer;

impl DirectoryDiffer {
    pub fn new() -> Self {
        Self
    }
}

impl FileExistenceDiffer for DirectoryDiffer {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn enumerate(&self, root: &Path) -> Result<Vec<RelativePath>> {
        ensure_project_root(root)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|source| Error::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            files.push(RelativePath::strip_root(root, entry.path())?);
        }

        files.sort();
        tracing::debug!(root = %root.display(), count = files.len(), "Enumerated directory");
        Ok(files)
    }
}
