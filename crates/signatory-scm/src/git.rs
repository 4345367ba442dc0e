//! Git index backed file discovery

use std::collections::BTreeSet;
use std::path::Path;

use git2::Repository;
use signatory_fs::RelativePath;

use crate::provider::{FileExistenceDiffer, ensure_project_root};
use crate::{Error, Result};

/// File mode git uses for submodule entries.
const GITLINK_MODE: u32 = 0o160000;

/// File mode git uses for symbolic links.
const SYMLINK_MODE: u32 = 0o120000;

/// Lists the files git knows about: committed or staged, minus anything
/// matched by the repository's ignore rules.
///
/// Submodules and symbolic links are skipped, matching [`crate::DirectoryDiffer`]
/// which only lists regular files.
///
/// The repository is discovered from the project root, so a root that is a
/// subdirectory of a work tree lists only the entries beneath it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDiffer;

impl GitDiffer {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, root: &Path) -> Result<Repository> {
        Repository::discover(root).map_err(|e| Error::DifferUnavailable {
            differ: self.name(),
            root: root.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

impl FileExistenceDiffer for GitDiffer {
    fn name(&self) -> &'static str {
        "git"
    }

    fn enumerate(&self, root: &Path) -> Result<Vec<RelativePath>> {
        ensure_project_root(root)?;

        let repo = self.open(root)?;
        let workdir = repo.workdir().ok_or_else(|| Error::DifferUnavailable {
            differ: self.name(),
            root: root.to_path_buf(),
            message: "repository is bare".into(),
        })?;

        let canonical_root =
            dunce::canonicalize(root).map_err(|e| Error::ProjectRootInvalid {
                path: root.to_path_buf(),
                reason: e.to_string(),
            })?;
        let canonical_workdir = dunce::canonicalize(workdir)
            .map_err(|e| signatory_fs::Error::io(workdir, e))?;
        let prefix = if canonical_root == canonical_workdir {
            None
        } else {
            Some(RelativePath::strip_root(&canonical_workdir, &canonical_root)?)
        };

        let index = repo.index()?;
        let mut files = BTreeSet::new();

        for entry in index.iter() {
            if entry.mode == GITLINK_MODE || entry.mode == SYMLINK_MODE {
                continue;
            }

            let Ok(raw) = std::str::from_utf8(&entry.path) else {
                tracing::warn!(
                    path = %String::from_utf8_lossy(&entry.path),
                    "Skipping index entry with non UTF-8 path"
                );
                continue;
            };

            if repo.is_path_ignored(Path::new(raw))? {
                tracing::debug!(path = %raw, "Skipping ignored index entry");
                continue;
            }

            let path = RelativePath::parse(raw)?;
            let path = match &prefix {
                Some(prefix) => match path.strip_dir_prefix(prefix) {
                    Some(inner) => inner,
                    None => continue,
                },
                None => path,
            };
            files.insert(path);
        }

        tracing::debug!(
            root = %root.display(),
            count = files.len(),
            "Enumerated git index"
        );
        Ok(files.into_iter().collect())
    }
}
