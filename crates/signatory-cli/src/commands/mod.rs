//! Command implementations for signatory-cli

pub mod checksum_manifest;
pub mod completions;
pub mod validate_checksum;

pub use checksum_manifest::run_checksum_manifest;
pub use completions::run_completions;
pub use validate_checksum::run_validate_checksum;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use signatory_fs::{Algorithm, ProjectConfig, ProjectPath, RelativePath};
use signatory_scm::ScmChoice;

use crate::error::Result;

/// Settings for one project after applying flag, environment, config file
/// and default precedence.
#[derive(Debug)]
pub(crate) struct ProjectSettings {
    pub algorithm: Algorithm,
    pub scm: ScmChoice,
    pub config: ProjectConfig,
}

impl ProjectSettings {
    /// Resolve settings for `root`. `algorithm` and `scm` already carry the
    /// flag or environment value when one was given.
    pub fn resolve(root: &Path, algorithm: Option<&str>, scm: Option<&str>) -> Result<Self> {
        let config = ProjectConfig::load(root)?.unwrap_or_default();

        let algorithm: Algorithm = match algorithm.or(config.algorithm.as_deref()) {
            Some(name) => name.parse()?,
            None => Algorithm::default(),
        };
        let scm: ScmChoice = match scm.or(config.scm.as_deref()) {
            Some(name) => name.parse()?,
            None => ScmChoice::default(),
        };

        tracing::debug!(%algorithm, %scm, "Resolved project settings");
        Ok(Self {
            algorithm,
            scm,
            config,
        })
    }

    /// Paths left out of the authoritative file set.
    ///
    /// Always the default manifest and signature names at the root, the
    /// config file's `exclude` list, and each of `manifest_files` (plus its
    /// `.sig` companion) when it lies inside `root`.
    pub fn excluded_paths(&self, root: &Path, manifest_files: &[&Path]) -> Result<Vec<RelativePath>> {
        let mut excluded = vec![
            RelativePath::parse(ProjectPath::ChecksumFile.as_str())?,
            RelativePath::parse(ProjectPath::SignatureFile.as_str())?,
        ];
        for raw in &self.config.exclude {
            excluded.push(RelativePath::parse(raw)?);
        }
        for file in manifest_files {
            for candidate in [file.to_path_buf(), signature_path(file)] {
                if let Some(relative) = relative_to_root(root, &candidate) {
                    excluded.push(relative);
                }
            }
        }
        Ok(excluded)
    }
}

/// The detached signature that sits next to a manifest file.
pub(crate) fn signature_path(manifest_file: &Path) -> PathBuf {
    let mut name = OsString::from(manifest_file.as_os_str());
    name.push(".sig");
    PathBuf::from(name)
}

/// Express `file` relative to `root` if it lies inside it.
///
/// `file` need not exist yet, but its parent directory must.
fn relative_to_root(root: &Path, file: &Path) -> Option<RelativePath> {
    let root = dunce::canonicalize(root).ok()?;
    let name = file.file_name()?;
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let full = dunce::canonicalize(parent).ok()?.join(name);
    RelativePath::strip_root(&root, &full).ok()
}
