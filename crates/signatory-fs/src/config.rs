//! Per-project settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, ProjectPath, Result, io};

/// Per-project defaults read from `.signatory.toml`.
///
/// Every field is optional; command-line flags and environment variables
/// take precedence over whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Checksum algorithm name, e.g. `"sha256"`
    pub algorithm: Option<String>,

    /// Differ choice: `"git"`, `"directory"` or `"auto"`
    pub scm: Option<String>,

    /// Manifest location, relative to the project root
    pub checksum_file: Option<PathBuf>,

    /// Extra project-relative paths left out of the manifest
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    /// Load `.signatory.toml` from a project root if present.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = root.join(ProjectPath::ConfigFile);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "Loading project config");
        Self::from_toml(&path, &io::read_text(&path)?).map(Some)
    }

    /// Parse config text; `path` is only used in error messages.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
