//! Differ selection
//!
//! `auto` is a selection rule over the closed set of differs, not a differ
//! of its own: it looks for SCM markers among the project root's immediate
//! children and falls back to the directory walk when none is found.

use std::path::Path;

use signatory_fs::{ProjectPath, RelativePath};

use crate::provider::{FileExistenceDiffer, ensure_project_root};
use crate::{DirectoryDiffer, Error, GitDiffer, Result};

/// SCM markers checked by auto-detection, in priority order.
const SCM_MARKERS: &[(ProjectPath, Differ)] = &[(ProjectPath::GitDir, Differ::Git(GitDiffer))];

/// The differ requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScmChoice {
    Git,
    Directory,
    #[default]
    Auto,
}

impl ScmChoice {
    /// Every accepted choice, as shown in help text.
    pub const NAMES: [&'static str; 3] = ["git", "directory", "auto"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Directory => "directory",
            Self::Auto => "auto",
        }
    }

    /// Turn the choice into a concrete differ for `root`.
    ///
    /// An explicit choice is honoured as-is. `Auto` inspects `root` once;
    /// the result is not re-evaluated while the differ is in use.
    pub fn resolve(self, root: &Path) -> Result<Differ> {
        let differ = match self {
            Self::Git => Differ::Git(GitDiffer::new()),
            Self::Directory => Differ::Directory(DirectoryDiffer::new()),
            Self::Auto => Differ::detect(root)?,
        };
        tracing::debug!(choice = self.as_str(), differ = differ.name(), "Selected differ");
        Ok(differ)
    }
}

impl std::fmt::Display for ScmChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScmChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "directory" => Ok(Self::Directory),
            "auto" => Ok(Self::Auto),
            _ => Err(Error::UnsupportedScm { name: s.to_string() }),
        }
    }
}

/// The closed set of differs.
#[derive(Debug, Clone, Copy)]
pub enum Differ {
    Git(GitDiffer),
    Directory(DirectoryDiffer),
}

impl Differ {
    /// Pick a differ from the SCM markers present in `root`.
    pub fn detect(root: &Path) -> Result<Self> {
        ensure_project_root(root)?;

        for (marker, differ) in SCM_MARKERS {
            if root.join(marker).exists() {
                tracing::debug!(marker = %marker, "Found SCM marker");
                return Ok(*differ);
            }
        }

        Ok(Self::Directory(DirectoryDiffer::new()))
    }
}

impl FileExistenceDiffer for Differ {
    fn name(&self) -> &'static str {
        match self {
            Self::Git(differ) => differ.name(),
            Self::Directory(differ) => differ.name(),
        }
    }

    fn enumerate(&self, root: &Path) -> Result<Vec<RelativePath>> {
        match self {
            Self::Git(differ) => differ.enumerate(root),
            Self::Directory(differ) => differ.enumerate(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("git", ScmChoice::Git)]
    #[case("directory", ScmChoice::Directory)]
    #[case("AUTO", ScmChoice::Auto)]
    fn test_parse_choice(#[case] raw: &str, #[case] expected: ScmChoice) {
        assert_eq!(raw.parse::<ScmChoice>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_choice() {
        let err = "svn".parse::<ScmChoice>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedScm { ref name } if name == "svn"));
    }

    #[test]
    fn test_names_parse() {
        for name in ScmChoice::NAMES {
            assert_eq!(name.parse::<ScmChoice>().unwrap().as_str(), name);
        }
    }
}
