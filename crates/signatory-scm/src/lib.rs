//! Source-control aware file discovery for signatory
//!
//! A differ answers "which files belong in the manifest for this project
//! root". Two strategies exist behind one interface: the git index and a
//! plain recursive directory walk.

pub mod directory;
pub mod error;
pub mod git;
pub mod provider;
pub mod select;

pub use directory::DirectoryDiffer;
pub use error::{Error, Result};
pub use git::GitDiffer;
pub use provider::FileExistenceDiffer;
pub use select::{Differ, ScmChoice};
