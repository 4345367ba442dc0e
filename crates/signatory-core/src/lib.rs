//! Checksum manifest engine for signatory
//!
//! Builds checksum manifests for a project tree and verifies a tree
//! against a recorded manifest, reporting changed, added, removed and
//! unreadable files in a single pass.
//!
//! # Example
//!
//! ```rust,no_run
//! use signatory_core::ChecksumFile;
//! use signatory_fs::Algorithm;
//! use signatory_scm::ScmChoice;
//!
//! # fn main() -> signatory_core::Result<()> {
//! let root = std::path::Path::new("my-collection");
//! let differ = ScmChoice::Auto.resolve(root)?;
//! let checksum = ChecksumFile::new(root, differ);
//!
//! let manifest = checksum.generate(Algorithm::Sha256)?;
//! let outcome = checksum.verify(&manifest, true)?;
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod checksum_file;
pub mod error;
pub mod manifest;
pub mod outcome;

pub use bundle::ManifestBundle;
pub use checksum_file::ChecksumFile;
pub use error::{Error, Result};
pub use manifest::{Manifest, ManifestEntry};
pub use outcome::{ChecksumMismatch, ContentMismatch, UnreadableFile, VerificationOutcome};
