//! Filesystem layer for signatory
//!
//! Provides manifest-relative paths, the streaming digest engine, atomic
//! writes and project config loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{Algorithm, digest_bytes, digest_file};
pub use config::ProjectConfig;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::RelativePath;
