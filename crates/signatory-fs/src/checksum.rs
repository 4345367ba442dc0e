//! Streaming file digests
//!
//! Every manifest uses exactly one [`Algorithm`]. Files are hashed through a
//! fixed-size buffer so large files never have to fit in memory, and digests
//! are rendered as lowercase hex.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use digest::Digest;
use serde::Serialize;

use crate::{Error, Result};

/// Read buffer used when streaming a file into a hasher.
const BUFFER_SIZE: usize = 64 * 1024;

/// Supported checksum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Sha256,
    Sha512,
    /// Legacy mode, kept for reading old manifests.
    Sha1,
    /// Legacy mode, kept for reading old manifests.
    Md5,
}

impl Algorithm {
    /// Every supported algorithm, default first.
    pub const ALL: [Algorithm; 4] = [Self::Sha256, Self::Sha512, Self::Sha1, Self::Md5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
        }
    }

    /// Length of a digest rendered as hex.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha512 => 128,
            Self::Sha1 => 40,
            Self::Md5 => 32,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "sha1" => Ok(Self::Sha1),
            "md5" => Ok(Self::Md5),
            _ => Err(Error::UnsupportedAlgorithm { name: s.to_string() }),
        }
    }
}

/// Compute the digest of in-memory content.
pub fn digest_bytes(content: &[u8], algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Sha256 => hex::encode(sha2::Sha256::digest(content)),
        Algorithm::Sha512 => hex::encode(sha2::Sha512::digest(content)),
        Algorithm::Sha1 => hex::encode(sha1::Sha1::digest(content)),
        Algorithm::Md5 => hex::encode(md5::Md5::digest(content)),
    }
}

/// Compute the digest of a file's contents.
///
/// # Errors
///
/// Returns [`Error::FileUnreadable`] if the path does not exist, is not a
/// regular file, or cannot be read.
pub fn digest_file(path: &Path, algorithm: Algorithm) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
    let metadata = file.metadata().map_err(|e| Error::unreadable(path, e))?;
    if !metadata.is_file() {
        return Err(Error::unreadable(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    let digest = match algorithm {
        Algorithm::Sha256 => hash_reader::<sha2::Sha256>(file),
        Algorithm::Sha512 => hash_reader::<sha2::Sha512>(file),
        Algorithm::Sha1 => hash_reader::<sha1::Sha1>(file),
        Algorithm::Md5 => hash_reader::<md5::Md5>(file),
    }
    .map_err(|e| Error::unreadable(path, e))?;

    tracing::trace!(path = %path.display(), %algorithm, "Digested file");
    Ok(digest)
}

fn hash_reader<D: Digest>(mut reader: impl Read) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hex::encode(hasher.finalize()))
}
