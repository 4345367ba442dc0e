//! Raw manifest bytes for signature validation
//!
//! Signing and signature checks live outside this crate. They operate on
//! the exact bytes of the manifest file plus an optional detached
//! signature, which is what [`ManifestBundle`] carries.

use std::path::Path;

use signatory_fs::io;

use crate::{Error, Manifest, Result};

/// A manifest file's bytes and its optional detached signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestBundle {
    manifest: Vec<u8>,
    signature: Option<Vec<u8>>,
}

impl ManifestBundle {
    /// Read a checksum file and, if given, its detached signature.
    pub fn read(checksum_file: &Path, signature_file: Option<&Path>) -> Result<Self> {
        let manifest = io::read_bytes(checksum_file)?;
        let signature = signature_file.map(io::read_bytes).transpose()?;

        tracing::debug!(
            path = %checksum_file.display(),
            bytes = manifest.len(),
            signed = signature.is_some(),
            "Read manifest bundle"
        );
        Ok(Self {
            manifest,
            signature,
        })
    }

    /// Bundle a freshly generated manifest, unsigned.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            manifest: manifest.serialize().into_bytes(),
            signature: None,
        }
    }

    pub fn manifest_bytes(&self) -> &[u8] {
        &self.manifest
    }

    pub fn signature_bytes(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    /// Decode the manifest bytes as UTF-8 text.
    pub fn manifest_text(&self) -> Result<&str> {
        std::str::from_utf8(&self.manifest).map_err(|e| {
            let valid = &self.manifest[..e.valid_up_to()];
            Error::ManifestMalformed {
                line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
                message: "manifest is not valid UTF-8".into(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signatory_test_utils::TestTree;

    #[test]
    fn test_read_with_signature() {
        let tree = TestTree::new();
        tree.write("sha256sum.txt", "manifest");
        tree.write("sha256sum.txt.sig", [1u8, 2, 3]);

        let bundle = ManifestBundle::read(
            &tree.path("sha256sum.txt"),
            Some(&tree.path("sha256sum.txt.sig")),
        )
        .unwrap();

        assert_eq!(bundle.manifest_bytes(), b"manifest");
        assert_eq!(bundle.signature_bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_missing_checksum_file_is_not_found() {
        let tree = TestTree::new();
        let err = ManifestBundle::read(&tree.path("sha256sum.txt"), None).unwrap_err();
        assert!(matches!(err, Error::Fs(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let tree = TestTree::new();
        tree.write("sha256sum.txt", b"ok line\nsecond \xff line\n");

        let bundle = ManifestBundle::read(&tree.path("sha256sum.txt"), None).unwrap();
        let err = bundle.manifest_text().unwrap_err();
        assert!(matches!(err, Error::ManifestMalformed { line: 2, .. }));
    }
}
