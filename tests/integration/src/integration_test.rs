//! End-to-end integration test for the manifest lifecycle
//!
//! This test exercises the complete flow: config loading -> differ
//! selection -> manifest generation -> atomic write -> bundle read ->
//! verification.

use pretty_assertions::assert_eq;
use signatory_core::{ChecksumFile, Error, ManifestBundle, VerificationOutcome};
use signatory_fs::{Algorithm, ProjectConfig, ProjectPath, RelativePath, io};
use signatory_scm::{FileExistenceDiffer, ScmChoice};
use signatory_test_utils::TestTree;

/// Set up a collection-shaped project with a config file
fn setup_collection() -> TestTree {
    let tree = TestTree::with_files(&[
        ("galaxy.yml", "namespace: acme\nname: web\n"),
        ("plugins/modules/deploy.py", "def main(): pass\n"),
        ("roles/site/tasks/main.yml", "- debug: msg=hi\n"),
        ("build/acme-web-1.0.0.tar.gz", "archive"),
    ]);
    tree.write(
        ".signatory.toml",
        "algorithm = \"sha512\"\nexclude = [\"build/acme-web-1.0.0.tar.gz\"]\n",
    );
    tree
}

fn checksum_for(tree: &TestTree) -> ChecksumFile {
    let config = ProjectConfig::load(tree.root()).unwrap().unwrap();
    let algorithm: Algorithm = config.algorithm.as_deref().unwrap().parse().unwrap();
    let differ = ScmChoice::Auto.resolve(tree.root()).unwrap();

    let excluded = config
        .exclude
        .iter()
        .map(|raw| RelativePath::parse(raw).unwrap())
        .chain([RelativePath::parse(ProjectPath::ChecksumFile.as_str()).unwrap()]);

    ChecksumFile::new(tree.root(), differ)
        .with_algorithm(algorithm)
        .with_excluded(excluded)
}

#[test]
fn test_generate_write_read_verify() {
    let tree = setup_collection();
    let checksum = checksum_for(&tree);
    assert_eq!(checksum.differ().name(), "directory");

    // Generate and persist
    let manifest = checksum.generate(checksum.algorithm()).unwrap();
    let manifest_path = tree.path(ProjectPath::ChecksumFile.as_str());
    io::write_atomic(&manifest_path, ManifestBundle::from_manifest(&manifest).manifest_bytes())
        .unwrap();

    let listed: Vec<&str> = manifest.entries().iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        listed,
        vec![
            ".signatory.toml",
            "galaxy.yml",
            "plugins/modules/deploy.py",
            "roles/site/tasks/main.yml",
        ]
    );
    assert!(manifest.entries().iter().all(|e| e.digest.len() == 128));

    // Read back and verify
    let bundle = ManifestBundle::read(&manifest_path, None).unwrap();
    let parsed = checksum.parse(bundle.manifest_text().unwrap()).unwrap();
    assert_eq!(parsed, manifest);

    let outcome = checksum.verify(&parsed, true).unwrap();
    assert_eq!(outcome, VerificationOutcome::Success);
    outcome.into_result().unwrap();
}

#[test]
fn test_tampering_surfaces_as_error() {
    let tree = setup_collection();
    let checksum = checksum_for(&tree);
    let manifest = checksum.generate(checksum.algorithm()).unwrap();

    tree.write("plugins/modules/deploy.py", "def main(): exfiltrate()\n");
    tree.write("plugins/modules/backdoor.py", "evil");

    let err = checksum
        .verify(&manifest, true)
        .unwrap()
        .into_result()
        .unwrap_err();

    match err {
        Error::ChecksumMismatch(mismatch) => {
            assert_eq!(mismatch.changed.len(), 1);
            assert_eq!(mismatch.changed[0].path.as_str(), "plugins/modules/deploy.py");
            assert_eq!(mismatch.added.len(), 1);
            assert_eq!(mismatch.added[0].as_str(), "plugins/modules/backdoor.py");

            let report = mismatch.to_string();
            assert!(report.contains("changed: plugins/modules/deploy.py"));
            assert!(report.contains("added: plugins/modules/backdoor.py"));
        }
        other => panic!("expected ChecksumMismatch, got {other:?}"),
    }
}

#[test]
fn test_outcome_serializes_for_tooling() {
    let tree = setup_collection();
    let checksum = checksum_for(&tree);
    let manifest = checksum.generate(checksum.algorithm()).unwrap();
    tree.remove("galaxy.yml");

    let outcome = checksum.verify(&manifest, false).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "mismatch");
    assert_eq!(json["removed"], serde_json::json!(["galaxy.yml"]));
    assert_eq!(json["changed"], serde_json::json!([]));
}
