//! Release workflow tests
//!
//! Each module follows one way a project moves between manifest generation
//! and verification.

use pretty_assertions::assert_eq;
use signatory_core::{ChecksumFile, Manifest, ManifestBundle};
use signatory_fs::{Algorithm, RelativePath, io};
use signatory_scm::{DirectoryDiffer, GitDiffer, ScmChoice};
use signatory_test_utils::TestTree;
use signatory_test_utils::git::{commit_all, fake_git_dir, real_git_repo, stage};

fn listed(manifest: &Manifest) -> Vec<&str> {
    manifest.entries().iter().map(|e| e.path.as_str()).collect()
}

fn rel(raw: &str) -> RelativePath {
    RelativePath::parse(raw).unwrap()
}

// =============================================================================
// Git checkouts
// =============================================================================

mod git_checkout {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn staged_files_join_the_manifest_before_commit() {
        let tree = TestTree::with_files(&[("a.txt", "hi")]);
        let repo = real_git_repo(tree.root());
        commit_all(&repo, "Initial commit");

        tree.write("b.txt", "bye");
        stage(&repo, &["b.txt"]);

        let checksum = ChecksumFile::new(tree.root(), GitDiffer::new());
        let manifest = checksum.generate(Algorithm::Sha256).unwrap();
        assert_eq!(listed(&manifest), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn subdirectory_root_lists_relative_to_itself() {
        let tree = TestTree::with_files(&[
            ("README.md", "top"),
            ("collections/acme/web/galaxy.yml", "name: web"),
            ("collections/acme/web/roles/site/tasks/main.yml", "- debug:"),
        ]);
        let repo = real_git_repo(tree.root());
        commit_all(&repo, "Initial commit");

        let root = tree.path("collections/acme/web");
        let checksum = ChecksumFile::new(&root, GitDiffer::new());
        let manifest = checksum.generate(Algorithm::Sha256).unwrap();

        assert_eq!(
            listed(&manifest),
            vec!["galaxy.yml", "roles/site/tasks/main.yml"]
        );
        assert!(checksum.verify(&manifest, true).unwrap().is_success());
    }

    #[test]
    fn newly_ignored_file_leaves_the_set() {
        let tree = TestTree::with_files(&[("a.txt", "hi"), ("cache.tmp", "scratch")]);
        let repo = real_git_repo(tree.root());
        commit_all(&repo, "Initial commit");

        let checksum = ChecksumFile::new(tree.root(), GitDiffer::new());
        let manifest = checksum.generate(Algorithm::Sha256).unwrap();
        assert_eq!(listed(&manifest), vec!["a.txt", "cache.tmp"]);

        let mut index = repo.index().unwrap();
        index.remove_path(std::path::Path::new("cache.tmp")).unwrap();
        index.write().unwrap();
        tree.write(".gitignore", "*.tmp\n");
        stage(&repo, &[".gitignore"]);

        let outcome = checksum.verify(&manifest, true).unwrap();
        let mismatch = outcome.mismatch().unwrap();
        assert_eq!(mismatch.added, vec![rel(".gitignore")]);
        assert_eq!(mismatch.removed, vec![rel("cache.tmp")]);
    }

    #[test]
    fn fake_git_marker_without_repository_is_unavailable() {
        let tree = TestTree::with_files(&[("a.txt", "hi")]);
        fake_git_dir(tree.root());

        let differ = ScmChoice::Auto.resolve(tree.root()).unwrap();
        let checksum = ChecksumFile::new(tree.root(), differ);
        assert!(checksum.generate(Algorithm::Sha256).is_err());
    }
}

// =============================================================================
// Plain directories
// =============================================================================

mod plain_directory {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_written_into_root_does_not_list_itself() {
        let tree = TestTree::with_files(&[("a.txt", "hi"), ("b.txt", "bye")]);
        let checksum = ChecksumFile::new(tree.root(), DirectoryDiffer::new())
            .with_excluded([rel("sha256sum.txt"), rel("sha256sum.txt.sig")]);

        let manifest = checksum.generate(Algorithm::Sha256).unwrap();
        io::write_atomic(
            &tree.path("sha256sum.txt"),
            ManifestBundle::from_manifest(&manifest).manifest_bytes(),
        )
        .unwrap();
        tree.write("sha256sum.txt.sig", "-----BEGIN PGP SIGNATURE-----");

        let regenerated = checksum.generate(Algorithm::Sha256).unwrap();
        assert_eq!(regenerated, manifest);
        assert!(checksum.verify(&manifest, true).unwrap().is_success());
    }

    #[test]
    fn bundle_carries_detached_signature_bytes() {
        let tree = TestTree::with_files(&[("a.txt", "hi")]);
        let checksum = ChecksumFile::new(tree.root(), DirectoryDiffer::new());
        let manifest = checksum.generate(Algorithm::Sha256).unwrap();
        let text = manifest.serialize();

        tree.write("sha256sum.txt", &text);
        tree.write("sha256sum.txt.sig", [0x89u8, 0x01, 0x33]);

        let bundle = ManifestBundle::read(
            &tree.path("sha256sum.txt"),
            Some(&tree.path("sha256sum.txt.sig")),
        )
        .unwrap();
        assert_eq!(bundle.manifest_bytes(), text.as_bytes());
        assert_eq!(bundle.signature_bytes(), Some(&[0x89u8, 0x01, 0x33][..]));
    }

    #[test]
    fn manifest_from_another_algorithm_is_rejected() {
        let tree = TestTree::with_files(&[("a.txt", "hi")]);
        let checksum = ChecksumFile::new(tree.root(), DirectoryDiffer::new());
        let text = checksum.generate(Algorithm::Sha1).unwrap().serialize();

        let strict = ChecksumFile::new(tree.root(), DirectoryDiffer::new())
            .with_algorithm(Algorithm::Sha256);
        assert!(strict.parse(&text).is_err());
    }

    #[test]
    fn repeated_generation_is_byte_identical() {
        let tree = TestTree::with_files(&[
            ("z.txt", "last"),
            ("A.txt", "upper"),
            ("m/n.txt", "nested"),
            ("m-n.txt", "dash"),
        ]);
        let checksum = ChecksumFile::new(tree.root(), DirectoryDiffer::new());

        let first = checksum.generate(Algorithm::Sha256).unwrap().serialize();
        let second = checksum.generate(Algorithm::Sha256).unwrap().serialize();
        assert_eq!(first, second);

        let paths: Vec<&str> = first
            .lines()
            .filter_map(|line| line.split_once("  ").map(|(_, path)| path))
            .collect();
        assert_eq!(paths, vec!["A.txt", "m-n.txt", "m/n.txt", "z.txt"]);
    }
}
