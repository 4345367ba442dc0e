//! Git repository fixtures at three realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};

/// Creates a minimal `.git` directory structure **without** initialising a real
/// git repository.
///
/// Realism level: **FAKE**: directory structure only, no git object store.
///
/// Use for: differ auto-detection tests that only look for the marker.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository using `git2` (empty index, no commits).
///
/// Realism level: **REAL**: valid git object store, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> Repository {
    Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Stages specific paths (relative to the work tree) in the index.
///
/// # Panics
/// Panics if the index cannot be updated.
pub fn stage(repo: &Repository, paths: &[&str]) {
    let mut index = repo.index().expect("stage: failed to open index");
    for path in paths {
        index
            .add_path(Path::new(path))
            .unwrap_or_else(|e| panic!("stage: failed to add {path}: {e}"));
    }
    index.write().expect("stage: failed to write index");
}

/// Stages everything not ignored and commits it.
///
/// Realism level: **REAL WITH HISTORY**: one commit containing the current
/// work tree, honouring `.gitignore`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(repo: &Repository, message: &str) {
    let mut index = repo.index().expect("commit_all: failed to open index");
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .expect("commit_all: failed to stage files");
    index.write().expect("commit_all: failed to write index");

    let tree_id = index.write_tree().expect("commit_all: failed to write tree");
    let tree = repo.find_tree(tree_id).expect("commit_all: tree missing");
    let signature =
        Signature::now("Test User", "test@example.com").expect("commit_all: bad signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("commit_all: failed to commit");
}
