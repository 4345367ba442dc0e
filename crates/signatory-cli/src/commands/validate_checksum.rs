//! Validate-checksum command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use signatory_core::{ChecksumFile, ManifestBundle, VerificationOutcome};
use signatory_fs::ProjectPath;

use super::ProjectSettings;
use crate::error::{CliError, Result};

/// Run the validate-checksum command
///
/// `checksum_file` comes from the flag or environment. Without it the
/// config file's `checksum_file` (relative to the project root) is used,
/// then `sha256sum.txt` in the working directory.
pub fn run_validate_checksum(
    project_root: &Path,
    checksum_file: Option<&Path>,
    algorithm: Option<&str>,
    scm: Option<&str>,
    reconcile_file_list: bool,
    json: bool,
) -> Result<()> {
    let settings = ProjectSettings::resolve(project_root, algorithm, scm)?;

    let checksum_file: PathBuf = match (checksum_file, &settings.config.checksum_file) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(configured)) => project_root.join(configured),
        (None, None) => PathBuf::from(ProjectPath::ChecksumFile.as_str()),
    };

    if !checksum_file.exists() {
        return Err(CliError::user(format!(
            "Checksum file does not exist: {}",
            checksum_file.display()
        )));
    }

    // Signatures are checked by a separate collaborator, not here
    let bundle = ManifestBundle::read(&checksum_file, None)?;

    let excluded = settings.excluded_paths(project_root, &[checksum_file.as_path()])?;
    let differ = settings.scm.resolve(project_root)?;
    let checksum = ChecksumFile::new(project_root, differ)
        .with_algorithm(settings.algorithm)
        .with_excluded(excluded);

    let manifest = checksum.parse(bundle.manifest_text()?)?;
    let outcome = checksum.verify(&manifest, reconcile_file_list)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            VerificationOutcome::Success => {
                println!("{}", "Checksum validation SUCCEEDED!".green().bold());
            }
            VerificationOutcome::Mismatch(mismatch) => {
                println!("{}", "Checksum validation FAILED!".red().bold());
                print!("{mismatch}");
            }
        }
    }

    match outcome.mismatch() {
        Some(mismatch) => Err(CliError::ValidationFailed {
            count: mismatch.len(),
        }),
        None => Ok(()),
    }
}
