//! Checksum-manifest command implementation

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use signatory_core::{ChecksumFile, ManifestBundle};
use signatory_fs::io;

use super::ProjectSettings;
use crate::error::Result;

/// Output value meaning stdout
const STDOUT: &str = "-";

/// Run the checksum-manifest command
pub fn run_checksum_manifest(
    project_root: &Path,
    output: &Path,
    algorithm: Option<&str>,
    scm: Option<&str>,
) -> Result<()> {
    let settings = ProjectSettings::resolve(project_root, algorithm, scm)?;
    let to_stdout = output.as_os_str() == STDOUT;

    let manifest_files = if to_stdout { Vec::new() } else { vec![output] };
    let excluded = settings.excluded_paths(project_root, &manifest_files)?;

    let differ = settings.scm.resolve(project_root)?;
    let manifest = ChecksumFile::new(project_root, differ)
        .with_excluded(excluded)
        .generate(settings.algorithm)?;
    let bundle = ManifestBundle::from_manifest(&manifest);

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bundle.manifest_bytes())?;
        stdout.flush()?;
    } else {
        io::write_atomic(output, bundle.manifest_bytes())?;
        println!(
            "{} Wrote {} {} entries to {}",
            "OK".green().bold(),
            manifest.len(),
            settings.algorithm.to_string().cyan(),
            output.display()
        );
    }

    Ok(())
}
