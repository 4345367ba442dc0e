//! Signatory CLI
//!
//! Generates checksum manifests for project trees and validates trees
//! against them.
//!
//! Exit codes: `0` success, `1` the command could not run, `2` the tree
//! does not match its manifest.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not failures; usage errors share code 1
            // with the other precondition failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = execute_command(cli.command) {
        if !e.is_reported() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(e.exit_code());
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ValidateChecksum {
            checksum_file,
            scm,
            algorithm,
            ignore_file_list_differences,
            json,
            project_root,
        } => commands::run_validate_checksum(
            &project_root,
            checksum_file.as_deref(),
            algorithm.as_deref(),
            scm.as_deref(),
            !ignore_file_list_differences,
            json,
        ),
        Commands::ChecksumManifest {
            algorithm,
            output,
            scm,
            project_root,
        } => commands::run_checksum_manifest(
            &project_root,
            &output,
            algorithm.as_deref(),
            scm.as_deref(),
        ),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
