//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use signatory_scm::ScmChoice;

/// Signatory - Generate and validate checksum manifests for project trees
#[derive(Parser, Debug)]
#[command(name = "signatory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, visible_alias = "debug")]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate a project tree against its checksum manifest
    ///
    /// Exits 0 when every file matches, 2 when files changed, appeared or
    /// disappeared, and 1 when validation could not run.
    ///
    /// Examples:
    ///   signatory validate-checksum .
    ///   signatory validate-checksum --checksum-file dist/sha256sum.txt my-collection
    ///   signatory validate-checksum --ignore-file-list-differences --json .
    ValidateChecksum {
        /// Manifest to validate against [default: sha256sum.txt]
        #[arg(long, env = "SIGNATORY_CHECKSUM_FILE")]
        checksum_file: Option<PathBuf>,

        /// Differ used to list project files
        #[arg(
            long,
            env = "SIGNATORY_SCM",
            value_parser = PossibleValuesParser::new(ScmChoice::NAMES)
        )]
        scm: Option<String>,

        /// Checksum algorithm the manifest was written with
        #[arg(long, env = "SIGNATORY_ALGORITHM")]
        algorithm: Option<String>,

        /// Only check the files listed in the manifest
        #[arg(long)]
        ignore_file_list_differences: bool,

        /// Output the outcome as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Root of the project to validate
        project_root: PathBuf,
    },

    /// Generate a checksum manifest for a project tree
    ///
    /// Examples:
    ///   signatory checksum-manifest . > sha256sum.txt
    ///   signatory checksum-manifest --output sha256sum.txt my-collection
    ///   signatory checksum-manifest --algorithm sha512 --scm directory .
    ChecksumManifest {
        /// Checksum algorithm (sha256, sha512, sha1 or md5)
        #[arg(long, env = "SIGNATORY_ALGORITHM")]
        algorithm: Option<String>,

        /// File to write the manifest to, or `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Differ used to list project files
        #[arg(
            long,
            env = "SIGNATORY_SCM",
            value_parser = PossibleValuesParser::new(ScmChoice::NAMES)
        )]
        scm: Option<String>,

        /// Root of the project to checksum
        project_root: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   signatory completions bash > ~/.local/share/bash-completion/completions/signatory
    ///   signatory completions zsh > ~/.zfunc/_signatory
    ///   signatory completions fish > ~/.config/fish/completions/signatory.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
