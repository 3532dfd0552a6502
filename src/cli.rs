//! Command-line interface definition.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI entry point for dots.
///
/// Help and version are handled by the application so they share the
/// logger's output and coloring, hence clap's own flags are disabled.
#[derive(Parser, Debug)]
#[command(
    name = "dots",
    about = "Keep a version-controlled dotfiles directory in sync with the home directory",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dotfiles files directory (DOTS_DOTFILES_FILES_DIR takes precedence)
    #[arg(long = "dotfilesFilesDir", value_name = "PATH")]
    pub dotfiles_files_dir: Option<PathBuf>,

    /// Display the help menu
    #[arg(short, long)]
    pub help: bool,

    /// Display the version
    #[arg(long)]
    pub version: bool,

    /// Print the home and dotfiles files directories
    #[arg(long = "printEnv")]
    pub print_env: bool,

    /// Color output
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub color: bool,

    /// Show debug output on the console
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Diff the dotfiles files against home
    Diff,
    /// Copy dotfiles files into home
    Apply {
        /// A file or directory inside the dotfiles files directory
        path: Option<PathBuf>,
    },
    /// Copy home files into the dotfiles files directory
    Adopt {
        /// A file or directory inside home
        path: Option<PathBuf>,
    },
    /// Anything else; reported as not found
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Command {
    /// Name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Diff => "diff",
            Self::Apply { .. } => "apply",
            Self::Adopt { .. } => "adopt",
            Self::External(args) => args.first().map_or("", String::as_str),
        }
    }

    /// Stem of the log file for this command; unknown commands share `dots`.
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::Apply { .. } => "apply",
            Self::Adopt { .. } => "adopt",
            Self::External(_) => "dots",
        }
    }
}
