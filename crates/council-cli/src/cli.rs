//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Council - keep your expert council in sync across AI coding tools
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "COUNCIL_PROJECT")]
    pub project: Option<PathBuf>,

    /// Council root, overriding the project configuration
    #[arg(long, global = true, env = "COUNCIL_ROOT")]
    pub council_root: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options of the sync command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Sync only this target, ignoring configuration and detection
    #[arg(short, long)]
    pub target: Option<String>,

    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Remove stale generated files and deprecated layouts
    #[arg(long)]
    pub clean: bool,

    /// Overwrite files at managed paths that council did not generate
    #[arg(long)]
    pub force: bool,

    /// Show a unified diff for every updated file
    #[arg(long)]
    pub diff: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize the council into every configured or detected tool
    ///
    /// Examples:
    ///   council sync                   # Detected tools
    ///   council sync --target claude   # Only Claude Code
    ///   council sync --dry-run --diff  # Preview with diffs
    ///   council sync --clean           # Also remove stale and deprecated files
    Sync(SyncArgs),

    /// List supported tools and whether they are detected
    Targets {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the experts in the council
    Experts {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show setup instructions for a tool
    Doc {
        /// Tool name (see `council targets`)
        target: String,
    },

    /// List every path council writes to or used to write to
    CleanPaths {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove every path council manages from the project
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,

        /// List what would be removed without removing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   council completions bash > ~/.local/share/bash-completion/completions/council
    ///   council completions zsh > ~/.zfunc/_council
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
