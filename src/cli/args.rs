//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Commands are not clap
//! subcommands: the positional name is looked up in the
//! [`CommandRegistry`](crate::runner::CommandRegistry) at run time.

use clap::Parser;
use std::path::PathBuf;

/// aiobuild - bootstrap Python quality tools, configure them, lint and build.
#[derive(Debug, Default, Parser)]
#[command(name = "aiobuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run (default: build). Use --list to see all commands
    pub command: Option<String>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides <project>/aiobuild.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not probe for or install missing tools
    #[arg(long, env = "AIOBUILD_SKIP_BOOTSTRAP")]
    pub skip_bootstrap: bool,

    /// List registered commands and exit
    #[arg(long)]
    pub list: bool,

    /// Echo every command before running it
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Hide status text; command output, warnings and errors still print
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
