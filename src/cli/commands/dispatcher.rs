//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the CLI to a command

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::runner::DEFAULT_COMMAND;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches the parsed CLI to a command implementation.
pub struct CommandDispatcher<'a> {
    project_root: PathBuf,
    runner: &'a dyn ProcessRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher for `project_root` that spawns processes through
    /// `runner`.
    pub fn new(project_root: PathBuf, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            project_root,
            runner,
        }
    }

    /// Dispatch and execute.
    ///
    /// `--list` wins over a command name; no name means the default command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.list {
            let cmd = super::list::ListCommand::new(&self.project_root, cli.config.clone());
            return cmd.execute(ui);
        }

        let name = cli.command.as_deref().unwrap_or(DEFAULT_COMMAND);
        let cmd = super::run::RunCommand::new(
            &self.project_root,
            name,
            cli.config.clone(),
            cli.skip_bootstrap,
            self.runner,
        );
        cmd.execute(ui)
    }
}
