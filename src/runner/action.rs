//! Leaf actions.
//!
//! A leaf action runs exactly one external tool and reports how it went as
//! a value. Whether a failure stops anything is decided by the caller.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::shell::{CommandOptions, Invocation, ProcessRunner};
use crate::ui::UserInterface;

/// One external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Human-readable tool name (e.g. "isort").
    pub tool: String,
    /// The process to run.
    pub invocation: Invocation,
}

impl ToolInvocation {
    /// Run `interpreter -m module args...`.
    pub fn python_module<I, S>(interpreter: &str, module: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tool: module.to_string(),
            invocation: Invocation::new(interpreter).arg("-m").arg(module).args(args),
        }
    }

    /// Run the tool with the terminal attached and report the outcome.
    ///
    /// Errors only when the process cannot be started.
    pub fn run(
        &self,
        command: &str,
        runner: &dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<ActionOutcome> {
        ui.show_command(&self.invocation.to_string());
        info!("Running {} ({})", command, self.tool);

        let result = runner.run(&self.invocation, &CommandOptions::inherited())?;
        let status = if result.success {
            ActionStatus::Succeeded
        } else {
            ActionStatus::Failed {
                code: result.exit_code,
            }
        };
        debug!("{} finished: {:?}", command, status);

        Ok(ActionOutcome {
            command: command.to_string(),
            status,
            duration: result.duration,
        })
    }
}

/// How a leaf action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// The tool exited 0.
    Succeeded,
    /// The tool exited non-zero (`None` when killed by a signal).
    Failed { code: Option<i32> },
}

/// The result of running one leaf action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Registered command name.
    pub command: String,
    /// Exit status classification.
    pub status: ActionStatus,
    /// Wall-clock time spent in the tool.
    pub duration: Duration,
}

impl ActionOutcome {
    /// Whether the tool succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ActionStatus::Succeeded)
    }

    /// The failing exit code, if the action failed.
    pub fn failure_code(&self) -> Option<Option<i32>> {
        match self.status {
            ActionStatus::Succeeded => None,
            ActionStatus::Failed { code } => Some(code),
        }
    }
}
