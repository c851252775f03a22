//! Command registry.
//!
//! Maps command names to actions. Composite actions hold the *names* of
//! their steps and resolve them through the registry when they run, so the
//! lint table can change without touching any tool action.

use std::path::Path;

use crate::config::{FailurePolicy, ProjectConfig};
use crate::error::{AioBuildError, Result};

use super::action::ToolInvocation;

/// Command run when none is named.
pub const DEFAULT_COMMAND: &str = "build";

/// One step of a composite action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    /// Name of a registered leaf command.
    pub command: String,
    /// What a failure of this step does to the rest of the pipeline.
    pub policy: FailurePolicy,
}

/// An ordered sequence of leaf commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// Steps in execution order.
    pub steps: Vec<PipelineStep>,
    /// Leaf command run after every step has passed (always aborting).
    pub finally: Option<String>,
}

/// What a command does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run one external tool.
    Tool(ToolInvocation),
    /// Run other registered commands in order.
    Composite(Pipeline),
    /// Print the probe outcome of every declared tool.
    ToolReport,
    /// Print the declared package metadata as JSON.
    Metadata,
}

impl Action {
    /// Whether tools must be bootstrapped and sections injected first.
    pub fn needs_bootstrap(&self) -> bool {
        matches!(self, Action::Tool(_) | Action::Composite(_))
    }
}

/// A registered command.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    /// Unique command name.
    pub name: String,
    /// One-line description for `--list`.
    pub about: String,
    /// What running the command does.
    pub action: Action,
}

impl CommandEntry {
    /// Create an entry.
    pub fn new(name: &str, about: &str, action: Action) -> Self {
        Self {
            name: name.to_string(),
            about: about.to_string(),
            action,
        }
    }
}

/// Registered commands, in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in command for `config`.
    ///
    /// Leaf tools run from `project_root` against the configured module
    /// path, hosted by the configured interpreter.
    pub fn with_builtins(config: &ProjectConfig, project_root: &Path) -> Result<Self> {
        let py = config.interpreter.as_str();
        let target = config.module_info.module_path.to_string_lossy().to_string();
        let tool = |module: &str, args: Vec<String>| {
            let mut action = ToolInvocation::python_module(py, module, args);
            action.invocation = action.invocation.current_dir(project_root);
            Action::Tool(action)
        };

        let mut registry = Self::new();
        registry.register(CommandEntry::new(
            "build",
            "Build a wheel into dist/",
            tool(
                "pip",
                vec![
                    "wheel".into(),
                    "--no-deps".into(),
                    "--wheel-dir".into(),
                    "dist".into(),
                    ".".into(),
                ],
            ),
        ))?;
        registry.register(CommandEntry::new(
            "format",
            "Format code with black",
            tool("black", vec![target.clone()]),
        ))?;
        registry.register(CommandEntry::new(
            "isort",
            "Sort imports with isort",
            tool("isort", vec![target.clone()]),
        ))?;
        registry.register(CommandEntry::new(
            "security",
            "Scan for security issues with bandit",
            tool("bandit", vec!["-r".into(), target.clone()]),
        ))?;
        registry.register(CommandEntry::new(
            "typecheck",
            "Type-check with mypy",
            tool("mypy", vec![target.clone()]),
        ))?;
        registry.register(CommandEntry::new(
            "analyze",
            "Statically analyze with pylint",
            tool("pylint", vec![target]),
        ))?;
        registry.register(CommandEntry::new(
            "lint",
            "Run the lint pipeline, then build",
            Action::Composite(Pipeline {
                steps: config
                    .lint
                    .steps
                    .iter()
                    .map(|s| PipelineStep {
                        command: s.command.clone(),
                        policy: s.on_failure,
                    })
                    .collect(),
                finally: Some(DEFAULT_COMMAND.to_string()),
            }),
        ))?;
        registry.register(CommandEntry::new(
            "tools",
            "Show which required tools are installed",
            Action::ToolReport,
        ))?;
        registry.register(CommandEntry::new(
            "metadata",
            "Print package metadata as JSON",
            Action::Metadata,
        ))?;

        registry.validate()?;
        Ok(registry)
    }

    /// Register a command. Names must be unique.
    pub fn register(&mut self, entry: CommandEntry) -> Result<()> {
        if self.get(&entry.name).is_some() {
            return Err(AioBuildError::ConfigValidationError {
                message: format!("command '{}' is registered twice", entry.name),
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up a command, failing with [`AioBuildError::UnknownCommand`].
    pub fn require(&self, name: &str) -> Result<&CommandEntry> {
        self.get(name).ok_or_else(|| AioBuildError::UnknownCommand {
            name: name.to_string(),
        })
    }

    /// Iterate over registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Check that every composite step names a registered leaf command.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            let Action::Composite(pipeline) = &entry.action else {
                continue;
            };
            let names = pipeline
                .steps
                .iter()
                .map(|s| &s.command)
                .chain(pipeline.finally.iter());
            for name in names {
                match self.get(name).map(|e| &e.action) {
                    Some(Action::Tool(_)) => {}
                    Some(_) => {
                        return Err(AioBuildError::ConfigValidationError {
                            message: format!(
                                "'{}' step '{}' is not a tool command",
                                entry.name, name
                            ),
                        })
                    }
                    None => {
                        return Err(AioBuildError::ConfigValidationError {
                            message: format!(
                                "'{}' step '{}' is not a registered command",
                                entry.name, name
                            ),
                        })
                    }
                }
            }
        }
        Ok(())
    }
}
