//! List command implementation.
//!
//! `aiobuild --list` shows every registered command and, for the lint
//! pipeline, its steps with their failure policies.

use std::path::{Path, PathBuf};

use crate::config::{load_project_config, FailurePolicy};
use crate::error::Result;
use crate::runner::{Action, CommandRegistry, DEFAULT_COMMAND};
use crate::ui::theme::AioTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_project_config(&self.project_root, self.config_path.as_deref())?;
        let registry = CommandRegistry::with_builtins(&config, &self.project_root)?;
        let theme = AioTheme::new();

        ui.output(&format!("  {}", theme.highlight.apply_to("Commands:")));
        for entry in registry.iter() {
            let default = if entry.name == DEFAULT_COMMAND {
                format!(" {}", theme.dim.apply_to("(default)"))
            } else {
                String::new()
            };
            ui.output(&format!(
                "    {:<10} {}{}",
                entry.name, entry.about, default
            ));

            if let Action::Composite(pipeline) = &entry.action {
                for step in &pipeline.steps {
                    let policy = match step.policy {
                        FailurePolicy::Abort => "abort",
                        FailurePolicy::Continue => "continue",
                    };
                    ui.output(&format!(
                        "      {} {}",
                        step.command,
                        theme.dim.apply_to(format!("(on failure: {})", policy))
                    ));
                }
                if let Some(last) = &pipeline.finally {
                    ui.output(&format!("      {}", last));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
