//! Run command implementation.
//!
//! Running a tool command first makes sure every declared tool is installed
//! and every known configuration section exists in the target config file.
//! Informational commands (`tools`, `metadata`) skip both.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::load_project_config;
use crate::error::Result;
use crate::requirements::{BootstrapReport, Bootstrapper, Installer, Prober};
use crate::runner::{CommandRegistry, Orchestrator};
use crate::sections::SectionWriter;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    project_root: PathBuf,
    name: String,
    config_path: Option<PathBuf>,
    skip_bootstrap: bool,
    runner: &'a dyn ProcessRunner,
}

impl<'a> RunCommand<'a> {
    /// Create a run command for the registered command `name`.
    pub fn new(
        project_root: &Path,
        name: &str,
        config_path: Option<PathBuf>,
        skip_bootstrap: bool,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            name: name.to_string(),
            config_path,
            skip_bootstrap,
            runner,
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_project_config(&self.project_root, self.config_path.as_deref())?;
        let registry = CommandRegistry::with_builtins(&config, &self.project_root)?;

        // Resolve before bootstrapping so a typo never triggers an install.
        let entry = registry.require(&self.name)?;

        if entry.action.needs_bootstrap() {
            if self.skip_bootstrap {
                debug!("Skipping tool bootstrap");
            } else {
                let requirements = config.tool_requirements()?;
                let prober = Prober::new(self.runner, &config.interpreter)
                    .current_dir(&self.project_root);
                let installer = Installer::new(self.runner, &config.interpreter);
                let report = Bootstrapper::from_parts(prober, installer)
                    .self_install_packages(&requirements, ui)?;
                if let BootstrapReport::Installed { packages } = report {
                    ui.success(&format!("Installed {}", packages.join(", ")));
                }
            }

            let writer = SectionWriter::new(self.project_root.join(&config.target_config));
            writer.inject_all(&config.all_sections(), ui)?;
        }

        Orchestrator::new(&registry, self.runner, &config, &self.project_root)
            .run(&self.name, ui)?;

        Ok(CommandResult::success())
    }
}
