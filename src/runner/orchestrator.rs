//! Command execution.
//!
//! Runs a registered command by name. Leaf tools report a typed outcome;
//! only the orchestrator turns a failure into an error, consulting the
//! pipeline's policy table for composite commands.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::{FailurePolicy, ProjectConfig};
use crate::error::{AioBuildError, Result};
use crate::requirements::{ProbeOutcome, Prober};
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::action::ActionOutcome;
use super::metadata::PackageMetadata;
use super::registry::{Action, CommandRegistry, Pipeline};

/// What running a command produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Every leaf action that ran, in order.
    pub outcomes: Vec<ActionOutcome>,
    /// Commands that failed under a `continue` policy.
    pub tolerated: Vec<String>,
}

impl RunReport {
    /// Names of the commands that ran, in order.
    pub fn executed(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.command.as_str()).collect()
    }
}

/// Runs commands from a [`CommandRegistry`].
pub struct Orchestrator<'a> {
    registry: &'a CommandRegistry,
    runner: &'a dyn ProcessRunner,
    config: &'a ProjectConfig,
    project_root: &'a Path,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator.
    pub fn new(
        registry: &'a CommandRegistry,
        runner: &'a dyn ProcessRunner,
        config: &'a ProjectConfig,
        project_root: &'a Path,
    ) -> Self {
        Self {
            registry,
            runner,
            config,
            project_root,
        }
    }

    /// Run the command registered as `name`.
    pub fn run(&self, name: &str, ui: &mut dyn UserInterface) -> Result<RunReport> {
        let entry = self.registry.require(name)?;
        debug!("Dispatching '{}'", name);

        let mut report = RunReport::default();
        match &entry.action {
            Action::Tool(_) => {
                self.run_leaf(name, FailurePolicy::Abort, &mut report, ui)?;
            }
            Action::Composite(pipeline) => {
                ui.show_header(name);
                self.run_pipeline(pipeline, &mut report, ui)?;
                if report.tolerated.is_empty() {
                    ui.success(&format!("{} passed", name));
                } else {
                    ui.warning(&format!(
                        "{} passed with tolerated failures: {}",
                        name,
                        report.tolerated.join(", ")
                    ));
                }
            }
            Action::ToolReport => self.show_tool_report(ui)?,
            Action::Metadata => {
                let metadata = PackageMetadata::collect(self.config, self.project_root)?;
                ui.output(&metadata.to_json()?);
            }
        }
        Ok(report)
    }

    fn run_pipeline(
        &self,
        pipeline: &Pipeline,
        report: &mut RunReport,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        for step in &pipeline.steps {
            self.run_leaf(&step.command, step.policy, report, ui)?;
        }
        if let Some(last) = &pipeline.finally {
            self.run_leaf(last, FailurePolicy::Abort, report, ui)?;
        }
        Ok(())
    }

    /// Run one leaf command by lookup and apply `policy` to its outcome.
    fn run_leaf(
        &self,
        name: &str,
        policy: FailurePolicy,
        report: &mut RunReport,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let entry = self.registry.require(name)?;
        let Action::Tool(tool) = &entry.action else {
            return Err(AioBuildError::ConfigValidationError {
                message: format!("'{}' is not a tool command", name),
            });
        };

        let outcome = tool.run(name, self.runner, ui)?;
        let failure = outcome.failure_code();
        report.outcomes.push(outcome);

        let Some(code) = failure else {
            return Ok(());
        };
        match policy {
            FailurePolicy::Abort => {
                debug!("{} failed, aborting", name);
                Err(AioBuildError::ToolFailed {
                    command: name.to_string(),
                    code,
                })
            }
            FailurePolicy::Continue => {
                warn!("{} failed with {:?}, continuing", name, code);
                ui.warning(&format!("{} failed, continuing", name));
                report.tolerated.push(name.to_string());
                Ok(())
            }
        }
    }

    fn show_tool_report(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let requirements = self.config.tool_requirements()?;
        let prober =
            Prober::new(self.runner, &self.config.interpreter).current_dir(self.project_root);
        for result in prober.report(&requirements)? {
            match &result.outcome {
                ProbeOutcome::Loaded => {
                    ui.success(&result.requirement);
                }
                ProbeOutcome::NotLoadable => {
                    ui.warning(&format!("{} is not installed", result.requirement));
                }
                ProbeOutcome::Faulted { message } => {
                    ui.error(&format!("{} is broken: {}", result.requirement, message));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintStepConfig;
    use crate::requirements::probe::NOT_LOADABLE_EXIT;
    use crate::shell::RecordingRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    struct Fixture {
        config: ProjectConfig,
        registry: CommandRegistry,
        root: TempDir,
    }

    impl Fixture {
        fn new(config: ProjectConfig) -> Self {
            let root = TempDir::new().unwrap();
            let registry = CommandRegistry::with_builtins(&config, root.path()).unwrap();
            Self {
                config,
                registry,
                root,
            }
        }

        fn run(&self, runner: &RecordingRunner, name: &str, ui: &mut MockUI) -> Result<RunReport> {
            Orchestrator::new(&self.registry, runner, &self.config, self.root.path()).run(name, ui)
        }
    }

    #[test]
    fn lint_runs_every_step_then_build() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let report = fx.run(&runner, "lint", &mut ui).unwrap();

        assert_eq!(
            report.executed(),
            ["format", "isort", "security", "typecheck", "analyze", "build"]
        );
        assert!(report.tolerated.is_empty());
        assert_eq!(ui.successes(), ["lint passed"]);
    }

    #[test]
    fn aborting_failure_stops_remaining_steps() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        runner.respond("-m isort", &[1]);
        let mut ui = MockUI::new();

        let err = fx.run(&runner, "lint", &mut ui).unwrap_err();

        assert!(matches!(
            err,
            AioBuildError::ToolFailed { ref command, code: Some(1) } if command == "isort"
        ));
        assert!(runner.calls_matching("-m mypy").is_empty());
        assert!(runner.calls_matching("-m pylint").is_empty());
        assert!(runner.calls_matching("-m pip").is_empty());
        // The error itself is reported once, by the caller.
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn continue_policy_tolerates_failure_and_still_builds() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        runner.respond("-m bandit", &[1]);
        let mut ui = MockUI::new();

        let report = fx.run(&runner, "lint", &mut ui).unwrap();

        assert_eq!(report.tolerated, ["security"]);
        assert_eq!(report.executed().last(), Some(&"build"));
        assert_eq!(ui.warnings().len(), 2);
    }

    #[test]
    fn policy_table_comes_from_config() {
        let mut config = ProjectConfig::default();
        config.lint.steps = vec![LintStepConfig {
            command: "analyze".to_string(),
            on_failure: FailurePolicy::Continue,
        }];
        let fx = Fixture::new(config);
        let runner = RecordingRunner::new();
        runner.respond("-m pylint", &[30]);

        let report = fx.run(&runner, "lint", &mut MockUI::new()).unwrap();

        assert_eq!(report.executed(), ["analyze", "build"]);
        assert_eq!(report.tolerated, ["analyze"]);
    }

    #[test]
    fn failing_build_fails_lint() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        runner.respond("-m pip wheel", &[1]);

        let err = fx.run(&runner, "lint", &mut MockUI::new()).unwrap_err();

        assert!(matches!(err, AioBuildError::ToolFailed { ref command, .. } if command == "build"));
    }

    #[test]
    fn leaf_command_failure_is_an_error() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        runner.respond("-m black", &[123]);

        let err = fx.run(&runner, "format", &mut MockUI::new()).unwrap_err();

        assert!(matches!(err, AioBuildError::ToolFailed { code: Some(123), .. }));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn unknown_command_is_reported() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        let err = fx.run(&runner, "deploy", &mut MockUI::new()).unwrap_err();
        assert!(matches!(err, AioBuildError::UnknownCommand { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn tool_report_lists_each_probe_outcome() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        runner.respond("mypy", &[NOT_LOADABLE_EXIT]);
        runner.respond_with_stderr("pylint", &[1], "ImportError? no, KeyError: 'x'");
        let mut ui = MockUI::new();

        fx.run(&runner, "tools", &mut ui).unwrap();

        assert_eq!(ui.successes(), ["black", "isort", "bandit"]);
        assert_eq!(ui.warnings(), ["mypy is not installed"]);
        assert_eq!(ui.errors().len(), 1);
        assert!(runner.calls_matching("pip install").is_empty());
        assert!(runner
            .calls()
            .iter()
            .all(|inv| inv.cwd.as_deref() == Some(fx.root.path())));
    }

    #[test]
    fn metadata_prints_json() {
        let fx = Fixture::new(ProjectConfig::default());
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        fx.run(&runner, "metadata", &mut ui).unwrap();

        assert!(ui.outputs()[0].contains("\"name\": \"AIOBuild\""));
        assert!(ui.messages().is_empty());
        assert!(runner.calls().is_empty());
    }
}
