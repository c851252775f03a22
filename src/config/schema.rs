//! Configuration schema definitions for aiobuild.
//!
//! This module contains the struct definitions that map to the
//! `aiobuild.yml` project file. Every field is optional; an empty file (or
//! no file at all) yields [`ProjectConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AioBuildError, Result};
use crate::requirements::{builtin_requirements, Requirement};
use crate::sections::{known_sections, Section};

/// Root configuration structure for aiobuild.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Descriptive project metadata
    pub meta: Meta,

    /// What gets analysed and packaged
    pub module_info: ModuleInfo,

    /// Interpreter hosting the installer and every tool
    pub interpreter: String,

    /// File receiving injected sections, relative to the project root
    pub target_config: PathBuf,

    /// Extra tool requirements on top of the built-in quality tools
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolConfig>,

    /// Extra sections injected after the built-in ones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionConfig>,

    /// The lint pipeline
    pub lint: LintConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            meta: Meta::default(),
            module_info: ModuleInfo::default(),
            interpreter: default_interpreter(),
            target_config: PathBuf::from("setup.cfg"),
            tools: Vec::new(),
            sections: Vec::new(),
            lint: LintConfig::default(),
        }
    }
}

fn default_interpreter() -> String {
    if cfg!(target_os = "windows") {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

impl ProjectConfig {
    /// Built-in tool requirements followed by the configured extras.
    ///
    /// Extras naming a package that is already required are ignored.
    pub fn tool_requirements(&self) -> Result<Vec<Requirement>> {
        let mut requirements = builtin_requirements();
        for tool in &self.tools {
            let req = Requirement::build(&tool.package, tool.import_check, tool.probe.as_deref())?;
            if !requirements
                .iter()
                .any(|r| r.package_name() == req.package_name())
            {
                requirements.push(req);
            }
        }
        Ok(requirements)
    }

    /// Built-in sections followed by the configured extras.
    pub fn all_sections(&self) -> Vec<Section> {
        let mut sections = known_sections();
        sections.extend(
            self.sections
                .iter()
                .map(|s| Section::new(s.name.clone(), s.body.clone())),
        );
        sections
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.interpreter.trim().is_empty() {
            return Err(invalid("interpreter must not be empty"));
        }
        if self.target_config.as_os_str().is_empty() {
            return Err(invalid("target_config must not be empty"));
        }
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(invalid("section name must not be empty"));
            }
        }
        if self.lint.steps.is_empty() {
            return Err(invalid("lint.steps must name at least one command"));
        }
        for step in &self.lint.steps {
            if step.command.trim().is_empty() {
                return Err(invalid("lint step command must not be empty"));
            }
        }
        self.tool_requirements().map(|_| ())
    }
}

fn invalid(message: &str) -> AioBuildError {
    AioBuildError::ConfigValidationError {
        message: message.to_string(),
    }
}

/// Descriptive project metadata, handed to the packaging step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Project name
    pub name: String,

    /// One-line description
    pub description: String,

    /// README path relative to the project root (none when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_file: Option<PathBuf>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            name: "AIOBuild".to_string(),
            description: "My All-In-One Python build setup".to_string(),
            readme_file: Some(PathBuf::from("README.md")),
        }
    }
}

/// Module layout and runtime requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleInfo {
    /// Module or package path passed to every quality tool
    pub module_path: PathBuf,

    /// Whether the package provides console scripts
    pub is_script: bool,

    /// Console entry points (`name=module:function`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entrypoints: Vec<String>,

    /// Runtime requirements of the project itself
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
}

impl Default for ModuleInfo {
    fn default() -> Self {
        Self {
            module_path: PathBuf::from("."),
            is_script: false,
            entrypoints: Vec::new(),
            requirements: Vec::new(),
        }
    }
}

/// An extra tool to bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Installable package name
    pub package: String,

    /// Probe by import (true) or by executable on PATH (false)
    #[serde(default = "default_true")]
    pub import_check: bool,

    /// Module or executable name to probe (defaults to `package`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<String>,
}

fn default_true() -> bool {
    true
}

/// An extra opaque section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Section name; `[name]` is the presence marker
    pub name: String,

    /// Text appended verbatim
    pub body: String,
}

/// The lint pipeline: an ordered table of command names and policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Steps in execution order
    pub steps: Vec<LintStepConfig>,
}

impl Default for LintConfig {
    fn default() -> Self {
        use FailurePolicy::{Abort, Continue};
        let steps = [
            ("format", Abort),
            ("isort", Abort),
            ("security", Continue),
            ("typecheck", Abort),
            ("analyze", Abort),
        ];
        Self {
            steps: steps
                .into_iter()
                .map(|(command, on_failure)| LintStepConfig {
                    command: command.to_string(),
                    on_failure,
                })
                .collect(),
        }
    }
}

/// One lint step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintStepConfig {
    /// Registered command to run
    pub command: String,

    /// What a failure of this step does to the rest of the pipeline
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

/// What a failing pipeline step does to the steps after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the pipeline and fail.
    #[default]
    Abort,
    /// Log a warning and carry on.
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_setup() {
        let config = ProjectConfig::default();
        assert_eq!(config.meta.name, "AIOBuild");
        assert_eq!(config.meta.readme_file, Some(PathBuf::from("README.md")));
        assert_eq!(config.target_config, PathBuf::from("setup.cfg"));
        assert_eq!(config.module_info.module_path, PathBuf::from("."));
        assert!(!config.module_info.is_script);
        config.validate().unwrap();
    }

    #[test]
    fn default_lint_table_orders_and_policies() {
        let steps = LintConfig::default().steps;
        let table: Vec<_> = steps
            .iter()
            .map(|s| (s.command.as_str(), s.on_failure))
            .collect();
        assert_eq!(
            table,
            [
                ("format", FailurePolicy::Abort),
                ("isort", FailurePolicy::Abort),
                ("security", FailurePolicy::Continue),
                ("typecheck", FailurePolicy::Abort),
                ("analyze", FailurePolicy::Abort),
            ]
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: ProjectConfig = serde_yaml::from_str(
            "module_info:\n  module_path: src/pkg\nlint:\n  steps:\n    - command: analyze\n",
        )
        .unwrap();
        assert_eq!(config.module_info.module_path, PathBuf::from("src/pkg"));
        assert_eq!(config.meta.name, "AIOBuild");
        assert_eq!(config.lint.steps.len(), 1);
        assert_eq!(config.lint.steps[0].on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn failure_policy_parses_snake_case() {
        let step: LintStepConfig =
            serde_yaml::from_str("command: security\non_failure: continue\n").unwrap();
        assert_eq!(step.on_failure, FailurePolicy::Continue);
    }

    #[test]
    fn tool_requirements_append_extras_without_duplicates() {
        let config: ProjectConfig = serde_yaml::from_str(
            "tools:\n  - package: pytest\n  - package: mypy\n  - package: shellcheck\n    import_check: false\n",
        )
        .unwrap();
        let reqs = config.tool_requirements().unwrap();
        let names: Vec<_> = reqs.iter().map(|r| r.package_name()).collect();
        assert_eq!(
            names,
            ["black", "isort", "bandit", "mypy", "pylint", "pytest", "shellcheck"]
        );
        assert!(!reqs[6].requires_import_check());
    }

    #[test]
    fn all_sections_appends_configured_ones() {
        let mut config = ProjectConfig::default();
        config.sections.push(SectionConfig {
            name: "tool:pytest".to_string(),
            body: "[tool:pytest]\n".to_string(),
        });
        let names: Vec<_> = config
            .all_sections()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["isort", "mypy", "flake8", "tool:pytest"]);
    }

    #[test]
    fn empty_interpreter_is_invalid() {
        let config = ProjectConfig {
            interpreter: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AioBuildError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn empty_lint_table_is_invalid() {
        let mut config = ProjectConfig::default();
        config.lint.steps.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_probe_name_is_invalid() {
        let mut config = ProjectConfig::default();
        config.tools.push(ToolConfig {
            package: "ruff".to_string(),
            import_check: true,
            probe: Some(String::new()),
        });
        assert!(config.validate().is_err());
    }
}
