//! Dependency probing.
//!
//! Decides which [`Requirement`]s are missing from the current environment.
//! Import-checked requirements are probed by asking the configured Python
//! interpreter to import the module in a child process; the rest are probed
//! by looking for an executable on PATH.
//!
//! The import probe only classifies `ImportError` (and its subclass
//! `ModuleNotFoundError`) as "not loadable". A module that is found but
//! blows up while loading is reported as [`ProbeOutcome::Faulted`] so a
//! broken install is never mistaken for an absent one.
//!
//! # Example
//!
//! ```
//! use aiobuild::requirements::{Prober, Requirement};
//! use aiobuild::shell::RecordingRunner;
//!
//! let runner = RecordingRunner::new();
//! runner.respond("pylint", &[3]);
//!
//! let reqs = vec![Requirement::python("mypy"), Requirement::python("pylint")];
//! let prober = Prober::new(&runner, "python3");
//! let missing: Vec<_> = prober
//!     .missing(&reqs)
//!     .map(|r| r.unwrap().package_name().to_string())
//!     .collect();
//! assert_eq!(missing, ["pylint"]);
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AioBuildError, Result};
use crate::shell::{CommandOptions, Invocation, ProcessRunner};

use super::descriptor::Requirement;
use super::status::{ProbeOutcome, ProbeResult};

/// Exit status the import probe uses for "module not loadable".
pub const NOT_LOADABLE_EXIT: i32 = 3;

const IMPORT_PROBE_SCRIPT: &str = "import importlib, sys
try:
    importlib.import_module(sys.argv[1])
except ImportError:
    sys.exit(3)
";

/// Build the invocation that tries to import `module` with `interpreter`.
pub fn import_probe(interpreter: &str, module: &str) -> Invocation {
    Invocation::new(interpreter)
        .arg("-c")
        .arg(IMPORT_PROBE_SCRIPT)
        .arg(module)
}

/// Probes requirements against the current environment.
pub struct Prober<'a> {
    runner: &'a dyn ProcessRunner,
    interpreter: String,
    path_entries: Vec<PathBuf>,
    cwd: Option<PathBuf>,
}

impl<'a> Prober<'a> {
    /// Create a prober using the process PATH for executable lookups.
    pub fn new(runner: &'a dyn ProcessRunner, interpreter: &str) -> Self {
        Self::with_path(runner, interpreter, parse_system_path())
    }

    /// Create a prober with explicit PATH entries.
    pub fn with_path(
        runner: &'a dyn ProcessRunner,
        interpreter: &str,
        path_entries: Vec<PathBuf>,
    ) -> Self {
        Self {
            runner,
            interpreter: interpreter.to_string(),
            path_entries,
            cwd: None,
        }
    }

    /// Run import probes from `dir`, the directory the tools later run in.
    ///
    /// `python -c` puts its working directory first on `sys.path`, so this
    /// decides which local modules can shadow installed ones.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Probe a single requirement.
    ///
    /// Errors only when the interpreter itself cannot be run.
    pub fn probe(&self, requirement: &Requirement) -> Result<ProbeOutcome> {
        let outcome = if requirement.requires_import_check() {
            self.probe_import(requirement.probe_name())?
        } else if resolve_tool_path(requirement.probe_name(), &self.path_entries).is_some() {
            ProbeOutcome::Loaded
        } else {
            ProbeOutcome::NotLoadable
        };

        debug!(
            "Probed {} ({}): {:?}",
            requirement.package_name(),
            requirement.probe_name(),
            outcome
        );
        Ok(outcome)
    }

    fn probe_import(&self, module: &str) -> Result<ProbeOutcome> {
        let mut invocation = import_probe(&self.interpreter, module);
        if let Some(dir) = &self.cwd {
            invocation = invocation.current_dir(dir);
        }
        let result = self.runner.run(&invocation, &CommandOptions::captured())?;

        Ok(match result.exit_code {
            Some(0) => ProbeOutcome::Loaded,
            Some(NOT_LOADABLE_EXIT) => ProbeOutcome::NotLoadable,
            code => ProbeOutcome::Faulted {
                message: last_line(&result.stderr)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("interpreter exited with {:?}", code)),
            },
        })
    }

    /// Lazily yield the requirements that are missing, in input order.
    ///
    /// Each call probes from scratch. A faulted probe yields
    /// [`AioBuildError::ProbeFault`] instead of the requirement.
    pub fn missing<'r>(&self, requirements: &'r [Requirement]) -> Missing<'_, 'r> {
        Missing {
            prober: self,
            requirements: requirements.iter(),
        }
    }

    /// Probe every requirement and report each outcome.
    pub fn report(&self, requirements: &[Requirement]) -> Result<Vec<ProbeResult>> {
        requirements
            .iter()
            .map(|req| {
                Ok(ProbeResult {
                    requirement: req.package_name().to_string(),
                    probe_name: req.probe_name().to_string(),
                    outcome: self.probe(req)?,
                })
            })
            .collect()
    }
}

/// Iterator over missing requirements, see [`Prober::missing`].
pub struct Missing<'p, 'r> {
    prober: &'p Prober<'p>,
    requirements: std::slice::Iter<'r, Requirement>,
}

impl<'r> Iterator for Missing<'_, 'r> {
    type Item = Result<&'r Requirement>;

    fn next(&mut self) -> Option<Self::Item> {
        for req in self.requirements.by_ref() {
            match self.prober.probe(req) {
                Ok(ProbeOutcome::Loaded) => continue,
                Ok(ProbeOutcome::NotLoadable) => return Some(Ok(req)),
                Ok(ProbeOutcome::Faulted { message }) => {
                    return Some(Err(AioBuildError::ProbeFault {
                        probe: req.probe_name().to_string(),
                        message,
                    }))
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|l| !l.is_empty())
}

/// Parse the current process PATH into entries.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "exe" | "cmd" | "bat"))
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = dir.join(format!("{}.exe", tool));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
