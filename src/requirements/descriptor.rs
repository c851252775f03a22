//! Requirement descriptors.
//!
//! A [`Requirement`] names a developer tool aiobuild needs before it can
//! lint or build: the package to install and how to tell whether it is
//! already present.

use crate::error::{AioBuildError, Result};

/// A tool dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    package_name: String,
    requires_import_check: bool,
    probe_name: String,
}

impl Requirement {
    /// A Python package verified by importing a module of the same name.
    ///
    /// Intended for static names; use [`Requirement::build`] for
    /// user-supplied ones.
    pub fn python(package_name: &'static str) -> Self {
        debug_assert!(!package_name.is_empty());
        Self {
            package_name: package_name.to_string(),
            requires_import_check: true,
            probe_name: package_name.to_string(),
        }
    }

    /// Build a requirement, validating the probe name.
    ///
    /// `probe_name` defaults to `package_name` when `None`. An empty
    /// package name or an explicitly empty probe name is rejected.
    pub fn build(
        package_name: &str,
        requires_import_check: bool,
        probe_name: Option<&str>,
    ) -> Result<Self> {
        let package_name = package_name.trim();
        if package_name.is_empty() {
            return Err(AioBuildError::ConfigValidationError {
                message: "requirement package name is empty".to_string(),
            });
        }

        let probe_name = probe_name.map(str::trim).unwrap_or(package_name);
        if probe_name.is_empty() {
            return Err(AioBuildError::ConfigValidationError {
                message: format!("requirement '{}' has an empty probe name", package_name),
            });
        }

        Ok(Self {
            package_name: package_name.to_string(),
            requires_import_check,
            probe_name: probe_name.to_string(),
        })
    }

    /// The installable package identifier.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Whether presence is verified by importing [`probe_name`](Self::probe_name).
    pub fn requires_import_check(&self) -> bool {
        self.requires_import_check
    }

    /// Identifier used for the import attempt or PATH lookup. Never empty.
    pub fn probe_name(&self) -> &str {
        &self.probe_name
    }
}

/// The tools every aiobuild project needs.
///
/// Formatter, import sorter, security scanner, type checker and static
/// analyzer, in lint order.
pub fn builtin_requirements() -> Vec<Requirement> {
    ["black", "isort", "bandit", "mypy", "pylint"]
        .into_iter()
        .map(Requirement::python)
        .collect()
}
