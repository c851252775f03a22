//! Tool bootstrap.
//!
//! Composes the [`Prober`] and [`Installer`]: probe, install whatever is
//! missing, re-probe exactly once, and fail if anything is still missing.
//! The rest of the pipeline assumes every declared tool is present, so an
//! unresolved requirement is fatal.
//!
//! An installer failure is fatal too and propagates as-is: there is no
//! re-probe and no "still missing" diagnostic after a failed install.

use tracing::{debug, info};

use crate::error::{AioBuildError, Result};
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::descriptor::Requirement;
use super::installer::Installer;
use super::probe::Prober;

/// What the bootstrap step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapReport {
    /// Everything was already present; nothing was installed.
    AlreadySatisfied,
    /// These packages were installed and now probe as present.
    Installed { packages: Vec<String> },
}

/// Ensures all declared requirements are present.
pub struct Bootstrapper<'a> {
    prober: Prober<'a>,
    installer: Installer<'a>,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper probing and installing with `interpreter`.
    pub fn new(runner: &'a dyn ProcessRunner, interpreter: &str) -> Self {
        Self::from_parts(
            Prober::new(runner, interpreter),
            Installer::new(runner, interpreter),
        )
    }

    /// Create a bootstrapper from an explicit prober and installer.
    pub fn from_parts(prober: Prober<'a>, installer: Installer<'a>) -> Self {
        Self { prober, installer }
    }

    /// Install any missing requirement, with one retry probe.
    ///
    /// Returns [`AioBuildError::UnresolvedRequirements`] naming exactly the
    /// packages still missing after the install round.
    pub fn self_install_packages(
        &self,
        requirements: &[Requirement],
        ui: &mut dyn UserInterface,
    ) -> Result<BootstrapReport> {
        let missing = self.collect_missing(requirements)?;
        if missing.is_empty() {
            debug!("All {} tool requirements present", requirements.len());
            return Ok(BootstrapReport::AlreadySatisfied);
        }

        ui.message(
            "Some tools needed by aiobuild are missing. Attempting to auto-install them now",
        );
        info!("Missing tools: {}", missing.join(", "));

        let packages: Vec<&str> = missing.iter().map(String::as_str).collect();
        self.installer.install(&packages)?;

        let still_missing = self.collect_missing(requirements)?;
        if !still_missing.is_empty() {
            return Err(AioBuildError::UnresolvedRequirements {
                missing: still_missing,
            });
        }

        Ok(BootstrapReport::Installed { packages: missing })
    }

    fn collect_missing(&self, requirements: &[Requirement]) -> Result<Vec<String>> {
        self.prober
            .missing(requirements)
            .map(|req| req.map(|r| r.package_name().to_string()))
            .collect()
    }
}
