//! Dependency installation.
//!
//! Installs packages through `pip`, hosted by the configured interpreter,
//! one installer invocation per package.

use tracing::{debug, info};

use crate::error::{AioBuildError, Result};
use crate::shell::{CommandOptions, Invocation, ProcessRunner};

/// Build the invocation that installs `package` with `interpreter`.
pub fn pip_install(interpreter: &str, package: &str) -> Invocation {
    Invocation::new(interpreter).args(["-m", "pip", "install", package])
}

/// Installs packages via the external package installer.
pub struct Installer<'a> {
    runner: &'a dyn ProcessRunner,
    interpreter: String,
}

impl<'a> Installer<'a> {
    /// Create an installer using `interpreter -m pip`.
    pub fn new(runner: &'a dyn ProcessRunner, interpreter: &str) -> Self {
        Self {
            runner,
            interpreter: interpreter.to_string(),
        }
    }

    /// Install each package in order.
    ///
    /// Stops at the first non-zero installer status with
    /// [`AioBuildError::InstallationError`]; later packages are not
    /// attempted.
    pub fn install(&self, packages: &[&str]) -> Result<()> {
        for package in packages {
            info!("Installing {}", package);
            let invocation = pip_install(&self.interpreter, package);
            let result = self.runner.run(&invocation, &CommandOptions::inherited())?;

            if !result.success {
                debug!("{} failed with {:?}", invocation, result.exit_code);
                return Err(AioBuildError::InstallationError {
                    package: package.to_string(),
                    code: result.exit_code,
                });
            }
        }
        Ok(())
    }
}
