//! Error types for aiobuild operations.
//!
//! This module defines [`AioBuildError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AioBuildError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AioBuildError::Other`) for unexpected errors
//! - A module that simply cannot be imported is not an error: it is reported
//!   as [`ProbeOutcome::NotLoadable`](crate::requirements::ProbeOutcome)
//! - Every error reaching `main` is printed and mapped to exit status 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for aiobuild operations.
#[derive(Debug, Error)]
pub enum AioBuildError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A tool module exists but raised something other than an import
    /// error while loading.
    #[error("Probing '{probe}' failed unexpectedly: {message}")]
    ProbeFault { probe: String, message: String },

    /// The package installer returned a non-zero status.
    #[error("Failed to install '{package}' (installer {})", describe_exit(.code))]
    InstallationError { package: String, code: Option<i32> },

    /// Requirements still missing after the install round.
    #[error(
        "Unable to install the following required tools. Please install them manually: {}",
        .missing.join(", ")
    )]
    UnresolvedRequirements { missing: Vec<String> },

    /// An external quality tool failed and its failure was not swallowed.
    #[error("Command '{command}' failed with {}", describe_exit(.code))]
    ToolFailed { command: String, code: Option<i32> },

    /// No command with this name is registered.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A subprocess could not be started or waited on.
    #[error("Could not run command: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for aiobuild operations.
pub type Result<T> = std::result::Result<T, AioBuildError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (killed by signal)".to_string(),
    }
}
