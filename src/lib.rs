//! aiobuild - a self-bootstrapping build helper for Python projects.
//!
//! Before any tool command runs, aiobuild makes sure the quality tools it
//! drives are installed (installing missing ones through the interpreter's
//! package installer) and that their configuration sections exist in the
//! project's shared config file. Commands are looked up in a registry; the
//! `lint` command runs a fail-fast pipeline of tools and then builds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `aiobuild.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Tool descriptors, probing, installation and bootstrap
//! - [`runner`] - Command registry and orchestration
//! - [`sections`] - Idempotent config section injection
//! - [`shell`] - Process execution behind a mockable trait
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use aiobuild::config::ProjectConfig;
//! use aiobuild::runner::CommandRegistry;
//! use std::path::Path;
//!
//! let config = ProjectConfig::default();
//! let registry = CommandRegistry::with_builtins(&config, Path::new(".")).unwrap();
//! assert!(registry.get("lint").unwrap().action.needs_bootstrap());
//! assert!(!registry.get("metadata").unwrap().action.needs_bootstrap());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod sections;
pub mod shell;
pub mod ui;

pub use error::{AioBuildError, Result};
