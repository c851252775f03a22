//! Tool requirement detection and installation.
//!
//! This module makes sure the developer tools aiobuild drives are present
//! before anything else runs.
//!
//! # Modules
//!
//! - [`descriptor`] - Requirement descriptors and the built-in tool list
//! - [`probe`] - Import and PATH probes deciding what is missing
//! - [`installer`] - One-package-at-a-time installation through pip
//! - [`bootstrap`] - Probe, install, re-probe once
//! - [`status`] - Probe outcome types

pub mod bootstrap;
pub mod descriptor;
pub mod installer;
pub mod probe;
pub mod status;

pub use bootstrap::{BootstrapReport, Bootstrapper};
pub use descriptor::{builtin_requirements, Requirement};
pub use installer::Installer;
pub use probe::Prober;
pub use status::{ProbeOutcome, ProbeResult};
