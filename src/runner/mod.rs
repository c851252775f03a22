//! Command registry and orchestration.
//!
//! - [`registry`] - Named commands and the composite lint pipeline
//! - [`action`] - Leaf actions running one external tool each
//! - [`orchestrator`] - Runs commands and applies the failure-policy table
//! - [`metadata`] - Package metadata for the packaging step

pub mod action;
pub mod metadata;
pub mod orchestrator;
pub mod registry;

pub use action::{ActionOutcome, ActionStatus, ToolInvocation};
pub use metadata::PackageMetadata;
pub use orchestrator::{Orchestrator, RunReport};
pub use registry::{
    Action, CommandEntry, CommandRegistry, Pipeline, PipelineStep, DEFAULT_COMMAND,
};
