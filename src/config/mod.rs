//! Project configuration for aiobuild.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use aiobuild::config::{load_project_config, FailurePolicy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("aiobuild.yml"),
//!     "module_info:\n  module_path: src\nlint:\n  steps:\n    - command: analyze\n      on_failure: continue\n",
//! )
//! .unwrap();
//!
//! let config = load_project_config(temp.path(), None).unwrap();
//! assert_eq!(config.lint.steps[0].on_failure, FailurePolicy::Continue);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config_file, load_project_config, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{
    FailurePolicy, LintConfig, LintStepConfig, Meta, ModuleInfo, ProjectConfig, SectionConfig,
    ToolConfig,
};
