//! Package metadata for the packaging step.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::error::Result;

/// Static metadata as handed to the packaging mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Project name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// README contents, when a README is declared and exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Module or package path.
    pub module_path: PathBuf,
    /// Whether console scripts are produced.
    pub is_script: bool,
    /// Console entry points.
    pub entrypoints: Vec<String>,
    /// Runtime requirements.
    pub install_requires: Vec<String>,
}

impl PackageMetadata {
    /// Collect metadata from `config`, reading the README relative to
    /// `project_root`. A declared but missing README is skipped.
    pub fn collect(config: &ProjectConfig, project_root: &Path) -> Result<Self> {
        let long_description = match &config.meta.readme_file {
            Some(readme) => {
                let path = project_root.join(readme);
                if path.is_file() {
                    Some(fs::read_to_string(path)?)
                } else {
                    tracing::debug!("README {} not found", path.display());
                    None
                }
            }
            None => None,
        };

        Ok(Self {
            name: config.meta.name.clone(),
            description: config.meta.description.clone(),
            long_description,
            module_path: config.module_info.module_path.clone(),
            is_script: config.module_info.is_script,
            entrypoints: config.module_info.entrypoints.clone(),
            install_requires: config.module_info.requirements.clone(),
        })
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }
}
