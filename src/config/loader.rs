//! Project configuration discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{AioBuildError, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "aiobuild.yml";

/// Default location of the project config.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the project configuration.
///
/// An explicit path must exist. Without one, `<project_root>/aiobuild.yml`
/// is used when present and [`ProjectConfig::default`] otherwise. The
/// result is validated before it is returned.
pub fn load_project_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let config = match explicit {
        Some(path) => load_config_file(path)?,
        None => {
            let path = default_config_path(project_root);
            if path.exists() {
                load_config_file(&path)?
            } else {
                debug!("No {} found, using defaults", path.display());
                ProjectConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AioBuildError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AioBuildError::Io(e)
        }
    })?;

    debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// Blank content is treated as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| AioBuildError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
