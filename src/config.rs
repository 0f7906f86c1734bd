//! Configuration files (config.yaml, .instill.yaml)
//!
//! Both files are optional. The project file overrides the user file field
//! by field.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InstillError, Result};
use crate::paths::{Environment, resolve_path};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".instill.yaml";

/// User configuration file template
const USER_CONFIG_TEMPLATE: &str = "$XDG_CONFIG_HOME/instill/config.yaml";

/// Settings read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default agents when none are given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from `path`; a missing file yields `None`
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let yaml = match fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(InstillError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };
        let config = Self::from_yaml(&yaml).map_err(|e| InstillError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(Some(config))
    }

    /// Overlay `other` on top of `self`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            agents: other.agents.or(self.agents),
        }
    }

    /// Configured agents, if any are listed
    pub fn agents(&self) -> Option<&[String]> {
        self.agents.as_deref().filter(|a| !a.is_empty())
    }
}

/// Path of the user configuration file
pub fn user_config_path(env: &Environment) -> Option<PathBuf> {
    resolve_path(USER_CONFIG_TEMPLATE, None, true, env)
}

/// Path of the project configuration file
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_FILE)
}

/// Load the user configuration, then the project configuration over it
pub fn load(project_dir: Option<&Path>, env: &Environment) -> Result<Config> {
    let mut config = Config::default();
    if let Some(path) = user_config_path(env) {
        if let Some(user) = Config::load(&path)? {
            config = config.merge(user);
        }
    }
    if let Some(dir) = project_dir {
        if let Some(project) = Config::load(&project_config_path(dir))? {
            config = config.merge(project);
        }
    }
    Ok(config)
}
