//! Command helper utilities

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::agent::AgentRegistry;
use crate::cli::TargetArgs;
use crate::config;
use crate::error::{InstillError, Result};
use crate::installer::{Installer, Options};
use crate::paths::Environment;

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise, resolve to the current
/// directory. Existing directories are canonicalized; others are made
/// absolute against the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = project.unwrap_or_else(|| PathBuf::from("."));
    if let Ok(canonical) = dunce::canonicalize(&path) {
        return Ok(canonical);
    }
    std::path::absolute(&path).map_err(|e| InstillError::IoError {
        message: format!("Failed to resolve project directory {}: {e}", path.display()),
    })
}

/// State shared by the commands of one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Project root for project-level operations
    pub project_dir: PathBuf,

    /// Print machine-readable output
    pub json: bool,

    /// Environment snapshot used for path resolution
    pub env: Environment,
}

impl Context {
    /// Create a context
    pub fn new(project_dir: PathBuf, json: bool, env: Environment) -> Self {
        Self {
            project_dir,
            json,
            env,
        }
    }

    /// Installer over the built-in agent registry
    pub fn installer(&self) -> Installer<'static> {
        Installer::new(AgentRegistry::builtin(), self.env.clone())
    }

    /// Agents to operate on.
    ///
    /// Explicit agents win, then the configured ones, then whatever is
    /// detected for the requested mode.
    pub fn agents(&self, target: &TargetArgs) -> Result<Vec<String>> {
        let explicit: Vec<String> = target
            .agents
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if !explicit.is_empty() {
            return Ok(explicit);
        }

        let config = config::load(Some(&self.project_dir), &self.env)?;
        if let Some(agents) = config.agents() {
            debug!(?agents, "using configured agents");
            return Ok(agents.to_vec());
        }

        let detected: Vec<String> = self
            .installer()
            .detect(Some(&self.project_dir), target.global)
            .into_iter()
            .map(|a| a.name)
            .collect();
        if detected.is_empty() {
            return Err(InstillError::NoAgentsDetected);
        }
        debug!(agents = ?detected, "using detected agents");
        Ok(detected)
    }

    /// Engine options for the given agent selection
    pub fn options(&self, target: &TargetArgs) -> Result<Options> {
        let agents = self.agents(target)?;
        Ok(if target.global {
            Options::global(agents)
        } else {
            Options::project(agents, &self.project_dir)
        })
    }

    /// Project root
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}
