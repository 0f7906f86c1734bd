//! Target resolution
//!
//! Maps the requested agents onto the physical directories they use. Several
//! agents can share one directory (e.g. `.agents/skills`), so targets are
//! keyed by resolved path and each carries every agent that maps to it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::agent::AgentRegistry;
use crate::error::{InstillError, Result};
use crate::paths::Environment;

/// Options for install, remove and version lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Agent ids to target (required)
    pub agents: Vec<String>,

    /// Project root, required unless `global` is set
    pub project_dir: Option<PathBuf>,

    /// Operate on global directories instead of project-level ones
    pub global: bool,
}

impl Options {
    /// Options for project-level operations under `project_dir`
    pub fn project<I, S>(agents: I, project_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
            project_dir: Some(project_dir.into()),
            global: false,
        }
    }

    /// Options for global operations
    pub fn global<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
            project_dir: None,
            global: true,
        }
    }
}

/// A physical directory and the agents that resolve to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub agents: Vec<String>,
}

/// Resolve every requested agent to its skills directory.
///
/// All agents are validated before anything is returned, so an unknown id
/// fails the whole call without side effects. Targets come back sorted by
/// path; within a target, agents keep the order they were requested in.
pub fn resolve_targets(
    registry: &AgentRegistry,
    options: &Options,
    env: &Environment,
) -> Result<Vec<ResolvedTarget>> {
    if options.agents.is_empty() {
        return Err(InstillError::NoAgentsSpecified);
    }
    let project_dir = project_dir(options)?;

    let mut by_path: HashMap<PathBuf, Vec<String>> = HashMap::new();
    for id in &options.agents {
        let agent = registry
            .get(id)
            .ok_or_else(|| InstillError::UnknownAgent { agent: id.clone() })?;
        let dir = agent
            .skills_dir(project_dir, options.global, env)
            .ok_or_else(|| InstillError::GlobalDirUnavailable { agent: id.clone() })?;
        debug!(agent = %id, dir = %dir.display(), "resolved target");
        by_path.entry(dir).or_default().push(id.clone());
    }

    let mut targets: Vec<ResolvedTarget> = by_path
        .into_iter()
        .map(|(path, agents)| ResolvedTarget { path, agents })
        .collect();
    targets.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    Ok(targets)
}

fn project_dir(options: &Options) -> Result<Option<&Path>> {
    if options.global {
        return Ok(None);
    }
    match options.project_dir.as_deref() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(Some(dir)),
        _ => Err(InstillError::ProjectDirRequired),
    }
}
