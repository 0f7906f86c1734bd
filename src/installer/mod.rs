//! Installation engine for skill bundles
//!
//! This module handles:
//! - Discovering bundles in a source tree (see [`discovery`])
//! - Resolving agents to target directories (see [`targets`])
//! - Installing, removing and inspecting bundles in those directories
//!
//! Every operation returns one [`OperationResult`] per requested agent, even
//! when several agents share a directory and the write happened only once.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::agent::{Agent, AgentRegistry, detect_agents};
use crate::error::{InstillError, Result};
use crate::path_utils::sanitize_name;
use crate::paths::Environment;

pub mod discovery;
pub mod files;
pub mod targets;

pub use discovery::{Bundle, bundle_version, discover_bundles};
pub use targets::{Options, ResolvedTarget, resolve_targets};

/// Outcome of an install or remove for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    /// Agent id
    pub agent: String,

    /// Bundle directory that was written or removed
    pub path: PathBuf,

    /// Whether the bundle directory existed before the operation
    pub existed: bool,

    /// Version of the previously installed bundle, empty if unknown
    pub prior_version: String,
}

fn results_for(
    target: &ResolvedTarget,
    path: &Path,
    existed: bool,
    prior_version: &str,
) -> impl Iterator<Item = OperationResult> {
    target.agents.iter().map(move |agent| OperationResult {
        agent: agent.clone(),
        path: path.to_path_buf(),
        existed,
        prior_version: prior_version.to_string(),
    })
}

/// Bundle installer bound to an agent registry and an environment snapshot
#[derive(Debug, Clone)]
pub struct Installer<'a> {
    registry: &'a AgentRegistry,
    env: Environment,
}

impl<'a> Installer<'a> {
    /// Create an installer
    pub fn new(registry: &'a AgentRegistry, env: Environment) -> Self {
        Self { registry, env }
    }

    /// Install every bundle found in `source` for the requested agents.
    ///
    /// Bundles are processed in discovery order and targets in path order.
    /// Each bundle directory is replaced as a whole, so files removed from the
    /// source do not linger in the target.
    pub fn install(&self, source: &Path, options: &Options) -> Result<Vec<OperationResult>> {
        let targets = resolve_targets(self.registry, options, &self.env)?;

        let bundles = discover_bundles(source)?;
        if bundles.is_empty() {
            return Err(InstillError::NoBundlesFound {
                path: source.display().to_string(),
            });
        }
        debug!(
            source = %source.display(),
            bundles = bundles.len(),
            targets = targets.len(),
            "discovered bundles"
        );

        let mut results = Vec::new();
        for bundle in &bundles {
            for target in &targets {
                let dir = target.path.join(&bundle.name);
                let existed = files::exists(&dir);
                let prior_version = if existed {
                    files::installed_version_at(&dir)
                } else {
                    String::new()
                };

                files::replace_dir(&dir, &bundle.files)?;
                info!(
                    bundle = %bundle.name,
                    path = %dir.display(),
                    existed,
                    prior_version = %prior_version,
                    "installed bundle"
                );
                results.extend(results_for(target, &dir, existed, &prior_version));
            }
        }
        Ok(results)
    }

    /// Remove the bundle `name` from the requested agents' directories.
    ///
    /// A bundle that is not installed is not an error; its results report
    /// `existed: false`.
    pub fn remove(&self, name: &str, options: &Options) -> Result<Vec<OperationResult>> {
        let name = require_name(name, options)?;
        let targets = resolve_targets(self.registry, options, &self.env)?;

        let mut results = Vec::new();
        for target in &targets {
            let dir = target.path.join(&name);
            let existed = files::remove_dir(&dir)?;
            if existed {
                info!(bundle = %name, path = %dir.display(), "removed bundle");
            } else {
                debug!(bundle = %name, path = %dir.display(), "bundle not installed");
            }
            results.extend(results_for(target, &dir, existed, ""));
        }
        Ok(results)
    }

    /// Version of the installed bundle `name`.
    ///
    /// Returns the first non-empty version across the targets in path order,
    /// or an empty string if no target has one.
    pub fn installed_version(&self, name: &str, options: &Options) -> Result<String> {
        let name = require_name(name, options)?;
        let targets = resolve_targets(self.registry, options, &self.env)?;

        Ok(targets
            .iter()
            .map(|t| files::installed_version_at(&t.path.join(&name)))
            .find(|v| !v.is_empty())
            .unwrap_or_default())
    }

    /// Agents present in the project (or globally)
    pub fn detect(&self, project_dir: Option<&Path>, global: bool) -> Vec<Agent> {
        detect_agents(self.registry, project_dir, global, &self.env)
    }
}

fn require_name(name: &str, options: &Options) -> Result<String> {
    if options.agents.is_empty() {
        return Err(InstillError::NoAgentsSpecified);
    }
    if name.trim().is_empty() {
        return Err(InstillError::BundleNameRequired);
    }
    Ok(sanitize_name(name))
}
