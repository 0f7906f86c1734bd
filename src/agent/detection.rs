//! Agent detection for finding coding agents in a project or on the machine

use std::path::Path;

use tracing::debug;

use super::{Agent, AgentRegistry};
use crate::paths::Environment;

/// Detect which agents are present
///
/// An agent is present if any of its detection directories exists. In
/// project mode relative detection directories are checked under
/// `project_dir`; in global mode only absolute ones (`~`, `$VAR`, `/...`)
/// are checked. Agents are returned in registry order.
pub fn detect_agents(
    registry: &AgentRegistry,
    project_dir: Option<&Path>,
    global: bool,
    env: &Environment,
) -> Vec<Agent> {
    registry
        .all()
        .iter()
        .filter(|a| {
            let found = a.is_detected(project_dir, global, env);
            debug!(agent = a.id, found, "probed agent directories");
            found
        })
        .map(|a| a.to_agent(env))
        .collect()
}
