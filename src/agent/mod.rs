//! Agent definitions and detection
//!
//! This module handles:
//! - Agent definitions (AgentDescriptor)
//! - Agent registration and lookup (via AgentRegistry)
//! - Agent detection (via detection module)

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::{Environment, resolve_path};

pub mod detection;
pub mod registry;

pub use detection::detect_agents;
pub use registry::AgentRegistry;

/// A supported coding agent and where it keeps its skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    /// Agent identifier (e.g., "claude-code", "cursor")
    pub id: &'static str,

    /// Display name for the agent
    pub display_name: &'static str,

    /// Skills directory relative to a project root (e.g., ".claude/skills")
    pub project_dir: &'static str,

    /// Global skills directory template (may contain `~` or `$VAR`)
    pub global_dir: &'static str,

    /// Directory templates whose presence indicates the agent is in use
    pub detect: &'static [&'static str],
}

impl AgentDescriptor {
    /// Skills directory for the given mode, resolved to an absolute path.
    ///
    /// `None` means the directory is not applicable (see [`resolve_path`]).
    pub fn skills_dir(
        &self,
        project_dir: Option<&Path>,
        global: bool,
        env: &Environment,
    ) -> Option<PathBuf> {
        let template = if global {
            self.global_dir
        } else {
            self.project_dir
        };
        resolve_path(template, project_dir, global, env)
    }

    /// Check if any detection directory exists for the given mode
    pub fn is_detected(&self, project_dir: Option<&Path>, global: bool, env: &Environment) -> bool {
        self.detect.iter().any(|probe| {
            resolve_path(probe, project_dir, global, env).is_some_and(|path| path.exists())
        })
    }

    /// Describe this agent for callers outside the engine
    pub fn to_agent(&self, env: &Environment) -> Agent {
        Agent {
            name: self.id.to_string(),
            display_name: self.display_name.to_string(),
            project_dir: PathBuf::from(self.project_dir),
            global_dir: resolve_path(self.global_dir, None, true, env),
        }
    }
}

/// A detected agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub name: String,
    pub display_name: String,
    /// Project-level skills directory, relative to the project root
    pub project_dir: PathBuf,
    /// Global skills directory, if it can be resolved
    pub global_dir: Option<PathBuf>,
}
