//! instill - skill installer for AI coding agents
//!
//! Copies skill bundles (directories with a `SKILL.md` manifest) into the
//! skill directories of many coding agents, each with its own path
//! conventions, for a single project or globally.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use instill::{AgentRegistry, Environment, Installer, Options};
//!
//! let installer = Installer::new(AgentRegistry::builtin(), Environment::from_process());
//! let options = Options::project(["claude-code", "cursor"], "/work/project");
//! for result in installer.install(Path::new("./skills"), &options)? {
//!     println!("{} -> {}", result.agent, result.path.display());
//! }
//! # Ok::<(), instill::InstillError>(())
//! ```

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod path_utils;
pub mod paths;
pub mod ui;

pub use agent::{Agent, AgentDescriptor, AgentRegistry};
pub use error::{InstillError, Result};
pub use installer::{Installer, OperationResult, Options};
pub use paths::Environment;
