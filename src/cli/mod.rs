//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - remove: Remove command arguments
//! - show: Show command arguments
//! - detect: Detect command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod detect;
pub mod install;
pub mod remove;
pub mod show;

pub use completions::CompletionsArgs;
pub use detect::DetectArgs;
pub use install::InstallArgs;
pub use remove::RemoveArgs;
pub use show::ShowArgs;

/// instill - skill installer for AI coding agents
///
/// Install skill bundles into the skill directories of many coding agents.
#[derive(Parser, Debug)]
#[command(
    name = "instill",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install skill bundles for AI coding agents",
    long_about = "instill copies skill bundles (directories with a SKILL.md) into the skill \
                  directories of AI coding agents (Claude Code, Cursor, Codex, ...), either for \
                  one project or globally for the current user.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  instill install ./skills -a claude-code  \x1b[90m# Install for Claude Code\x1b[0m\n   \
                  instill install ./skills -g -a cursor    \x1b[90m# Install globally for Cursor\x1b[0m\n   \
                  instill remove my-skill -a claude-code   \x1b[90m# Remove a skill\x1b[0m\n   \
                  instill show my-skill                    \x1b[90m# Show installed version\x1b[0m\n   \
                  instill detect                           \x1b[90m# List agents used here\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "INSTILL_PROJECT")]
    pub project: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skill bundles from a directory
    Install(InstallArgs),

    /// Remove an installed skill bundle
    #[command(visible_alias = "uninstall")]
    Remove(RemoveArgs),

    /// Show the installed version of a skill bundle
    Show(ShowArgs),

    /// List agents detected in the project (or globally)
    Detect(DetectArgs),

    /// List all supported agents
    Agents,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Agent selection shared by install, remove and show
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Target agents (repeatable or comma-separated); defaults to configured or detected agents
    #[arg(
        long = "agent",
        short = 'a',
        value_name = "AGENT",
        env = "INSTILL_AGENTS",
        value_delimiter = ','
    )]
    pub agents: Vec<String>,

    /// Use the agents' global skill directories instead of the project's
    #[arg(long, short = 'g')]
    pub global: bool,
}
