//! Output formatting for command results
//!
//! Every command renders either human-readable text (styled with `console`)
//! or JSON when `--json` is given.

use std::path::Path;

use console::Style;
use serde::Serialize;

use crate::agent::Agent;
use crate::error::{InstillError, Result};
use crate::installer::OperationResult;

/// Operation whose results are being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Remove,
}

/// Render a value as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| InstillError::IoError {
        message: format!("Failed to serialize output: {e}"),
    })
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn result_status(action: Action, result: &OperationResult) -> String {
    match (action, result.existed) {
        (Action::Install, false) => "installed".to_string(),
        (Action::Install, true) if result.prior_version.is_empty() => "replaced".to_string(),
        (Action::Install, true) => format!("replaced {}", result.prior_version),
        (Action::Remove, true) => "removed".to_string(),
        (Action::Remove, false) => "not installed".to_string(),
    }
}

/// Render operation results, one line per agent
pub fn render_results(action: Action, results: &[OperationResult]) -> String {
    let width = results.iter().map(|r| r.agent.len()).max().unwrap_or(0);
    let mut out = String::new();
    for result in results {
        let marker = if action == Action::Remove && !result.existed {
            Style::new().dim().apply_to("-")
        } else {
            Style::new().green().apply_to("✓")
        };
        out.push_str(&format!(
            "  {} {:<width$}  {} {}\n",
            marker,
            Style::new().bold().apply_to(&result.agent),
            display_path(&result.path),
            Style::new().dim().apply_to(format!("({})", result_status(action, result))),
            width = width,
        ));
    }
    out
}

/// Print operation results
pub fn print_results(action: Action, results: &[OperationResult], json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(results)?);
    } else {
        print!("{}", render_results(action, results));
    }
    Ok(())
}

/// Render detected agents
pub fn render_agents(agents: &[Agent]) -> String {
    let mut out = String::new();
    for agent in agents {
        out.push_str(&format!(
            "  {} {}\n",
            Style::new().bold().yellow().apply_to(&agent.name),
            Style::new().dim().apply_to(format!("({})", agent.display_name)),
        ));
        out.push_str(&format!(
            "    {} {}\n",
            Style::new().bold().apply_to("Project:"),
            display_path(&agent.project_dir)
        ));
        if let Some(global) = &agent.global_dir {
            out.push_str(&format!(
                "    {} {}\n",
                Style::new().bold().apply_to("Global:"),
                display_path(global)
            ));
        }
    }
    out
}

/// Print detected agents
pub fn print_agents(agents: &[Agent], json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(agents)?);
    } else if agents.is_empty() {
        println!("No agents detected.");
    } else {
        print!("{}", render_agents(agents));
    }
    Ok(())
}

#[derive(Serialize)]
struct VersionReport<'a> {
    name: &'a str,
    version: &'a str,
}

/// Print the installed version of a bundle
pub fn print_version(name: &str, version: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(&VersionReport { name, version })?);
    } else if version.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().yellow().apply_to(name),
            Style::new().dim().apply_to("(no version installed)")
        );
    } else {
        println!("{} {}", Style::new().bold().yellow().apply_to(name), version);
    }
    Ok(())
}
