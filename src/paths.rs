//! Path template resolution
//!
//! Agent directories are described by templates such as `.claude/skills`,
//! `~/.cursor/skills` or `$XDG_CONFIG_HOME/goose/skills`. This module turns a
//! template into an absolute path for project or global mode.
//!
//! The process environment is captured once in an [`Environment`] so that
//! resolution is a pure function of its inputs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Recognized placeholders and the fallback used when the variable is unset
pub const ENV_DEFAULTS: &[(&str, &str)] = &[
    ("XDG_CONFIG_HOME", "~/.config"),
    ("CLAUDE_CONFIG_DIR", "~/.claude"),
    ("CODEX_HOME", "~/.codex"),
];

/// Home directory and the placeholder variables known to [`resolve_path`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    home: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl Environment {
    /// Create an environment with the given home directory and no variables set
    pub fn new(home: Option<PathBuf>) -> Self {
        Self {
            home,
            vars: HashMap::new(),
        }
    }

    /// Capture the current process environment
    pub fn from_process() -> Self {
        let vars = ENV_DEFAULTS
            .iter()
            .filter_map(|(name, _)| {
                std::env::var(name)
                    .ok()
                    .map(|value| ((*name).to_string(), value))
            })
            .collect();
        Self {
            home: dirs::home_dir(),
            vars,
        }
    }

    /// Set a variable
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Home directory, if known
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Trimmed value of a variable; unset and blank are both `None`
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn home_str(&self) -> Option<String> {
        self.home
            .as_ref()
            .map(|h| h.to_string_lossy().into_owned())
    }
}

/// Substitute every recognized `$VAR` placeholder.
///
/// Each placeholder is replaced once by the variable's value or by its
/// fallback with `~` expanded. Substituted text is not expanded again.
pub fn expand_env(template: &str, env: &Environment) -> String {
    let mut path = template.to_string();
    for (name, fallback) in ENV_DEFAULTS {
        let placeholder = format!("${name}");
        if !path.contains(&placeholder) {
            continue;
        }
        let value = match env.var(name) {
            Some(v) => v.to_string(),
            None => match env.home_str() {
                Some(home) => fallback.replacen('~', &home, 1),
                None => (*fallback).to_string(),
            },
        };
        path = path.replace(&placeholder, &value);
    }
    path
}

fn expand_home(path: &str, env: &Environment) -> Option<String> {
    let rest = path.strip_prefix('~')?;
    let home = env.home_str()?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Some(home)
    } else {
        Some(Path::new(&home).join(rest).to_string_lossy().into_owned())
    }
}

/// Resolve a path template to an absolute path.
///
/// Returns `None` when the template cannot be made absolute: a relative
/// template in global mode, a relative template without a project root, or a
/// `~` template without a known home directory.
pub fn resolve_path(
    template: &str,
    project_dir: Option<&Path>,
    global: bool,
    env: &Environment,
) -> Option<PathBuf> {
    let expanded = expand_env(template, env);
    let path = if expanded.starts_with('~') {
        PathBuf::from(expand_home(&expanded, env)?)
    } else {
        PathBuf::from(expanded)
    };

    if path.is_absolute() {
        return Some(path);
    }
    if global {
        return None;
    }
    project_dir.map(|root| root.join(path))
}
