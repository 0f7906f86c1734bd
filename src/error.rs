//! Error types and handling for instill
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//! Soft absence (a target directory or manifest that does not exist) is never
//! an error; it is reported through result values instead.

use miette::Diagnostic;
use thiserror::Error;

use crate::manifest::ManifestError;

/// Main error type for instill operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstillError {
    // Validation errors
    #[error("No agents specified")]
    #[diagnostic(
        code(instill::options::no_agents),
        help("Pass at least one agent with --agent, e.g. --agent claude-code")
    )]
    NoAgentsSpecified,

    #[error("Unknown agent: {agent}")]
    #[diagnostic(
        code(instill::options::unknown_agent),
        help("Run 'instill agents' to list supported agents")
    )]
    UnknownAgent { agent: String },

    #[error("Bundle name required")]
    #[diagnostic(code(instill::options::name_required))]
    BundleNameRequired,

    #[error("Project directory required when not installing globally")]
    #[diagnostic(
        code(instill::options::project_dir_required),
        help("Pass --project <DIR> or use --global")
    )]
    ProjectDirRequired,

    #[error("Global directory for agent '{agent}' cannot be resolved")]
    #[diagnostic(
        code(instill::options::global_dir_unavailable),
        help("Set HOME (or the agent's config directory variable) to an absolute path")
    )]
    GlobalDirUnavailable { agent: String },

    #[error("No agents detected")]
    #[diagnostic(
        code(instill::agent::none_detected),
        help("Pass --agent, set INSTILL_AGENTS, or list agents in .instill.yaml")
    )]
    NoAgentsDetected,

    // Discovery errors
    #[error("Source not found: {path}")]
    #[diagnostic(code(instill::source::not_found))]
    SourceNotFound { path: String },

    #[error("Failed to read source: {path}: {reason}")]
    #[diagnostic(code(instill::source::read_failed))]
    SourceReadFailed { path: String, reason: String },

    #[error("Invalid manifest {path}: {source}")]
    #[diagnostic(
        code(instill::manifest::invalid),
        help("SKILL.md must start with a '---' block containing 'name: <bundle-name>'")
    )]
    ManifestInvalid {
        path: String,
        #[source]
        source: ManifestError,
    },

    #[error("No SKILL.md found in {path}")]
    #[diagnostic(code(instill::source::no_bundles))]
    NoBundlesFound { path: String },

    #[error("Bundle '{name}' is defined twice: {first} and {second}")]
    #[diagnostic(
        code(instill::source::duplicate_bundle),
        help("Give each SKILL.md a distinct 'name'")
    )]
    DuplicateBundle {
        name: String,
        first: String,
        second: String,
    },

    // File system errors
    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(instill::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(instill::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(instill::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(instill::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(instill::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(instill::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstillError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    test_error_contains!(
        test_no_agents_specified_error,
        InstillError::NoAgentsSpecified,
        "No agents specified"
    );

    test_error_contains!(
        test_unknown_agent_error,
        InstillError::UnknownAgent {
            agent: "nope".to_string()
        },
        "Unknown agent",
        "nope"
    );

    test_error_contains!(
        test_write_failed_error,
        InstillError::FileWriteFailed {
            path: "/tmp/x".to_string(),
            reason: "disk full".to_string()
        },
        "/tmp/x",
        "disk full"
    );

    test_error_contains!(
        test_duplicate_bundle_error,
        InstillError::DuplicateBundle {
            name: "x".to_string(),
            first: "a".to_string(),
            second: "b".to_string()
        },
        "'x'",
        "a and b"
    );

    #[test]
    fn test_error_code() {
        let err = InstillError::UnknownAgent {
            agent: "nope".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("instill::options::unknown_agent".to_string())
        );
    }

    #[test]
    fn test_manifest_error_is_source() {
        use std::error::Error as _;

        let err = InstillError::ManifestInvalid {
            path: "skills/x/SKILL.md".to_string(),
            source: ManifestError::Unterminated,
        };
        assert!(err.to_string().contains("skills/x/SKILL.md"));
        assert!(err.source().is_some());
    }
}
