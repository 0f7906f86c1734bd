//! Common test utilities for instill integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use instill::{AgentRegistry, Environment, Installer};
use tempfile::TempDir;

/// A throwaway source tree, project and home directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Directory holding skill bundles to install
    pub source: PathBuf,
    /// Project root
    pub project: PathBuf,
    /// Home directory used for global installs
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("source");
        let project = temp.path().join("project");
        let home = temp.path().join("home");
        for dir in [&source, &project, &home] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            source,
            project,
            home,
        }
    }

    /// Write a file below `base`
    pub fn write(base: &Path, path: &str, content: &str) {
        let file_path = base.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a file in the source tree
    pub fn write_source(&self, path: &str, content: &str) {
        Self::write(&self.source, path, content);
    }

    /// Write a file in the project
    pub fn write_project(&self, path: &str, content: &str) {
        Self::write(&self.project, path, content);
    }

    /// Write a `SKILL.md` for a bundle at `dir` (relative to the source tree)
    pub fn create_skill(&self, dir: &str, name: &str, version: Option<&str>) -> PathBuf {
        let mut manifest = format!("---\nname: {name}\ndescription: Test skill {name}\n");
        if let Some(version) = version {
            manifest.push_str(&format!("version: \"{version}\"\n"));
        }
        manifest.push_str(&format!("---\n\n# {name}\n"));

        let rel = if dir.is_empty() {
            "SKILL.md".to_string()
        } else {
            format!("{dir}/SKILL.md")
        };
        self.write_source(&rel, &manifest);
        self.source.join(dir)
    }

    /// Read a file from the project
    pub fn read_project(&self, path: &str) -> String {
        std::fs::read_to_string(self.project.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    pub fn project_exists(&self, path: &str) -> bool {
        self.project.join(path).exists()
    }

    /// Environment rooted at this workspace's home directory
    pub fn env(&self) -> Environment {
        Environment::new(Some(self.home.clone()))
    }

    /// Installer over the built-in registry and this workspace's environment
    pub fn installer(&self) -> Installer<'static> {
        Installer::new(AgentRegistry::builtin(), self.env())
    }

    /// The instill binary, isolated from the caller's environment
    pub fn instill_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("instill").expect("Failed to find instill binary");
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("CLAUDE_CONFIG_DIR")
            .env_remove("CODEX_HOME")
            .env_remove("INSTILL_AGENTS")
            .env_remove("INSTILL_PROJECT")
            .env_remove("RUST_LOG");
        cmd
    }
}
