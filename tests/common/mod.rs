//! Shared testing utilities for jira-config CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// Minimal parameter file accepted by every command.
#[allow(dead_code)]
pub const MINIMAL_PARAMS: &str = "version: '6.3.4a'\njavahome: /opt/java\n";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    stage: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let stage = root.path().join("stage");
        fs::create_dir_all(&stage).expect("Failed to create stage directory");
        Self { root, stage }
    }

    /// Directory passed as `--root` to `apply`.
    pub fn stage(&self) -> &Path {
        &self.stage
    }

    /// Build a command for invoking the compiled `jira-config` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("jira-config").expect("Failed to locate jira-config binary");
        cmd.current_dir(self.root.path()).env_remove("JIRA_CONFIG_LOG");
        cmd
    }

    /// Write a parameter file next to the stage directory and return its path.
    pub fn write_params(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write parameter file");
        path
    }

    /// Location of an absolute artifact path inside the stage directory.
    pub fn staged(&self, artifact: &str) -> PathBuf {
        let relative: PathBuf = Path::new(artifact)
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        self.stage.join(relative)
    }

    /// Read a staged artifact.
    pub fn read_staged(&self, artifact: &str) -> String {
        let path = self.staged(artifact);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert that an artifact was written to the stage.
    pub fn assert_staged(&self, artifact: &str) {
        assert!(self.staged(artifact).exists(), "{} should be written", artifact);
    }

    /// Assert that an artifact was not written to the stage.
    pub fn assert_not_staged(&self, artifact: &str) {
        assert!(!self.staged(artifact).exists(), "{} should not be written", artifact);
    }
}
