//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration directory.
///
/// Commands built through this environment run inside a temporary working
/// directory, point the user-config search at an empty directory, and have
/// all `PATHPAT_*` environment variables cleared, so the host machine's
/// configuration can never leak into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the isolated configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("pathpat-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("pathpat").expect("Failed to find pathpat binary")
    }

    /// Get a command builder isolated from the host configuration.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path);
        cmd.arg("--config-dir").arg(&self.config_dir);
        for var in [
            "PATHPAT_CASE_SENSITIVITY",
            "PATHPAT_MAX_WIDTH",
            "PATHPAT_DETAILED",
            "PATHPAT_WIDTH",
            "PATHPAT_LOG_MODE",
            "PATHPAT_CONFIG_DIR",
            "PATHPAT_NO_CONFIG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file in the test environment.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Write the isolated user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write config file");
    }

    /// Run `strings` with the given values and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn strings_output(&self, values: &[&str], extra_args: &[&str]) -> String {
        let output = self
            .command()
            .arg("strings")
            .args(values)
            .args(extra_args)
            .output()
            .expect("Failed to run strings command");

        assert!(
            output.status.success(),
            "strings failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
