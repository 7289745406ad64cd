//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a fresh temporary directory with `HOME`
//! pointed at it and the `POSIXPATH_*` variables cleared, so neither the
//! developer's configuration nor their environment leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for one test.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Command for the posixpath binary, running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("posixpath").expect("Failed to find posixpath binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("POSIXPATH_FORMAT")
            .env_remove("POSIXPATH_LOG_MODE");
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `name` under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run posixpath");

        assert!(
            output.status.success(),
            "posixpath {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
