//! Test environment builder for isolated plinth testing.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a plinth CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment: a temp store root, a temp working directory
/// for source trees, and helpers to run the plinth binary against them.
pub struct TestEnv {
    pub store: TempDir,
    pub work: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            store: TempDir::new().expect("create store tempdir"),
            work: TempDir::new().expect("create work tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_plinth")),
        }
    }

    /// An initialized environment, ready for import and deploy
    pub fn initialized() -> Self {
        let env = Self::new();
        let result = env.run(&["init"]);
        assert!(result.success, "init failed: {}", result.combined_output());
        env
    }

    pub fn store_path(&self, relative: &str) -> PathBuf {
        self.store.path().join(relative)
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work.path().join(relative)
    }

    /// Run plinth against this environment's store
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .arg("--store")
            .arg(self.store.path())
            .args(args)
            .current_dir(self.work.path())
            .output()
            .expect("failed to execute plinth");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Import the tree at `source` under a ref, asserting success
    pub fn import(&self, source: &Path, ref_name: &str) {
        let result = self.run(&[
            "import",
            source.to_str().expect("utf-8 source path"),
            "--ref",
            ref_name,
        ]);
        assert!(
            result.success,
            "import failed: {}",
            result.combined_output()
        );
    }

    /// Deploy a revision for a target, asserting success
    pub fn deploy(&self, target: &str, revision: &str) {
        let result = self.run(&["deploy", target, revision]);
        assert!(
            result.success,
            "deploy failed: {}",
            result.combined_output()
        );
    }

    /// Resolved target of the `current` pointer
    pub fn current(&self) -> Option<PathBuf> {
        self.read_pointer("current")
    }

    /// Resolved target of the `previous` pointer
    pub fn previous(&self) -> Option<PathBuf> {
        self.read_pointer("previous")
    }

    fn read_pointer(&self, name: &str) -> Option<PathBuf> {
        let target = std::fs::read_link(self.store_path(name)).ok()?;
        Some(if target.is_absolute() {
            target
        } else {
            self.store.path().join(target)
        })
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
