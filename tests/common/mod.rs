//! Common test utilities for Manifold CLI tests.
//!
//! Every CLI invocation runs from an isolated temp directory so a stray
//! `manifold.toml` on the developer machine cannot leak into assertions.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a Manifold CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Run the manifold binary from a fresh temp directory
pub fn run(args: &[&str]) -> TestResult {
    let dir = TempDir::new().expect("failed to create temp dir");
    run_from(dir.path(), args)
}

/// Run the manifold binary from a specific directory
pub fn run_from(cwd: &Path, args: &[&str]) -> TestResult {
    let bin = env!("CARGO_BIN_EXE_manifold");

    let output = Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("MANIFOLD_COLOR")
        .env_remove("MANIFOLD_UNICODE")
        .output()
        .expect("failed to execute manifold");

    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
