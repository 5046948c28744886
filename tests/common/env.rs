//! Test environment builder for isolated arsenal testing.
//!
//! Provides `TestEnv` - a temp project directory with data files, plus
//! helpers to run the arsenal CLI inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures;

/// Result of running an arsenal CLI command
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

/// Isolated test environment: a temp project root with `data/` inside.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, no data files.
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("Failed to create temp dir");
        Self {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_arsenal")),
        }
    }

    /// Project seeded with the default fixture vocabulary and a valid
    /// catalog.
    pub fn with_valid_data() -> Self {
        let env = Self::new();
        env.write_file("data/vocabulary.yaml", fixtures::VOCABULARY_YAML);
        env.write_file("data/resources.yaml", fixtures::VALID_RESOURCES_YAML);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        let full_path = self.project_path(relative);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Run arsenal from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run arsenal from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("ARSENAL_NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute arsenal");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
