//! TestWorld pattern for declarative CLI integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding the catalog cache so commands run offline
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use holocron_types::CatalogSnapshot;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::sample_snapshot;

/// File name of the catalog cache inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use holocron_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog().unwrap();
///
/// let result = world.run(&["people", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    offline: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".holocron");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            offline: true,
        }
    }

    /// Get the data directory path (.holocron).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Let commands reach the network, pointing the catalog API at `base_url`.
    pub fn with_api(mut self, base_url: &str) -> Result<Self> {
        let config = format!("base_url = \"{}\"\ntimeout_secs = 2\n", base_url);
        std::fs::write(self.data_dir.join("config.toml"), config)?;
        self.offline = false;
        Ok(self)
    }

    /// Seed the catalog cache with the canonical fixture catalog.
    pub fn with_sample_catalog(self) -> Result<Self> {
        self.with_catalog(&sample_snapshot())
    }

    /// Seed the catalog cache with an arbitrary snapshot.
    pub fn with_catalog(self, snapshot: &CatalogSnapshot) -> Result<Self> {
        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(self.data_dir.join(CATALOG_FILE), content)?;
        Ok(self)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Commands run `--offline` unless [`TestWorld::with_api`] was used, so a
    /// missing cache fails fast instead of reaching for the network.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if self.offline {
            cmd.arg("--offline");
        }
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute a command feeding `input` to its stdin.
    ///
    /// Used to script the interactive `browse` loop.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("holocron")
            .map_err(|e| anyhow::anyhow!("Failed to find holocron binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(input.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
