//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated data directories
//! - Seeding collections through the real CLI
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use shelfview_types::ItemDraft;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use shelfview_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["add", "Buy milk"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".shelfview");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.shelfview).
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

    /// Seed a collection by adding drafts through the real CLI.
    pub fn seed(&self, collection: &str, drafts: &[ItemDraft]) -> Result<()> {
        for draft in drafts {
            let mut args: Vec<String> = vec![
                "--collection".to_string(),
                collection.to_string(),
                "add".to_string(),
                draft.name.clone(),
            ];
            if !draft.description.is_empty() {
                args.push("--description".to_string());
                args.push(draft.description.clone());
            }
            if let Some(category) = &draft.category {
                args.push("--category".to_string());
                args.push(category.clone());
            }
            if let Some(price) = draft.price {
                args.push("--price".to_string());
                args.push(price.to_string());
            }
            if let Some(rating) = draft.rating {
                args.push("--rating".to_string());
                args.push(rating.to_string());
            }
            if !draft.in_stock {
                args.push("--out-of-stock".to_string());
            }

            let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
            let result = self.run(&arg_refs)?;
            if !result.success() {
                anyhow::bail!("Failed to seed '{}': {}", draft.name, result.stderr());
            }
        }
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("shelfview")
            .map_err(|e| anyhow::anyhow!("Failed to find shelfview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

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
