//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `zk` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct ZkCommand {
    args: Vec<String>,
}

impl ZkCommand {
    /// Creates a new command for the `zk` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--dir` option to specify the Zettelkasten directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("zk").expect("Failed to find zk binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `stage` command (non-interactive).
    pub fn stage(self) -> Self {
        self.args(["stage", "--yes"])
    }

    /// Configures for the `reorganize` command (non-interactive).
    pub fn reorganize(self) -> Self {
        self.args(["reorganize", "--yes"])
    }

    /// Configures for the `reorganize` command in preview mode.
    pub fn reorganize_dry_run(self) -> Self {
        self.args(["reorganize", "--dry-run"])
    }

    /// Configures for the `tree` command.
    pub fn tree(self) -> Self {
        self.args(["tree"])
    }

    /// Configures for the `graph` command.
    pub fn graph(self) -> Self {
        self.args(["graph"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for ZkCommand {
    fn default() -> Self {
        Self::new()
    }
}
