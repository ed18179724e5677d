//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::ZkCommand;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary Zettelkasten directory.
///
/// Creates a temp directory holding the kasten plus an `input/` staging
/// subdirectory, automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the Zettelkasten directory
    kasten_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let kasten_dir = temp_dir.path().to_path_buf();
        fs::create_dir(kasten_dir.join("input")).expect("Failed to create input directory");
        Self {
            _temp_dir: temp_dir,
            kasten_dir,
        }
    }

    /// Returns the path to the Zettelkasten directory.
    pub fn kasten_dir(&self) -> &Path {
        &self.kasten_dir
    }

    /// Returns the path to the staging input directory.
    pub fn input_dir(&self) -> PathBuf {
        self.kasten_dir.join("input")
    }

    /// Writes a note into the Zettelkasten and returns its path.
    pub fn add_note(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.kasten_dir.join(filename);
        fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Writes a raw import into the staging directory and returns its path.
    pub fn add_input(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.input_dir().join(filename);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// Lists the note filenames currently in the Zettelkasten, sorted.
    pub fn filenames(&self) -> Vec<String> {
        zettel::infra::list_filenames(&self.kasten_dir).expect("Failed to list kasten")
    }

    /// Lists the filenames currently in the staging directory, sorted.
    pub fn input_filenames(&self) -> Vec<String> {
        zettel::infra::list_filenames(&self.input_dir()).expect("Failed to list input")
    }

    /// Reads a note's content.
    pub fn read(&self, filename: &str) -> String {
        fs::read_to_string(self.kasten_dir.join(filename)).expect("Failed to read note")
    }

    /// Creates a ZkCommand configured for this test environment.
    pub fn cmd(&self) -> ZkCommand {
        ZkCommand::new().dir(&self.kasten_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
