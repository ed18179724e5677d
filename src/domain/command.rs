//! Commands emitted by the planning passes.
//!
//! Planners are pure: they describe changes as command lists and never touch
//! the filesystem themselves. Execution happens in `infra::fs` after the
//! batch has been previewed and confirmed.

use serde::Serialize;
use std::fmt;

/// A planned file rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCommand {
    pub old_filename: String,
    pub new_filename: String,
}

impl RenameCommand {
    pub fn new(old_filename: impl Into<String>, new_filename: impl Into<String>) -> Self {
        Self {
            old_filename: old_filename.into(),
            new_filename: new_filename.into(),
        }
    }
}

impl fmt::Display for RenameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old_filename, self.new_filename)
    }
}

/// A planned verbatim text replacement inside one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceCommand {
    pub filename: String,
    pub old_text: String,
    pub new_text: String,
}

impl ReplaceCommand {
    pub fn new(
        filename: impl Into<String>,
        old_text: impl Into<String>,
        new_text: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }
}

impl fmt::Display for ReplaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.filename, self.old_text, self.new_text
        )
    }
}
