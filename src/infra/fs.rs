//! Filesystem collaborator: listing, reading, and executing command batches.
//!
//! The core planners never touch the disk; everything that does lives here.
//! Renames and overwrites are only called after the user has confirmed a
//! previewed batch.

use crate::domain::{RenameCommand, ReplaceCommand};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during filesystem operations on the note directory.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Lists the note filenames in a directory.
///
/// Only the top level is considered: subdirectories are not descended into
/// and hidden files (leading `.`) are skipped. The result is sorted for
/// deterministic batches.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist and
/// `FsError::NotADirectory` if the path is not a directory.
pub fn list_filenames(dir: &Path) -> Result<Vec<String>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut filenames: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.'))
        .collect();
    filenames.sort();
    Ok(filenames)
}

/// Reads a file's content as a list of lines.
pub fn read_lines(dir: &Path, filename: &str) -> Result<Vec<String>, FsError> {
    Ok(read_to_string(dir, filename)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Reads a file's content as a single string.
pub fn read_to_string(dir: &Path, filename: &str) -> Result<String, FsError> {
    let path = dir.join(filename);
    let bytes = std::fs::read(&path).map_err(|e| FsError::from_io(&path, e))?;
    String::from_utf8(bytes).map_err(|_| FsError::InvalidEncoding { path })
}

/// Renames a file within the directory.
pub fn rename_file(dir: &Path, old: &str, new: &str) -> Result<(), FsError> {
    let old_path = dir.join(old);
    let new_path = dir.join(new);
    std::fs::rename(&old_path, &new_path).map_err(|e| FsError::from_io(&old_path, e))
}

/// Overwrites a file's content atomically.
///
/// Writes to a temporary file in the same directory and renames it into
/// place, so an interrupted write never leaves a truncated note behind.
pub fn overwrite_content(dir: &Path, filename: &str, content: &str) -> Result<(), FsError> {
    let path = dir.join(filename);
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FsError::Io {
        path: path.clone(),
        source: e,
    })?;
    temp.write_all(content.as_bytes()).map_err(|e| FsError::Io {
        path: path.clone(),
        source: e,
    })?;
    temp.persist(&path).map_err(|e| FsError::AtomicWrite {
        path,
        source: e.error,
    })?;
    Ok(())
}

/// Executes a batch of renames in order.
pub fn apply_renames(dir: &Path, commands: &[RenameCommand]) -> Result<(), FsError> {
    for command in commands {
        rename_file(dir, &command.old_filename, &command.new_filename)?;
    }
    Ok(())
}

/// Executes a batch of text replacements.
///
/// Every occurrence of the old text in the target file is replaced; the
/// planned texts are exact link constructs, so spurious matches would
/// require the identical stale link to appear twice, which is precisely
/// the case where both occurrences need fixing.
pub fn apply_replacements(dir: &Path, commands: &[ReplaceCommand]) -> Result<(), FsError> {
    for command in commands {
        let content = read_to_string(dir, &command.filename)?;
        let updated = content.replace(&command.old_text, &command.new_text);
        if updated != content {
            overwrite_content(dir, &command.filename, &updated)?;
        }
    }
    Ok(())
}
