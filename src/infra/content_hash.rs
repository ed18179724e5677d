//! Content hashing that survives reorganization renames.
//!
//! A reorganize pass rewrites link targets (`2_3_x_176fb43ae.md` becomes
//! `2_04_x_176fb43ae.md`) without changing what a note says. Consumers that
//! detect content changes by hash must not see such rewrites, so link
//! targets are normalized to their bare ids before hashing.

use crate::domain::NoteName;
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};
use std::fmt;

/// Rewrites every markdown link target carrying an id to the bare id.
///
/// `[desc](2_04_x_176fb43ae.md)` becomes `[desc](176fb43ae)`. Targets
/// without an id are left untouched.
pub fn normalize_links(content: &str) -> String {
    let re = Regex::new(r"\[([^\]]*)\]\(([a-zA-Z0-9_]*\.md)\)").expect("link pattern is valid");
    re.replace_all(content, |caps: &Captures| {
        match NoteName::parse(&caps[2]).id() {
            Some(id) => format!("[{}]({})", &caps[1], id.as_str()),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// SHA-256 hash of note content, 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHash {
    hex: String,
}

impl ContentHash {
    /// Computes the hash of the given bytes.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hex = format!("{:x}", hasher.finalize());
        Self { hex }
    }

    /// Computes the hash of note content with link targets normalized to
    /// bare ids first, so pure reorderings hash identically.
    pub fn compute_normalized(content: &str) -> Self {
        Self::compute(normalize_links(content).as_bytes())
    }

    /// Returns the hash as a 64-character lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}
