//! Stable 9-hex-character note identifier.

use chrono::Local;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The exact length of a note identifier.
pub const ID_LEN: usize = 9;

/// A unique identifier for notes.
///
/// Ids are exactly 9 lowercase hexadecimal characters, derived from a
/// SHA-256 digest of a seed text peppered with a high-resolution timestamp.
/// Once attached to a note, the id never changes: orderings and titles may
/// drift freely across reorganizations, but the id is the one stable handle
/// other notes can link against.
///
/// # Examples
///
/// ```
/// use zettel::domain::NoteId;
///
/// let id: NoteId = "fb134b00b".parse().unwrap();
/// assert_eq!(id.as_str(), "fb134b00b");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh id from a seed text.
    ///
    /// The seed is concatenated with the current local timestamp
    /// (`%Y%m%d%H%M%S%f`) before hashing, so repeated calls with the same
    /// seed produce different ids. Collisions are statistically negligible
    /// but not impossible; callers that attach ids to a corpus enforce
    /// uniqueness by regenerating on a clash.
    pub fn generate(seed: &str) -> Self {
        let stamp = Local::now().format("%Y%m%d%H%M%S%f").to_string();
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update(stamp.as_bytes());
        let hex = format!("{:x}", hasher.finalize());
        Self(hex[..ID_LEN].to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if `s` is exactly 9 lowercase hex characters.
pub fn is_valid_id(s: &str) -> bool {
    s.len() == ID_LEN
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid id string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid note id '{}': expected exactly {} lowercase hex characters",
            self.value, ID_LEN
        )
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_id(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseNoteIdError {
                value: s.to_string(),
            })
        }
    }
}
