//! Filename codec for the `{ordering}_{title}_{id}.md` grammar.
//!
//! Standard filenames look like `2_03_04a_5_Some_Topic_fb134b00b.md`:
//! `2_03_04a_5` places the note inside the hierarchy (four levels here),
//! `Some_Topic` is the title part, and `fb134b00b` the stable id. Both the
//! ordering and the id are optional; a bare `Some_Topic.md` is a note that
//! has not been placed or identified yet.

use crate::domain::note_id::{ID_LEN, NoteId, is_valid_id};
use std::fmt;

/// The decomposed form of a note filename.
///
/// `parse` never fails: malformed names degrade to "no ordering, no id,
/// everything is title", which downstream passes treat as candidates for
/// staging rather than errors.
///
/// # Examples
///
/// ```
/// use zettel::domain::NoteName;
///
/// let name = NoteName::parse("2_1a_render_md_files_41e5a496c.md");
/// assert_eq!(name.ordering(), "2_1a");
/// assert_eq!(name.title(), "render_md_files");
/// assert_eq!(name.id().unwrap().as_str(), "41e5a496c");
/// assert_eq!(name.filename(), "2_1a_render_md_files_41e5a496c.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    ordering: String,
    title: String,
    id: Option<NoteId>,
}

impl NoteName {
    /// Decomposes a filename into ordering, title, and id.
    ///
    /// The trailing `_<9-hex>.md` is stripped first, and only if the nine
    /// characters are exactly lowercase hex. The remainder is split at the
    /// first `_` followed by a non-digit: everything before is the
    /// ordering, everything after the title. A name that does not start
    /// with a digit has an empty ordering.
    pub fn parse(filename: &str) -> Self {
        let (rest, id) = split_id(filename);
        let (ordering, title) = split_ordering(rest);
        Self {
            ordering: ordering.to_string(),
            title: title.to_string(),
            id,
        }
    }

    /// The hierarchy path portion, possibly empty.
    pub fn ordering(&self) -> &str {
        &self.ordering
    }

    /// The title portion, possibly empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The stable id, if the filename carries one.
    pub fn id(&self) -> Option<&NoteId> {
        self.id.as_ref()
    }

    /// Reassembles the filename. Left inverse of `parse` for valid
    /// components.
    pub fn filename(&self) -> String {
        let mut filename = if self.ordering.is_empty() {
            self.title.clone()
        } else {
            format!("{}_{}", self.ordering, self.title)
        };
        if let Some(id) = &self.id {
            filename.push('_');
            filename.push_str(id.as_str());
        }
        filename.push_str(".md");
        filename
    }

    /// Returns a copy with the ordering replaced; title and id are kept
    /// verbatim.
    pub fn with_ordering(&self, ordering: impl Into<String>) -> Self {
        Self {
            ordering: ordering.into(),
            title: self.title.clone(),
            id: self.id.clone(),
        }
    }

    /// Returns a copy with the id attached; ordering and title are kept
    /// verbatim.
    pub fn with_id(&self, id: NoteId) -> Self {
        Self {
            ordering: self.ordering.clone(),
            title: self.title.clone(),
            id: Some(id),
        }
    }

    /// True if ordering, title, and id all satisfy the filename grammar.
    pub fn is_valid(&self) -> bool {
        is_valid_ordering(&self.ordering)
            && is_valid_title(&self.title)
            && self.id.as_ref().is_some_and(|id| is_valid_id(id.as_str()))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filename())
    }
}

/// Returns true if `s` is a non-empty run of digits and underscores.
pub fn is_valid_ordering(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}

/// Returns true if `s` is a non-empty run of ASCII letters and underscores.
pub fn is_valid_title(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_')
}

/// Strips a trailing `_<9-hex>.md`, or just `.md` when the id part does not
/// match exactly. Names without the extension are passed through whole.
fn split_id(filename: &str) -> (&str, Option<NoteId>) {
    let Some(stem) = filename.strip_suffix(".md") else {
        return (filename, None);
    };
    if stem.len() > ID_LEN && stem.is_char_boundary(stem.len() - ID_LEN - 1) {
        let (head, tail) = stem.split_at(stem.len() - ID_LEN - 1);
        if let Some(hex) = tail.strip_prefix('_') {
            if let Ok(id) = hex.parse::<NoteId>() {
                return (head, Some(id));
            }
        }
    }
    (stem, None)
}

/// Splits at the first `_` followed by a non-digit. The underscore is
/// consumed; the non-digit starts the title.
fn split_ordering(rest: &str) -> (&str, &str) {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_digit() => {}
        _ => return ("", rest),
    }
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'_' && !bytes[i + 1].is_ascii_digit() {
            return (&rest[..i], &rest[i + 1..]);
        }
    }
    (rest, "")
}
