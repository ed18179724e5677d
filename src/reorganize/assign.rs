//! Staging passes: titles from headings, missing ids, missing orderings.

use crate::domain::{NoteId, NoteName, RenameCommand};
use crate::infra::title_to_basename;
use std::collections::HashSet;
use std::fmt;

/// Ordering given to notes that have none yet: a reserved root position
/// that keeps them visible at the top of the hierarchy until the user
/// files them properly.
pub const ROOT_ORDERING: &str = "0_0";

/// Plans renames attaching a fresh id to every filename without one.
///
/// Ids are seeded with the filename and a timestamp; candidates that
/// collide with an id already present in the corpus (or generated earlier
/// in this batch) are regenerated until unique.
pub fn attach_missing_ids<S: AsRef<str>>(filenames: &[S]) -> Vec<RenameCommand> {
    let mut used: HashSet<String> = filenames
        .iter()
        .filter_map(|f| {
            NoteName::parse(f.as_ref())
                .id()
                .map(|id| id.as_str().to_string())
        })
        .collect();

    let mut commands = Vec::new();
    for filename in filenames {
        let filename = filename.as_ref();
        let name = NoteName::parse(filename);
        if name.id().is_some() {
            continue;
        }
        let mut id = NoteId::generate(filename);
        while used.contains(id.as_str()) {
            id = NoteId::generate(filename);
        }
        used.insert(id.as_str().to_string());
        commands.push(RenameCommand::new(filename, name.with_id(id).filename()));
    }
    commands
}

/// Plans renames giving the reserved root ordering to every filename
/// without one. Title and id pass through verbatim.
pub fn attach_missing_orderings<S: AsRef<str>>(filenames: &[S]) -> Vec<RenameCommand> {
    filenames
        .iter()
        .filter_map(|filename| {
            let filename = filename.as_ref();
            let name = NoteName::parse(filename);
            if name.ordering().is_empty() {
                Some(RenameCommand::new(
                    filename,
                    name.with_ordering(ROOT_ORDERING).filename(),
                ))
            } else {
                None
            }
        })
        .collect()
}

/// Why a file was left untouched by the title pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file has no content.
    Empty,
    /// The first line is not a markdown heading.
    NoHeading,
    /// The heading canonicalizes to an empty basename.
    EmptyTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "file is empty"),
            SkipReason::NoHeading => write!(f, "first line is not a heading"),
            SkipReason::EmptyTitle => write!(f, "heading yields an empty title"),
        }
    }
}

/// A file the title pass could not process, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: SkipReason,
}

/// Result of the title pass over freshly imported notes.
#[derive(Debug, Default)]
pub struct TitlePlan {
    pub commands: Vec<RenameCommand>,
    pub skipped: Vec<SkippedFile>,
}

/// Plans renames deriving each file's name from its first-line heading.
///
/// Input files are raw imports (`.txt` or `.md`); the new name is the
/// canonicalized heading text with an `.md` extension and neither ordering
/// nor id, which the follow-up passes attach. Files that already carry
/// their heading-derived name produce no command.
pub fn plan_title_renames(files: &[(String, Vec<String>)]) -> TitlePlan {
    let mut plan = TitlePlan::default();
    for (filename, lines) in files {
        let Some(first_line) = lines.first().map(|l| l.trim()) else {
            plan.skipped.push(SkippedFile {
                filename: filename.clone(),
                reason: SkipReason::Empty,
            });
            continue;
        };
        if first_line.is_empty() {
            plan.skipped.push(SkippedFile {
                filename: filename.clone(),
                reason: SkipReason::Empty,
            });
            continue;
        }
        if !first_line.starts_with('#') {
            plan.skipped.push(SkippedFile {
                filename: filename.clone(),
                reason: SkipReason::NoHeading,
            });
            continue;
        }
        let title = first_line.trim_start_matches('#').trim();
        let basename = title_to_basename(title);
        if basename.is_empty() {
            plan.skipped.push(SkippedFile {
                filename: filename.clone(),
                reason: SkipReason::EmptyTitle,
            });
            continue;
        }
        let new_filename = format!("{basename}.md");
        if new_filename != *filename {
            plan.commands
                .push(RenameCommand::new(filename.clone(), new_filename));
        }
    }
    plan
}
