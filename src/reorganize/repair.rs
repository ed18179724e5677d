//! Detects stale links and plans their repair via stable ids.

use crate::domain::{Link, LinkScanner, NoteName, ReplaceCommand};
use std::collections::{HashMap, HashSet};

/// Result of planning link repairs.
///
/// Links whose target id cannot be resolved are returned alongside the
/// commands rather than dropped; they need manual correction and the caller
/// decides how to surface them.
#[derive(Debug, Default)]
pub struct RepairPlan {
    pub commands: Vec<ReplaceCommand>,
    pub unrepairable: Vec<Link>,
}

/// Scans every file's content and returns links whose target does not
/// exist verbatim among the given files.
pub fn find_invalid_links(files: &[(String, Vec<String>)]) -> Vec<Link> {
    let existing: HashSet<&str> = files.iter().map(|(filename, _)| filename.as_str()).collect();
    let scanner = LinkScanner::new();
    let mut invalid = Vec::new();
    for (filename, lines) in files {
        for link in scanner.scan_lines(filename, lines) {
            if !existing.contains(link.target.as_str()) {
                invalid.push(link);
            }
        }
    }
    invalid
}

/// Plans replacement commands mapping each stale target to the current
/// filename carrying the same id.
///
/// The lookup is built over files that have an id; a stale target whose id
/// is missing or no longer present in the corpus is unrepairable.
pub fn plan_repairs<S: AsRef<str>>(invalid_links: &[Link], all_files: &[S]) -> RepairPlan {
    let mut by_id: HashMap<String, &str> = HashMap::new();
    for filename in all_files {
        let filename = filename.as_ref();
        let name = NoteName::parse(filename);
        if let Some(id) = name.id() {
            by_id.insert(id.as_str().to_string(), filename);
        }
    }

    let mut plan = RepairPlan::default();
    for link in invalid_links {
        let target_id = NoteName::parse(&link.target).id().cloned();
        let current = target_id.and_then(|id| by_id.get(id.as_str()).copied());
        match current {
            Some(current) => plan.commands.push(ReplaceCommand::new(
                link.source.clone(),
                link.markdown(),
                format!("[{}]({})", link.description, current),
            )),
            None => plan.unrepairable.push(link.clone()),
        }
    }
    plan
}
