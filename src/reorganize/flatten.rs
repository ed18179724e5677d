//! Flattens the canonical tree back into filenames and plans renames.

use crate::domain::{NoteName, RenameCommand};
use crate::reorganize::tree::TreeNode;

/// A filename paired with its canonical ordering path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub ordering: String,
    pub filename: String,
}

/// Walks the forest depth-first, accumulating `_`-joined canonical paths.
///
/// Only nodes that own a file produce entries; label-only nodes contribute
/// their path segment and nothing else.
pub fn flatten(forest: &[TreeNode]) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    for node in forest {
        flatten_node(node, "", &mut entries);
    }
    entries
}

fn flatten_node(node: &TreeNode, prefix: &str, entries: &mut Vec<FlatEntry>) {
    let path = if prefix.is_empty() {
        node.label.clone()
    } else {
        format!("{prefix}_{}", node.label)
    };
    if let Some(filename) = &node.own_file {
        entries.push(FlatEntry {
            ordering: path.clone(),
            filename: filename.clone(),
        });
    }
    for child in &node.children {
        flatten_node(child, &path, entries);
    }
}

/// Emits a rename for every file whose embedded ordering differs from its
/// canonical path. Title and id pass through verbatim; files already in
/// canonical position produce no command.
pub fn plan_renames(flattened: &[FlatEntry]) -> Vec<RenameCommand> {
    flattened
        .iter()
        .filter_map(|entry| {
            let name = NoteName::parse(&entry.filename);
            if name.ordering() == entry.ordering {
                None
            } else {
                Some(RenameCommand::new(
                    entry.filename.clone(),
                    name.with_ordering(&entry.ordering).filename(),
                ))
            }
        })
        .collect()
}
