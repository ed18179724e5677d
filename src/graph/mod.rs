//! Graph rendering: Graphviz DOT source and a textual tree view.
//!
//! Nodes are keyed by each note's stable id, so a graph rendered before and
//! after a reorganization shows the same nodes with the same identities.
//! Rendering is pure text generation; invoking Graphviz is the user's
//! business.

use crate::domain::{Link, NoteName};
use crate::reorganize::{DAUGHTER_LINK, SISTER_LINK, TreeNode};
use std::collections::HashSet;
use std::fmt::Write;

/// Renders the note graph as Graphviz DOT source.
///
/// One node per filename that carries an id, labeled with the title.
/// Explicit content links render as solid edges; hierarchy-derived edges
/// (recognized by their fixed descriptions) render dashed and labeled.
/// Edges whose endpoints cannot be resolved to ids are skipped.
pub fn render_dot<S: AsRef<str>>(filenames: &[S], links: &[Link]) -> String {
    let mut out = String::from("digraph zettelkasten {\n");
    out.push_str("    node [shape=box, style=rounded];\n");

    let mut known_ids = HashSet::new();
    for filename in filenames {
        let name = NoteName::parse(filename.as_ref());
        if let Some(id) = name.id() {
            known_ids.insert(id.as_str().to_string());
            let _ = writeln!(
                out,
                "    \"{}\" [label=\"{}\"];",
                id.as_str(),
                escape(name.title())
            );
        }
    }

    for link in links {
        let source_id = NoteName::parse(&link.source).id().cloned();
        let target_id = NoteName::parse(&link.target).id().cloned();
        let (Some(source), Some(target)) = (source_id, target_id) else {
            continue;
        };
        if !known_ids.contains(source.as_str()) || !known_ids.contains(target.as_str()) {
            continue;
        }
        if link.description == SISTER_LINK || link.description == DAUGHTER_LINK {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [style=dashed, label=\"{}\"];",
                source.as_str(),
                target.as_str(),
                escape(&link.description)
            );
        } else {
            let _ = writeln!(out, "    \"{}\" -> \"{}\";", source.as_str(), target.as_str());
        }
    }

    out.push_str("}\n");
    out
}

/// Renders the canonical forest as an indented list, one node per line.
pub fn render_tree(forest: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in forest {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &TreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let file = node.own_file.as_deref().unwrap_or("-");
    let _ = writeln!(out, "{indent}{} {}", node.label, file);
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
