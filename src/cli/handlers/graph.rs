//! Graph and tree command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::GraphArgs;
use crate::domain::{Link, LinkScanner};
use crate::graph::{render_dot, render_tree};
use crate::infra::{list_filenames, read_lines};
use crate::reorganize::{build_forest, hierarchy_links, tokenize};

pub fn handle_graph(args: &GraphArgs, dir: &Path) -> Result<()> {
    let filenames = list_filenames(dir)
        .with_context(|| format!("failed to list Zettelkasten directory {}", dir.display()))?;

    let scanner = LinkScanner::new();
    let mut links: Vec<Link> = Vec::new();
    for filename in &filenames {
        let lines =
            read_lines(dir, filename).with_context(|| format!("failed to read {filename}"))?;
        links.extend(scanner.scan_lines(filename, &lines));
    }

    let forest = build_forest(&tokenize(&filenames));
    links.extend(hierarchy_links(&forest));

    let dot = render_dot(&filenames, &links);
    match &args.output {
        Some(path) => std::fs::write(path, dot)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{dot}"),
    }
    Ok(())
}

pub fn handle_tree(dir: &Path) -> Result<()> {
    let filenames = list_filenames(dir)
        .with_context(|| format!("failed to list Zettelkasten directory {}", dir.display()))?;
    let forest = build_forest(&tokenize(&filenames));
    print!("{}", render_tree(&forest));
    Ok(())
}
