//! Reorganize command handler: ids, canonical renumbering, link repair.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{BatchOptions, run_rename_batch, run_replace_batch};
use crate::cli::ReorganizeArgs;
use crate::infra::{list_filenames, read_lines};
use crate::reorganize::{
    attach_missing_ids, build_forest, find_collisions, find_invalid_links, flatten, plan_renames,
    plan_repairs, tokenize,
};

pub fn handle_reorganize(args: &ReorganizeArgs, dir: &Path, verbose: bool) -> Result<()> {
    let options = BatchOptions {
        yes: args.yes,
        dry_run: args.dry_run,
        format: args.format,
    };

    // 1. Every note needs an id before links can survive renumbering.
    let filenames = list_filenames(dir)
        .with_context(|| format!("failed to list Zettelkasten directory {}", dir.display()))?;
    run_rename_batch(dir, "Missing ids", &attach_missing_ids(&filenames), options)?;

    // 2. Renumbering a collided corpus would silently drop claimants.
    let filenames = list_filenames(dir)?;
    let tokenized = tokenize(&filenames);
    let collisions = find_collisions(&tokenized);
    if !collisions.is_empty() {
        for collision in &collisions {
            eprintln!(
                "error: ordering {} is claimed by: {}",
                collision.ordering,
                collision.filenames.join(", ")
            );
        }
        bail!("ordering collisions must be resolved before renumbering");
    }

    // 3. Canonical renumbering.
    let commands = plan_renames(&flatten(&build_forest(&tokenized)));
    run_rename_batch(dir, "Hierarchy renumbering", &commands, options)?;

    // 4. Repair links whose targets drifted.
    let filenames = list_filenames(dir)?;
    if verbose {
        println!("scanning {} file(s) for links", filenames.len());
    }
    let mut files = Vec::new();
    for filename in &filenames {
        let lines =
            read_lines(dir, filename).with_context(|| format!("failed to read {filename}"))?;
        if lines.is_empty() {
            eprintln!("warning: empty file: {filename}");
        }
        files.push((filename.clone(), lines));
    }
    let invalid = find_invalid_links(&files);
    let plan = plan_repairs(&invalid, &filenames);
    for link in &plan.unrepairable {
        eprintln!(
            "warning: {}: link [{}]({}) has no live id; correct manually",
            link.source, link.description, link.target
        );
    }
    run_replace_batch(dir, "Link repairs", &plan.commands, options)?;

    Ok(())
}
