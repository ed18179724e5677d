//! Stage command handler: prepares freshly imported notes.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use super::{BatchOptions, run_rename_batch};
use crate::cli::StageArgs;
use crate::infra::{list_filenames, read_lines};
use crate::reorganize::{attach_missing_ids, attach_missing_orderings, plan_title_renames};

pub fn handle_stage(args: &StageArgs, input_dir: &Path, verbose: bool) -> Result<()> {
    let options = BatchOptions {
        yes: args.yes,
        dry_run: args.dry_run,
        format: args.format,
    };

    let filenames = list_filenames(input_dir)
        .with_context(|| format!("failed to list input directory {}", input_dir.display()))?;
    if verbose {
        println!("staging {} file(s) from {}", filenames.len(), input_dir.display());
    }

    // 1. Derive filenames from first-line headings.
    let mut files = Vec::new();
    for filename in filenames.iter().filter(|f| is_stageable(f)) {
        let lines = read_lines(input_dir, filename)
            .with_context(|| format!("failed to read {filename}"))?;
        files.push((filename.clone(), lines));
    }
    let plan = plan_title_renames(&files);
    let untouchable: HashSet<String> = plan
        .skipped
        .iter()
        .map(|skipped| skipped.filename.clone())
        .collect();
    for skipped in &plan.skipped {
        eprintln!("warning: {}: {}", skipped.filename, skipped.reason);
    }
    run_rename_batch(input_dir, "Planned title renames", &plan.commands, options)?;

    if args.titles_only {
        return Ok(());
    }

    // 2. Attach missing ids, then missing orderings, each over the current
    // state of the directory. Only markdown files the title pass accepted
    // qualify: a file it warned about is not a note yet and stays untouched.
    let filenames = markdown_files(input_dir, &untouchable)?;
    run_rename_batch(
        input_dir,
        "Missing ids",
        &attach_missing_ids(&filenames),
        options,
    )?;

    let filenames = markdown_files(input_dir, &untouchable)?;
    run_rename_batch(
        input_dir,
        "Missing orderings",
        &attach_missing_orderings(&filenames),
        options,
    )?;

    Ok(())
}

/// Staging considers markdown and plain-text imports.
fn is_stageable(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".txt")
}

fn markdown_files(dir: &Path, untouchable: &HashSet<String>) -> Result<Vec<String>> {
    let filenames = list_filenames(dir)?
        .into_iter()
        .filter(|f| f.ends_with(".md") && !untouchable.contains(f))
        .collect();
    Ok(filenames)
}
