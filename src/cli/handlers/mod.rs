//! Command handlers for the CLI.

mod graph;
mod reorganize;
mod stage;

pub use graph::{handle_graph, handle_tree};
pub use reorganize::handle_reorganize;
pub use stage::handle_stage;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::output::{Output, OutputFormat};
use crate::domain::{RenameCommand, ReplaceCommand};
use crate::infra::{apply_renames, apply_replacements};

/// How a command batch should be presented and executed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BatchOptions {
    pub yes: bool,
    pub dry_run: bool,
    pub format: OutputFormat,
}

/// Asks the user whether to proceed. Anything but `y`/`yes` declines.
fn confirm() -> Result<bool> {
    print!("Proceed? [y/N] ");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Previews and, after confirmation, executes a rename batch.
///
/// An empty batch short-circuits without prompting. Returns true if the
/// batch was applied.
pub(crate) fn run_rename_batch(
    dir: &Path,
    title: &str,
    commands: &[RenameCommand],
    options: BatchOptions,
) -> Result<bool> {
    match options.format {
        OutputFormat::Human => {
            if commands.is_empty() {
                println!("{title}: nothing to do.");
                return Ok(false);
            }
            println!("{title} ({}):", commands.len());
            for (index, command) in commands.iter().enumerate() {
                println!("  {}. {}", index + 1, command.old_filename);
                println!("     -> {}", command.new_filename);
            }
        }
        OutputFormat::Json => {
            let out = Output::new(commands);
            println!("{}", serde_json::to_string_pretty(&out)?);
            if commands.is_empty() {
                return Ok(false);
            }
        }
    }

    if options.dry_run {
        return Ok(false);
    }
    if !options.yes && !confirm()? {
        return Ok(false);
    }
    apply_renames(dir, commands)
        .with_context(|| format!("failed to apply renames in {}", dir.display()))?;
    Ok(true)
}

/// Previews and, after confirmation, executes a replacement batch.
pub(crate) fn run_replace_batch(
    dir: &Path,
    title: &str,
    commands: &[ReplaceCommand],
    options: BatchOptions,
) -> Result<bool> {
    match options.format {
        OutputFormat::Human => {
            if commands.is_empty() {
                println!("{title}: nothing to do.");
                return Ok(false);
            }
            println!("{title} ({}):", commands.len());
            for (index, command) in commands.iter().enumerate() {
                println!("  {}. {}", index + 1, command.filename);
                println!("     {}", command.old_text);
                println!("     -> {}", command.new_text);
            }
        }
        OutputFormat::Json => {
            let out = Output::new(commands);
            println!("{}", serde_json::to_string_pretty(&out)?);
            if commands.is_empty() {
                return Ok(false);
            }
        }
    }

    if options.dry_run {
        return Ok(false);
    }
    if !options.yes && !confirm()? {
        return Ok(false);
    }
    apply_replacements(dir, commands)
        .with_context(|| format!("failed to apply replacements in {}", dir.display()))?;
    Ok(true)
}
