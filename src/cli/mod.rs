//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// zettel - filename-encoded hierarchical note management
#[derive(Parser, Debug)]
#[command(name = "zk", version, about, long_about = None)]
pub struct Cli {
    /// Zettelkasten directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare freshly imported notes: titles from headings, ids, orderings
    Stage(StageArgs),

    /// Renumber the hierarchy to canonical form and repair stale links
    Reorganize(ReorganizeArgs),

    /// Show the note hierarchy as an indented tree
    Tree(TreeArgs),

    /// Render the note graph as Graphviz DOT source
    Graph(GraphArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `stage` command
#[derive(Parser, Debug)]
pub struct StageArgs {
    /// Input directory holding freshly imported notes (overrides config)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Only rename from headings; skip id and ordering attachment
    #[arg(long)]
    pub titles_only: bool,

    /// Apply batches without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Preview the planned batches without applying anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for batch previews
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `reorganize` command
#[derive(Parser, Debug)]
pub struct ReorganizeArgs {
    /// Apply batches without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Preview the planned batches without applying anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for batch previews
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tree` command
#[derive(Parser, Debug)]
pub struct TreeArgs {}

/// Arguments for the `graph` command
#[derive(Parser, Debug)]
pub struct GraphArgs {
    /// Write DOT source to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
