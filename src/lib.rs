//! zettel - filename-encoded hierarchical note management

pub mod cli;
pub mod domain;
pub mod graph;
pub mod infra;
pub mod reorganize;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_graph, handle_reorganize, handle_stage, handle_tree},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let kasten_dir = config.kasten_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Stage(args) => {
            let input_dir = config.input_dir(args.input.as_ref(), cli.dir.as_ref());
            handle_stage(args, &input_dir, verbose)
        }
        Command::Reorganize(args) => handle_reorganize(args, &kasten_dir, verbose),
        Command::Tree(_) => handle_tree(&kasten_dir),
        Command::Graph(args) => handle_graph(args, &kasten_dir),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "zk",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
