//! Council CLI
//!
//! Keeps the expert council mirrored into every AI coding tool used by a
//! project.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} Council CLI", "council".green().bold());
        println!();
        println!("Run {} for available commands.", "council --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "council", &mut std::io::stdout());
        return Ok(());
    }

    let project = match cli.project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let ctx = Context::load(&project, cli.council_root.as_deref())?;

    match command {
        Commands::Sync(args) => commands::run_sync(&ctx, &args),
        Commands::Targets { json } => commands::run_targets(&ctx, json),
        Commands::Experts { json } => commands::run_experts(&ctx, json),
        Commands::Doc { target } => commands::run_doc(&target),
        Commands::CleanPaths { json } => commands::run_clean_paths(json),
        Commands::Reset { yes, dry_run } => commands::run_reset(&ctx, yes, dry_run),
        Commands::Completions { .. } => Ok(()),
    }
}
