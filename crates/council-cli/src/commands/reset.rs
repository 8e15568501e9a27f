//! Reset command implementation

use colored::Colorize;

use council_adapters::AdapterRegistry;
use council_core::reset;

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the reset command
///
/// Removes every managed path that exists in the project, whether or not
/// council generated its contents. Requires `--yes` outside a terminal.
pub fn run_reset(ctx: &Context, yes: bool, dry_run: bool) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let preview = reset(&ctx.root, &registry, true);

    if preview.removed.is_empty() {
        println!("{} Nothing to remove.", "OK".green().bold());
        return Ok(());
    }

    if dry_run {
        println!("{} [dry-run] Would remove:", "=>".blue().bold());
        for path in &preview.removed {
            println!("   {} {}", "-".red(), path);
        }
        println!("{} {}", "!".yellow().bold(), interactive::RESET_WARNING);
        return Ok(());
    }

    if !yes {
        if !interactive::is_interactive() {
            return Err(CliError::user(
                "reset deletes managed directories, including files council did not generate; \
                 pass --yes to confirm in non-interactive sessions",
            ));
        }
        if !interactive::confirm_reset(&preview.removed)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let report = reset(&ctx.root, &registry, false);
    for path in &report.removed {
        println!("   {} {}", "-".red(), path);
    }
    for error in &report.errors {
        println!("   {} {}: {}", "x".red().bold(), error.path, error.message);
    }

    if !report.is_success() {
        return Err(CliError::user("some paths could not be removed"));
    }
    println!("{} Removed {} path(s).", "OK".green().bold(), report.removed.len());
    Ok(())
}
