//! Interactive confirmations
//!
//! Uses dialoguer. Prompts are only shown when stdin is a terminal.

use colored::Colorize;
use dialoguer::Confirm;
use std::io::IsTerminal;

use crate::error::Result;

/// Shown wherever reset lists the paths it will remove.
pub const RESET_WARNING: &str =
    "Whole directories are removed: files council did not generate inside them are deleted too.";

/// Whether the session can answer prompts.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Ask before overwriting files council did not generate.
pub fn confirm_overwrite(paths: &[String]) -> Result<bool> {
    println!(
        "{} These files were not generated by council:",
        "!".yellow().bold()
    );
    for path in paths {
        println!("   {}", path.cyan());
    }

    let confirmed = Confirm::new()
        .with_prompt("Overwrite them with the council versions?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Ask before removing every managed path.
pub fn confirm_reset(paths: &[String]) -> Result<bool> {
    println!("{} This removes:", "!".yellow().bold());
    for path in paths {
        println!("   {}", path.cyan());
    }
    println!("{} {}", "!".yellow().bold(), RESET_WARNING);

    let confirmed = Confirm::new()
        .with_prompt("Delete these paths and everything in them, including files council did not generate?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}
