//! Sync command implementation

use colored::Colorize;

use council_adapters::AdapterRegistry;
use council_core::{SyncEngine, SyncOptions, SyncReport, TargetOutcome, TargetReport};

use crate::cli::SyncArgs;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the sync command
///
/// Without `--force`, an interactive session is first shown the files that
/// would be skipped because council did not generate them, and may choose
/// to overwrite them.
pub fn run_sync(ctx: &Context, args: &SyncArgs) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let engine = SyncEngine::new(ctx.root.clone(), &registry);

    let mut options = SyncOptions {
        dry_run: args.dry_run,
        clean: args.clean,
        force: args.force,
        diff: args.diff,
    };

    if !options.force && !options.dry_run && !args.json && interactive::is_interactive() {
        let preview = execute(
            &engine,
            ctx,
            args,
            SyncOptions {
                dry_run: true,
                diff: false,
                ..options
            },
        )?;
        let conflicts: Vec<String> = preview
            .targets
            .iter()
            .filter_map(|t| t.report())
            .flat_map(|r| r.skipped.iter().cloned())
            .collect();
        if !conflicts.is_empty() && interactive::confirm_overwrite(&conflicts)? {
            options.force = true;
        }
    }

    if !args.json {
        let prefix = if options.dry_run { "[dry-run] " } else { "" };
        println!("{} {}Synchronizing council...", "=>".blue().bold(), prefix);
    }

    let report = execute(&engine, ctx, args, options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &options);
    }

    if report.has_failures() {
        return Err(CliError::user("one or more targets failed to sync"));
    }
    if !report.is_success() {
        return Err(CliError::user("some files could not be synced"));
    }
    Ok(())
}

fn execute(engine: &SyncEngine<'_>, ctx: &Context, args: &SyncArgs, options: SyncOptions) -> Result<SyncReport> {
    let report = match &args.target {
        Some(target) => engine.sync_target(target, &ctx.config, options)?,
        None => engine.sync_all(&ctx.config, options)?,
    };
    Ok(report)
}

fn print_report(report: &SyncReport, options: &SyncOptions) {
    for target in &report.targets {
        println!();
        println!(
            "{} {}",
            target.target.bold(),
            format!("({})", target.display_name).dimmed()
        );

        match &target.outcome {
            TargetOutcome::Completed(target_report) => print_target(target_report, options),
            TargetOutcome::Failed { error } => {
                println!("   {} {}", "FAILED".red().bold(), error);
            }
        }
    }

    println!();
    let changes = report.change_count();
    let verb = if report.dry_run { "would be made" } else { "made" };
    if report.is_success() {
        if changes == 0 {
            println!("{} Everything is up to date.", "OK".green().bold());
        } else {
            println!("{} {} change(s) {}.", "OK".green().bold(), changes, verb);
        }
    } else {
        println!(
            "{} {} change(s) {}, with errors.",
            "WARN".yellow().bold(),
            changes,
            verb
        );
    }
}

fn print_target(report: &TargetReport, options: &SyncOptions) {
    for change in &report.created {
        println!("   {} {}", "+".green(), change.path);
    }
    for change in &report.updated {
        println!("   {} {}", "~".yellow(), change.path);
        if let Some(diff) = &change.diff {
            print_diff(diff);
        }
    }
    for path in &report.deleted {
        println!("   {} {}", "-".red(), path);
    }
    for path in &report.deprecated_removed {
        println!("   {} {} {}", "-".red(), path, "(deprecated layout)".dimmed());
    }
    for path in &report.skipped {
        println!(
            "   {} {} {}",
            "!".yellow(),
            path,
            "(not generated by council, use --force to overwrite)".dimmed()
        );
    }
    for path in &report.stale {
        println!(
            "   {} {} {}",
            "?".yellow(),
            path,
            "(no longer in the council, use --clean to remove)".dimmed()
        );
    }
    for error in &report.errors {
        println!("   {} {}: {}", "x".red().bold(), error.path, error.message);
    }

    if !report.unchanged.is_empty() && options.diff {
        println!("   {} {} unchanged", "=".dimmed(), report.unchanged.len());
    }
    if !report.has_changes() && report.skipped.is_empty() && report.errors.is_empty() {
        println!("   {}", "up to date".dimmed());
    }
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.bold()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        println!("     {}", styled);
    }
}
