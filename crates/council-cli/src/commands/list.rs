//! Listing commands: targets, experts, clean-paths, doc

use colored::Colorize;
use serde::Serialize;

use council_adapters::{Adapter, AdapterRegistry};
use council_core::{SyncEngine, all_clean_paths};

use crate::context::Context;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct TargetInfo<'a> {
    name: &'a str,
    display_name: &'a str,
    detected: bool,
    fallback: bool,
    agents_dir: Option<&'a str>,
    commands_dir: Option<&'a str>,
    deprecated: &'a [String],
}

impl<'a> TargetInfo<'a> {
    fn new(adapter: &'a dyn Adapter, detected: bool) -> Self {
        let paths = adapter.paths();
        Self {
            name: adapter.name(),
            display_name: adapter.display_name(),
            detected,
            fallback: adapter.is_fallback(),
            agents_dir: paths.agents_dir.as_deref(),
            commands_dir: paths.commands_dir.as_deref(),
            deprecated: &paths.deprecated,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExpertInfo {
    id: String,
    name: String,
    focus: String,
    source: String,
    filename: String,
}

/// Run the targets command
pub fn run_targets(ctx: &Context, json: bool) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let detected: Vec<&str> = registry
        .detect(&ctx.root)
        .into_iter()
        .map(|a| a.name())
        .collect();

    let targets: Vec<TargetInfo> = registry
        .all()
        .into_iter()
        .map(|a| TargetInfo::new(a, detected.contains(&a.name())))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    println!("{}", "Available Targets".bold());
    println!();
    for target in &targets {
        let status = if target.detected {
            "detected".green()
        } else if target.fallback {
            "fallback".cyan()
        } else {
            "-".dimmed()
        };
        println!(
            "   {:<10} {:<22} {}",
            target.name.bold(),
            target.display_name,
            status
        );
    }
    Ok(())
}

/// Run the experts command
pub fn run_experts(ctx: &Context, json: bool) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let engine = SyncEngine::new(ctx.root.clone(), &registry);
    let experts = engine.load_experts(&ctx.config)?;

    let infos: Vec<ExpertInfo> = experts
        .iter()
        .map(|e| ExpertInfo {
            id: e.id.clone(),
            name: e.name.clone(),
            focus: e.focus.clone(),
            source: e.source.to_string(),
            filename: e.agent_filename(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    if infos.is_empty() {
        println!("The council has no members yet.");
        return Ok(());
    }

    for info in &infos {
        let source = if info.source.is_empty() {
            String::new()
        } else {
            format!(" [{}]", info.source)
        };
        println!(
            "   {:<24} {}{}",
            info.filename.cyan(),
            info.name.bold(),
            source.dimmed()
        );
        println!("   {:<24} {}", "", info.focus.dimmed());
    }
    Ok(())
}

/// Run the doc command
pub fn run_doc(target: &str) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let adapter = registry
        .get(target)
        .ok_or_else(|| council_core::Error::UnknownTarget {
            name: target.to_string(),
            available: registry.names().iter().map(|s| s.to_string()).collect(),
        })?;

    print!("{}", adapter.templates().install_doc);
    Ok(())
}

/// Run the clean-paths command
pub fn run_clean_paths(json: bool) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();
    let paths = all_clean_paths(&registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &paths {
            println!("{}", path);
        }
    }
    Ok(())
}
