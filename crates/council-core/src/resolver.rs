//! Target resolution
//!
//! Turns the configured target list, or detection when there is none, into
//! the ordered adapters a sync runs against. Every check here happens before
//! the first write.

use crate::{Error, Result};
use council_adapters::{Adapter, AdapterRegistry};
use council_fs::NormalizedPath;

/// Resolve the adapters to sync.
///
/// - An explicit list keeps its order; repeated names are dropped after the
///   first. Any unknown name is an error.
/// - Without a list (or with an empty one), detection decides: nothing
///   detected means the fallback adapter, otherwise every detected adapter
///   sorted by name.
pub fn resolve_targets<'r>(
    registry: &'r AdapterRegistry,
    root: &NormalizedPath,
    targets: Option<&[String]>,
) -> Result<Vec<&'r dyn Adapter>> {
    match targets {
        Some(names) if !names.is_empty() => resolve_explicit(registry, names),
        _ => resolve_detected(registry, root),
    }
}

fn resolve_explicit<'r>(registry: &'r AdapterRegistry, names: &[String]) -> Result<Vec<&'r dyn Adapter>> {
    let mut resolved: Vec<&dyn Adapter> = Vec::with_capacity(names.len());

    for name in names {
        let adapter = registry.get(name).ok_or_else(|| Error::UnknownTarget {
            name: name.clone(),
            available: registry.names().iter().map(|s| s.to_string()).collect(),
        })?;

        if resolved.iter().any(|a| a.name() == adapter.name()) {
            tracing::debug!("Ignoring repeated target {}", name);
            continue;
        }
        resolved.push(adapter);
    }

    Ok(resolved)
}

fn resolve_detected<'r>(registry: &'r AdapterRegistry, root: &NormalizedPath) -> Result<Vec<&'r dyn Adapter>> {
    let detected = registry.detect(root);
    if !detected.is_empty() {
        tracing::debug!(
            "Detected targets: {}",
            detected.iter().map(|a| a.name()).collect::<Vec<_>>().join(", ")
        );
        return Ok(detected);
    }

    let fallback = registry.fallback().ok_or(Error::NoTargets)?;
    tracing::debug!("No targets detected, using fallback {}", fallback.name());
    Ok(vec![fallback])
}

/// Check that every enabled command exists for every resolved adapter that
/// installs commands.
///
/// `None` enables all bundled commands and always passes.
pub fn validate_commands(adapters: &[&dyn Adapter], commands: Option<&[String]>) -> Result<()> {
    let Some(commands) = commands else {
        return Ok(());
    };

    for adapter in adapters {
        if adapter.paths().commands_dir.is_none() {
            continue;
        }
        let templates = &adapter.templates().commands;
        if let Some(unknown) = commands.iter().find(|name| !templates.contains_key(name.as_str())) {
            return Err(Error::UnknownCommand {
                name: unknown.clone(),
                target: adapter.name().to_string(),
                available: templates.keys().cloned().collect(),
            });
        }
    }

    Ok(())
}
