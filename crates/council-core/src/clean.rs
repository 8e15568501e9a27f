//! Managed path enumeration and reset

use crate::sync::FileError;
use council_adapters::{AdapterRegistry, Layout};
use council_fs::{NormalizedPath, io};
use serde::Serialize;
use std::collections::BTreeSet;

/// Every path any registered adapter writes to or used to write to.
///
/// Agents dirs, commands dirs, aggregate files and deprecated paths, sorted
/// and deduplicated.
pub fn all_clean_paths(registry: &AdapterRegistry) -> Vec<String> {
    let mut paths = BTreeSet::new();

    for adapter in registry.all() {
        let set = adapter.paths();
        paths.extend(set.agents_dir.iter().cloned());
        paths.extend(set.commands_dir.iter().cloned());
        paths.extend(set.deprecated.iter().cloned());
        if let Layout::Aggregate { path } = adapter.layout() {
            paths.insert(path.clone());
        }
    }

    paths.into_iter().collect()
}

/// Result of removing managed paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetReport {
    pub dry_run: bool,
    pub removed: Vec<String>,
    pub errors: Vec<FileError>,
}

impl ResetReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Remove every existing clean path under `root`.
///
/// With `dry_run` the paths that would be removed are reported and nothing
/// is touched. Paths nested in an already removed path are skipped.
pub fn reset(root: &NormalizedPath, registry: &AdapterRegistry, dry_run: bool) -> ResetReport {
    let mut report = ResetReport {
        dry_run,
        ..Default::default()
    };

    for path in all_clean_paths(registry) {
        let covered = report
            .removed
            .iter()
            .any(|removed| path.starts_with(&format!("{removed}/")));
        let full_path = root.join(&path);
        if covered || std::fs::symlink_metadata(full_path.to_native()).is_err() {
            continue;
        }

        if dry_run {
            report.removed.push(path);
            continue;
        }

        match io::remove_path(&full_path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path);
                report.removed.push(path);
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", path, e);
                report.errors.push(FileError::new(path, e));
            }
        }
    }

    report
}
