//! Diff between the desired set and the files on disk
//!
//! Building a plan only reads. A dry run reports the plan as-is; a real run
//! performs exactly the planned operations, so both report the same thing.

use super::SyncOptions;
use super::desired::DesiredSet;
use super::report::{FileChange, FileError, TargetReport};
use crate::Result;
use council_adapters::{Adapter, Layout};
use council_fs::{NormalizedPath, checksum, io};
use std::collections::BTreeSet;

/// A write the reconciler intends to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub path: String,
    pub content: String,
    pub checksum: String,
    pub diff: Option<String>,
}

impl PlannedWrite {
    fn new(path: &str, content: &str, previous: Option<&str>, options: &SyncOptions) -> Self {
        let diff = match previous {
            Some(previous) if options.diff => Some(unified_diff(path, previous, content)),
            _ => None,
        };
        Self {
            path: path.to_string(),
            content: content.to_string(),
            checksum: checksum::content_checksum(content),
            diff,
        }
    }

    pub fn change(&self) -> FileChange {
        FileChange {
            path: self.path.clone(),
            checksum: self.checksum.clone(),
            diff: self.diff.clone(),
        }
    }
}

/// Everything one target needs, classified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Directories created before any write, relative to the project root
    pub base_dirs: Vec<String>,
    /// Desired files that do not exist
    pub create: Vec<PlannedWrite>,
    /// Desired files that exist, are owned, and differ
    pub update: Vec<PlannedWrite>,
    /// Desired files already byte-identical
    pub unchanged: Vec<String>,
    /// Desired paths occupied by foreign files
    pub conflict: Vec<PlannedWrite>,
    /// Owned files no longer desired
    pub stale: Vec<String>,
    /// Deprecated paths to remove (only populated with `clean`)
    pub deprecated: Vec<String>,
    pub errors: Vec<FileError>,
}

impl Plan {
    /// Diff `desired` against the files under `root`.
    ///
    /// Listing a managed directory is the only failure that aborts the
    /// target; unreadable individual files become per-file errors.
    pub fn build(
        adapter: &dyn Adapter,
        root: &NormalizedPath,
        desired: DesiredSet,
        options: &SyncOptions,
    ) -> Result<Self> {
        let mut plan = Plan {
            base_dirs: base_dirs(adapter),
            errors: desired.errors,
            ..Default::default()
        };

        for (path, content) in &desired.files {
            match io::read_text_if_exists(&root.join(path)) {
                Ok(None) => plan.create.push(PlannedWrite::new(path, content, None, options)),
                Ok(Some(existing)) if existing == *content => plan.unchanged.push(path.clone()),
                Ok(Some(existing)) if adapter.owns(&existing) => {
                    plan.update
                        .push(PlannedWrite::new(path, content, Some(&existing), options));
                }
                Ok(Some(existing)) => {
                    plan.conflict
                        .push(PlannedWrite::new(path, content, Some(&existing), options));
                }
                Err(e) => plan.errors.push(FileError::new(path.clone(), e)),
            }
        }

        for path in owned_files(adapter, root, &mut plan.errors)? {
            if !desired.files.contains_key(&path) {
                plan.stale.push(path);
            }
        }

        if options.clean {
            plan.deprecated = adapter
                .paths()
                .deprecated
                .iter()
                .filter(|p| path_present(&root.join(p)))
                .cloned()
                .collect();
        }

        Ok(plan)
    }

    /// Report this plan would produce if applied without errors.
    pub fn expected_report(&self, options: &SyncOptions) -> TargetReport {
        let mut report = TargetReport {
            created: self.create.iter().map(PlannedWrite::change).collect(),
            updated: self.update.iter().map(PlannedWrite::change).collect(),
            unchanged: self.unchanged.clone(),
            deprecated_removed: self.deprecated.clone(),
            errors: self.errors.clone(),
            ..Default::default()
        };

        if options.force {
            report
                .updated
                .extend(self.conflict.iter().map(PlannedWrite::change));
        } else {
            report.skipped = self.conflict.iter().map(|w| w.path.clone()).collect();
        }

        if options.clean {
            report.deleted = self.stale.clone();
        } else {
            report.stale = self.stale.clone();
        }

        report
    }
}

fn base_dirs(adapter: &dyn Adapter) -> Vec<String> {
    let paths = adapter.paths();
    let mut dirs: BTreeSet<String> = paths
        .agents_dir
        .iter()
        .chain(paths.commands_dir.iter())
        .cloned()
        .collect();

    if let Layout::Aggregate { path } = adapter.layout()
        && let Some(parent) = NormalizedPath::new(path).parent()
    {
        dirs.insert(parent.to_string());
    }

    dirs.into_iter().collect()
}

/// Owned files currently in the adapter's managed locations, sorted.
fn owned_files(
    adapter: &dyn Adapter,
    root: &NormalizedPath,
    errors: &mut Vec<FileError>,
) -> Result<BTreeSet<String>> {
    let paths = adapter.paths();
    let mut candidates = Vec::new();

    let listings = [
        (paths.agents_dir.as_deref(), "md"),
        (paths.commands_dir.as_deref(), adapter.command_extension()),
    ];
    for (dir, extension) in listings {
        let Some(dir) = dir else { continue };
        for file in io::list_files(&root.join(dir), extension)? {
            if let Some(name) = file.file_name() {
                candidates.push(format!("{}/{}", dir, name));
            }
        }
    }
    if let Layout::Aggregate { path } = adapter.layout() {
        candidates.push(path.clone());
    }

    let mut owned = BTreeSet::new();
    for path in candidates {
        match io::read_text_if_exists(&root.join(&path)) {
            Ok(Some(content)) if adapter.owns(&content) => {
                owned.insert(path);
            }
            Ok(_) => {}
            Err(e) => errors.push(FileError::new(path, e)),
        }
    }
    Ok(owned)
}

fn path_present(path: &NormalizedPath) -> bool {
    std::fs::symlink_metadata(path.to_native()).is_ok()
}

fn unified_diff(path: &str, old: &str, new: &str) -> String {
    similar::TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
