//! Sync reports

use serde::Serialize;

/// A file written (or planned to be written)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path relative to the project root
    pub path: String,
    /// `sha256:` checksum of the written content
    pub checksum: String,
    /// Unified diff against the previous content, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// A file that could not be produced, written or removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: String,
    pub message: String,
}

impl FileError {
    pub fn new(path: impl Into<String>, message: impl ToString) -> Self {
        Self {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result of reconciling one target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub created: Vec<FileChange>,
    pub updated: Vec<FileChange>,
    /// Stale generated files removed
    pub deleted: Vec<String>,
    /// Byte-identical files left untouched
    pub unchanged: Vec<String>,
    /// Foreign files at managed paths, left alone without `force`
    pub skipped: Vec<String>,
    /// Stale generated files kept because `clean` was not set
    pub stale: Vec<String>,
    /// Deprecated layout paths removed
    pub deprecated_removed: Vec<String>,
    pub errors: Vec<FileError>,
}

impl TargetReport {
    /// Number of filesystem mutations.
    pub fn change_count(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len() + self.deprecated_removed.len()
    }

    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Outcome of one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetOutcome {
    Completed(TargetReport),
    Failed { error: String },
}

/// One target's name and outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResult {
    pub target: String,
    pub display_name: String,
    #[serde(flatten)]
    pub outcome: TargetOutcome,
}

impl TargetResult {
    pub fn report(&self) -> Option<&TargetReport> {
        match &self.outcome {
            TargetOutcome::Completed(report) => Some(report),
            TargetOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, TargetOutcome::Failed { .. })
    }
}

/// Report from a sync run, one entry per target in resolution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub targets: Vec<TargetResult>,
}

impl SyncReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            targets: Vec::new(),
        }
    }

    /// True if any target failed as a whole.
    pub fn has_failures(&self) -> bool {
        self.targets.iter().any(TargetResult::is_failed)
    }

    /// True if every target completed without per-file errors.
    pub fn is_success(&self) -> bool {
        !self.has_failures()
            && self
                .targets
                .iter()
                .filter_map(TargetResult::report)
                .all(|r| !r.has_errors())
    }

    /// Total mutations across completed targets.
    pub fn change_count(&self) -> usize {
        self.targets
            .iter()
            .filter_map(TargetResult::report)
            .map(TargetReport::change_count)
            .sum()
    }

    pub fn get(&self, target: &str) -> Option<&TargetResult> {
        self.targets.iter().find(|t| t.target == target)
    }
}
