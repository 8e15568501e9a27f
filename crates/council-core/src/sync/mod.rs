//! Synchronization of experts into tool directories
//!
//! - [`desired`] computes the files that should exist for one target
//! - [`plan`] diffs them against the files on disk
//! - [`Reconciler`] applies a plan to one target
//! - [`SyncEngine`] runs every resolved target and collects a [`SyncReport`]

pub mod desired;
mod engine;
pub mod plan;
mod reconciler;
mod report;

pub use engine::SyncEngine;
pub use reconciler::Reconciler;
pub use report::{FileChange, FileError, SyncReport, TargetOutcome, TargetReport, TargetResult};

use serde::Serialize;

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncOptions {
    /// Compute and report the plan without writing anything.
    pub dry_run: bool,
    /// Delete stale generated files and remove deprecated paths.
    pub clean: bool,
    /// Overwrite files at managed paths that were not generated by council.
    pub force: bool,
    /// Attach a unified diff to every planned update.
    pub diff: bool,
}
