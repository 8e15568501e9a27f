//! Core orchestration for council sync
//!
//! Resolves which tools to sync, reconciles each tool's directories against
//! the expert set, and aggregates per-target outcomes into a [`SyncReport`].
//!
//! ```text
//! SyncEngine ──▶ resolver ──▶ [adapters]
//!     │
//!     └──▶ Reconciler (per target) ──▶ desired set ─▶ plan ─▶ apply
//! ```

pub mod clean;
pub mod error;
pub mod resolver;
pub mod sync;

pub use clean::{ResetReport, all_clean_paths, reset};
pub use error::{Error, Result};
pub use resolver::{resolve_targets, validate_commands};
pub use sync::{
    FileChange, FileError, Reconciler, SyncEngine, SyncOptions, SyncReport, TargetOutcome,
    TargetReport, TargetResult,
};
