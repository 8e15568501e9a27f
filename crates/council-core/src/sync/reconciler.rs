//! Per-target reconciliation

use super::SyncOptions;
use super::desired::desired_files;
use super::plan::{Plan, PlannedWrite};
use super::report::{FileError, TargetReport};
use crate::{Error, Result};
use council_adapters::Adapter;
use council_fs::{NormalizedPath, io};
use council_meta::Expert;

/// Brings one target's directories in line with the expert set.
pub struct Reconciler<'a> {
    adapter: &'a dyn Adapter,
    root: &'a NormalizedPath,
    options: SyncOptions,
}

impl<'a> Reconciler<'a> {
    pub fn new(adapter: &'a dyn Adapter, root: &'a NormalizedPath, options: SyncOptions) -> Self {
        Self {
            adapter,
            root,
            options,
        }
    }

    /// Compute the plan for this target without touching the filesystem.
    pub fn plan(&self, experts: &[Expert], commands: Option<&[String]>) -> Result<Plan> {
        let desired = desired_files(self.adapter, experts, commands);
        Plan::build(self.adapter, self.root, desired, &self.options)
    }

    /// Reconcile the target.
    ///
    /// Returns `Err` only when the target as a whole cannot be processed;
    /// individual file failures are recorded in the report.
    pub fn reconcile(&self, experts: &[Expert], commands: Option<&[String]>) -> Result<TargetReport> {
        let plan = self.plan(experts, commands)?;

        if self.options.dry_run {
            tracing::debug!(
                "[dry-run] {}: {} to create, {} to update",
                self.adapter.name(),
                plan.create.len(),
                plan.update.len()
            );
            return Ok(plan.expected_report(&self.options));
        }

        self.apply(plan)
    }

    fn apply(&self, plan: Plan) -> Result<TargetReport> {
        for dir in &plan.base_dirs {
            io::ensure_dir(&self.root.join(dir)).map_err(|source| Error::TargetSetup {
                target: self.adapter.name().to_string(),
                path: dir.clone(),
                source,
            })?;
        }

        let mut report = TargetReport {
            unchanged: plan.unchanged,
            errors: plan.errors,
            ..Default::default()
        };

        for write in &plan.create {
            if self.write(write, &mut report.errors) {
                report.created.push(write.change());
            }
        }
        for write in &plan.update {
            if self.write(write, &mut report.errors) {
                report.updated.push(write.change());
            }
        }
        for write in &plan.conflict {
            if !self.options.force {
                tracing::warn!("Skipping {}: not generated by council (use --force)", write.path);
                report.skipped.push(write.path.clone());
            } else if self.write(write, &mut report.errors) {
                report.updated.push(write.change());
            }
        }

        for path in plan.stale {
            if !self.options.clean {
                report.stale.push(path);
            } else if self.remove(&path, &mut report.errors) {
                report.deleted.push(path);
            }
        }

        for path in plan.deprecated {
            if self.remove(&path, &mut report.errors) {
                report.deprecated_removed.push(path);
            }
        }

        Ok(report)
    }

    fn write(&self, write: &PlannedWrite, errors: &mut Vec<FileError>) -> bool {
        match io::write_text(&self.root.join(&write.path), &write.content) {
            Ok(()) => {
                tracing::debug!("Wrote {}", write.path);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to write {}: {}", write.path, e);
                errors.push(FileError::new(write.path.clone(), e));
                false
            }
        }
    }

    fn remove(&self, path: &str, errors: &mut Vec<FileError>) -> bool {
        match io::remove_path(&self.root.join(path)) {
            Ok(()) => {
                tracing::debug!("Removed {}", path);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", path, e);
                errors.push(FileError::new(path, e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_adapters::{GenericAdapter, claude_adapter};
    use council_test_utils::TestCouncil;
    use pretty_assertions::assert_eq;

    fn experts() -> Vec<Expert> {
        vec![
            Expert::new("dhh", "DHH", "Rails"),
            Expert::new("beck", "Kent Beck", "TDD"),
        ]
    }

    fn run(council: &TestCouncil, adapter: &dyn Adapter, experts: &[Expert], options: SyncOptions) -> Result<TargetReport> {
        let root = NormalizedPath::new(council.root());
        Reconciler::new(adapter, &root, options).reconcile(experts, None)
    }

    #[test]
    fn test_second_run_is_noop() {
        let council = TestCouncil::new();
        let adapter = claude_adapter();

        let first = run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();
        assert_eq!(first.created.len(), 5);

        let second = run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();
        assert_eq!(second.change_count(), 0);
        assert_eq!(second.unchanged.len(), 5);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let council = TestCouncil::new();
        let adapter = claude_adapter();
        let options = SyncOptions {
            dry_run: true,
            ..Default::default()
        };

        let report = run(&council, &adapter, &experts(), options).unwrap();

        assert_eq!(report.created.len(), 5);
        council.assert_file_not_exists(".claude");
    }

    #[test]
    fn test_stale_kept_without_clean_removed_with_clean() {
        let council = TestCouncil::new();
        let adapter = claude_adapter();
        run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();

        let remaining = vec![Expert::new("dhh", "DHH", "Rails")];
        let report = run(&council, &adapter, &remaining, SyncOptions::default()).unwrap();
        assert_eq!(report.stale, vec![".claude/agents/beck.md"]);
        council.assert_file_exists(".claude/agents/beck.md");

        let clean = SyncOptions {
            clean: true,
            ..Default::default()
        };
        let report = run(&council, &adapter, &remaining, clean).unwrap();
        assert_eq!(report.deleted, vec![".claude/agents/beck.md"]);
        council.assert_file_not_exists(".claude/agents/beck.md");
    }

    #[test]
    fn test_foreign_file_needs_force() {
        let council = TestCouncil::new();
        let adapter = claude_adapter();
        council.write_file(".claude/agents/dhh.md", "# Hand written\n");

        let report = run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();
        assert_eq!(report.skipped, vec![".claude/agents/dhh.md"]);
        assert_eq!(council.read_file(".claude/agents/dhh.md"), "# Hand written\n");

        let force = SyncOptions {
            force: true,
            ..Default::default()
        };
        let report = run(&council, &adapter, &experts(), force).unwrap();
        assert_eq!(report.updated.len(), 1);
        council.assert_file_contains(".claude/agents/dhh.md", "council:generated");
    }

    #[test]
    fn test_foreign_files_are_never_deleted() {
        let council = TestCouncil::new();
        let adapter = claude_adapter();
        council.write_file(".claude/agents/mine.md", "# Mine\n");
        council.write_file(".claude/commands/deploy.md", "# Deploy\n");

        let clean = SyncOptions {
            clean: true,
            force: true,
            ..Default::default()
        };
        let report = run(&council, &adapter, &experts(), clean).unwrap();

        assert!(report.deleted.is_empty());
        council.assert_file_exists(".claude/agents/mine.md");
        council.assert_file_exists(".claude/commands/deploy.md");
    }

    #[test]
    fn test_blocked_base_dir_fails_target() {
        let council = TestCouncil::new();
        council.block_path(".claude");

        let result = run(&council, &claude_adapter(), &experts(), SyncOptions::default());
        assert!(matches!(result, Err(Error::TargetSetup { .. })));
    }

    #[test]
    fn test_blocked_file_is_per_file_error() {
        let council = TestCouncil::new();
        // A directory where the agent file should go cannot be read as text
        council.create_dir(".claude/agents/dhh.md");

        let report = run(&council, &claude_adapter(), &experts(), SyncOptions::default()).unwrap();

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, ".claude/agents/dhh.md");
        council.assert_file_exists(".claude/agents/beck.md");
    }

    #[test]
    fn test_aggregate_round() {
        let council = TestCouncil::new();
        let adapter = GenericAdapter::new();

        let report = run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();
        assert_eq!(report.created[0].path, "COUNCIL.md");
        council.assert_file_contains("COUNCIL.md", "## Kent Beck");

        let report = run(&council, &adapter, &experts(), SyncOptions::default()).unwrap();
        assert_eq!(report.unchanged, vec!["COUNCIL.md"]);
    }
}
