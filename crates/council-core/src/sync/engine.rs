//! SyncEngine implementation
//!
//! Runs the reconciler for every resolved target. Configuration problems
//! abort before the first write; a failing target is recorded and the
//! remaining targets still run.

use super::SyncOptions;
use super::reconciler::Reconciler;
use super::report::{SyncReport, TargetOutcome, TargetResult};
use crate::resolver::{resolve_targets, validate_commands};
use crate::{Error, Result};
use council_adapters::{Adapter, AdapterRegistry};
use council_fs::NormalizedPath;
use council_meta::{CouncilConfig, Expert, ExpertStore};

/// Engine for synchronizing the council into tool directories
pub struct SyncEngine<'r> {
    /// Project root every target path is relative to
    root: NormalizedPath,
    registry: &'r AdapterRegistry,
}

impl<'r> SyncEngine<'r> {
    pub fn new(root: NormalizedPath, registry: &'r AdapterRegistry) -> Self {
        Self { root, registry }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn registry(&self) -> &'r AdapterRegistry {
        self.registry
    }

    /// Load the expert set from the configured council root.
    ///
    /// # Errors
    ///
    /// Fails when the council root does not exist.
    pub fn load_experts(&self, config: &CouncilConfig) -> Result<Vec<Expert>> {
        let store = ExpertStore::new(config.council_root_path(&self.root));
        let experts = store.list()?;
        tracing::debug!("Loaded {} experts from {}", experts.len(), store.root());
        Ok(experts)
    }

    /// Sync every configured or detected target.
    pub fn sync_all(&self, config: &CouncilConfig, options: SyncOptions) -> Result<SyncReport> {
        let experts = self.load_experts(config)?;
        let adapters = resolve_targets(self.registry, &self.root, config.targets.as_deref())?;
        validate_commands(&adapters, config.commands.as_deref())?;

        Ok(self.sync_experts(&adapters, &experts, config.commands.as_deref(), options))
    }

    /// Sync exactly one named target, regardless of configuration or detection.
    pub fn sync_target(&self, name: &str, config: &CouncilConfig, options: SyncOptions) -> Result<SyncReport> {
        let adapter = self.registry.get(name).ok_or_else(|| Error::UnknownTarget {
            name: name.to_string(),
            available: self.registry.names().iter().map(|s| s.to_string()).collect(),
        })?;
        let experts = self.load_experts(config)?;
        validate_commands(&[adapter], config.commands.as_deref())?;

        Ok(self.sync_experts(&[adapter], &experts, config.commands.as_deref(), options))
    }

    /// Reconcile the given adapters in order against an explicit expert set.
    ///
    /// Every adapter is attempted; failures are captured per target.
    pub fn sync_experts(
        &self,
        adapters: &[&dyn Adapter],
        experts: &[Expert],
        commands: Option<&[String]>,
        options: SyncOptions,
    ) -> SyncReport {
        let mut report = SyncReport::new(options.dry_run);

        for adapter in adapters {
            let reconciler = Reconciler::new(*adapter, &self.root, options);
            let outcome = match reconciler.reconcile(experts, commands) {
                Ok(target_report) => {
                    tracing::info!(
                        "{}: {} created, {} updated, {} deleted, {} unchanged",
                        adapter.name(),
                        target_report.created.len(),
                        target_report.updated.len(),
                        target_report.deleted.len(),
                        target_report.unchanged.len()
                    );
                    for error in &target_report.errors {
                        tracing::warn!("{}: {}: {}", adapter.name(), error.path, error.message);
                    }
                    TargetOutcome::Completed(target_report)
                }
                Err(e) => {
                    tracing::warn!("{}: sync failed: {}", adapter.name(), e);
                    TargetOutcome::Failed { error: e.to_string() }
                }
            };

            report.targets.push(TargetResult {
                target: adapter.name().to_string(),
                display_name: adapter.display_name().to_string(),
                outcome,
            });
        }

        report
    }
}
