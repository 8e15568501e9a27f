//! Project context shared by every command

use council_fs::NormalizedPath;
use council_meta::{CouncilConfig, load_config};
use std::path::Path;

use crate::error::Result;

/// Resolved project root and configuration
#[derive(Debug, Clone)]
pub struct Context {
    pub root: NormalizedPath,
    pub config: CouncilConfig,
}

impl Context {
    /// Load the configuration of the project at `project`, applying the
    /// command-line council root override.
    pub fn load(project: &Path, council_root: Option<&str>) -> Result<Self> {
        let root = NormalizedPath::new(project);
        let mut config = load_config(&root)?;
        if let Some(council_root) = council_root {
            config.council_root = Some(council_root.to_string());
        }
        tracing::debug!(
            "Project {} with council root {}",
            root,
            config.council_root_path(&root)
        );
        Ok(Self { root, config })
    }
}
