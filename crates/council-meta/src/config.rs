//! Project configuration
//!
//! Loaded from `<project>/.council/config.toml`. Every key is optional:
//!
//! ```toml
//! council_root = "~/.council"
//! targets = ["claude", "opencode"]
//! commands = ["council", "council-detect"]
//! ```

use crate::Result;
use council_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

/// Directory holding the project configuration, relative to the project root.
pub const CONFIG_DIR: &str = ".council";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Project-level sync configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CouncilConfig {
    /// Council root directory. Relative paths resolve against the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub council_root: Option<String>,

    /// Explicit ordered target list. `None` means auto-detect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,

    /// Enabled bundled commands. `None` means all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
}

impl CouncilConfig {
    /// Resolve the council root for a project.
    ///
    /// Defaults to `<project>/.council`. `~` and a leading `~/` expand to the
    /// home directory; any other path is joined onto the project root.
    pub fn council_root_path(&self, project_root: &NormalizedPath) -> NormalizedPath {
        match self.council_root.as_deref() {
            None => project_root.join(CONFIG_DIR),
            Some(raw) if raw == "~" || raw.starts_with("~/") => NormalizedPath::expand_home(raw),
            Some(raw) => project_root.join(raw),
        }
    }

    /// Location of the configuration file for a project.
    pub fn path_for(project_root: &NormalizedPath) -> NormalizedPath {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }
}

/// Load the project configuration, falling back to defaults when absent.
pub fn load_config(project_root: &NormalizedPath) -> Result<CouncilConfig> {
    let path = CouncilConfig::path_for(project_root);
    let config = ConfigStore::new().load_or_default(&path)?;
    Ok(config)
}
