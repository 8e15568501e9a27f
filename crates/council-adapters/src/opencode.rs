//! OpenCode adapter.
//!
//! OpenCode uses singular directory names (`.opencode/agent`,
//! `.opencode/command`) and marks council agents as subagents. A project is
//! detected by either the `.opencode` directory or an `opencode.json` file.

use crate::adapter::PathSet;
use crate::directory::{AdapterDefinition, AgentStyle, CommandFormat, DirectoryAdapter};

/// Creates the OpenCode adapter.
pub fn opencode_adapter() -> DirectoryAdapter {
    DirectoryAdapter::new(AdapterDefinition {
        name: "opencode".into(),
        display_name: "OpenCode".into(),
        detect_markers: vec![".opencode".into(), "opencode.json".into()],
        paths: PathSet {
            agents_dir: Some(".opencode/agent".into()),
            commands_dir: Some(".opencode/command".into()),
            deprecated: vec![".opencode/council".into()],
        },
        agent_style: AgentStyle::Subagent,
        command_format: CommandFormat::Markdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Adapter;
    use council_fs::NormalizedPath;
    use council_meta::Expert;
    use tempfile::TempDir;

    #[test]
    fn test_detects_config_file() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        let adapter = opencode_adapter();

        assert!(!adapter.detect(&root));
        std::fs::write(temp.path().join("opencode.json"), "{}").unwrap();
        assert!(adapter.detect(&root));
    }

    #[test]
    fn test_agents_are_subagents() {
        let content = opencode_adapter()
            .format_agent(&Expert::new("dhh", "DHH", "Rails"))
            .unwrap();
        assert!(content.contains("mode: subagent"));
    }
}
