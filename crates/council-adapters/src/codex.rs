//! Codex adapter.
//!
//! Commands are Codex custom prompts under `.codex/prompts/`.

use crate::adapter::PathSet;
use crate::directory::{AdapterDefinition, AgentStyle, CommandFormat, DirectoryAdapter};

/// Creates the Codex adapter.
pub fn codex_adapter() -> DirectoryAdapter {
    DirectoryAdapter::new(AdapterDefinition {
        name: "codex".into(),
        display_name: "Codex".into(),
        detect_markers: vec![".codex".into()],
        paths: PathSet {
            agents_dir: Some(".codex/agents".into()),
            commands_dir: Some(".codex/prompts".into()),
            deprecated: vec![],
        },
        agent_style: AgentStyle::Named,
        command_format: CommandFormat::Markdown,
    })
}
