//! Gemini CLI adapter.
//!
//! Gemini reads custom commands from TOML files, so commands are written as
//! `.gemini/commands/<name>.toml`. Agents stay markdown.

use crate::adapter::PathSet;
use crate::directory::{AdapterDefinition, AgentStyle, CommandFormat, DirectoryAdapter};

/// Creates the Gemini CLI adapter.
pub fn gemini_adapter() -> DirectoryAdapter {
    DirectoryAdapter::new(AdapterDefinition {
        name: "gemini".into(),
        display_name: "Gemini CLI".into(),
        detect_markers: vec![".gemini".into()],
        paths: PathSet {
            agents_dir: Some(".gemini/agents".into()),
            commands_dir: Some(".gemini/commands".into()),
            deprecated: vec![".gemini/council".into()],
        },
        agent_style: AgentStyle::Named,
        command_format: CommandFormat::Toml,
    })
}
