//! Claude Code adapter.
//!
//! Agents go to `.claude/agents/`, commands to `.claude/commands/`. Older
//! versions nested agents under `.claude/agents/council/`.

use crate::adapter::PathSet;
use crate::directory::{AdapterDefinition, AgentStyle, CommandFormat, DirectoryAdapter};

/// Creates the Claude Code adapter.
pub fn claude_adapter() -> DirectoryAdapter {
    DirectoryAdapter::new(AdapterDefinition {
        name: "claude".into(),
        display_name: "Claude Code".into(),
        detect_markers: vec![".claude".into()],
        paths: PathSet {
            agents_dir: Some(".claude/agents".into()),
            commands_dir: Some(".claude/commands".into()),
            deprecated: vec![".claude/agents/council".into()],
        },
        agent_style: AgentStyle::Named,
        command_format: CommandFormat::Markdown,
    })
}
