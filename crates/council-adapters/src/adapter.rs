//! Adapter trait for syncing experts to AI tools

use crate::error::{Error, Result};
use crate::marker;
use council_fs::NormalizedPath;
use council_meta::Expert;
use std::collections::BTreeMap;

/// Directory conventions of one tool, relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    /// Where per-expert agent files go. `None` for aggregate layouts.
    pub agents_dir: Option<String>,
    /// Where bundled command files go. `None` when the tool has no commands.
    pub commands_dir: Option<String>,
    /// Locations written by earlier layouts, removed on opt-in cleanup.
    pub deprecated: Vec<String>,
}

/// How experts are laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// One agent file per expert inside the agents directory.
    PerExpert,
    /// A single document listing every expert, at a fixed path.
    Aggregate { path: String },
}

/// Whether a command body is shipped as-is or rendered from the council.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Static,
    /// Body lists the current members; see [`crate::render_review`].
    Review,
}

/// A bundled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    pub description: String,
    pub body: String,
    pub kind: CommandKind,
}

impl CommandTemplate {
    pub fn new(description: impl Into<String>, body: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            description: description.into(),
            body: body.into(),
            kind,
        }
    }
}

/// Bundled documents shipped with a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    /// Setup instructions shown by `council doc <target>`.
    pub install_doc: String,
    /// Command name to template, iterated in name order.
    pub commands: BTreeMap<String, CommandTemplate>,
}

/// Strategy object for one AI tool.
///
/// Formatters are pure: the same input always yields the same bytes, and
/// they never touch the filesystem. Only [`Adapter::detect`] looks at disk,
/// and only to check that a path exists.
pub trait Adapter {
    /// Registry key, e.g. `"claude"`.
    fn name(&self) -> &str;

    /// Human readable name, e.g. `"Claude Code"`.
    fn display_name(&self) -> &str;

    /// Whether the tool appears to be in use under `root`.
    fn detect(&self, root: &NormalizedPath) -> bool;

    fn paths(&self) -> &PathSet;

    fn templates(&self) -> &TemplateSet;

    fn layout(&self) -> &Layout;

    /// True for the adapter used when nothing else is detected.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Extension of command files, without the dot.
    fn command_extension(&self) -> &str {
        "md"
    }

    /// Whether `content` was generated by this tool and may be replaced or
    /// removed.
    fn owns(&self, content: &str) -> bool {
        marker::is_generated(content)
    }

    /// Render one expert as an agent file.
    fn format_agent(&self, expert: &Expert) -> Result<String>;

    /// Render one bundled command file.
    fn format_command(&self, name: &str, description: &str, body: &str) -> Result<String>;

    /// Render the aggregate document for aggregate layouts.
    fn format_aggregate(&self, _experts: &[Expert]) -> Result<String> {
        Err(Error::Unsupported {
            adapter: self.name().to_string(),
            operation: "aggregate documents",
        })
    }
}
