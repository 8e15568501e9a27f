//! Generic fallback adapter
//!
//! Used when no specific tool is detected. Writes a single `COUNCIL.md` at the
//! project root that any assistant can be pointed at.

use crate::adapter::{Adapter, Layout, PathSet, TemplateSet};
use crate::error::{Error, Result};
use crate::marker::MARKDOWN_MARKER;
use council_fs::NormalizedPath;
use council_meta::Expert;

/// Path of the aggregate document, relative to the project root.
pub const AGGREGATE_PATH: &str = "COUNCIL.md";

const INTRO: &str = "These experts review work in this project. Ask for one by name to get \
feedback from their point of view.";

const INSTALL_DOC: &str = "# Council for any assistant

Run `council sync` from the project root to write `COUNCIL.md`.

The file lists every expert with their focus and guidance. Point your assistant at it,
for example by referencing it from the assistant's instruction file.

Earlier versions wrote to `.council/generated/`. Run `council sync --clean` to remove it.
";

/// Aggregate-document adapter, always detected.
#[derive(Debug, Clone)]
pub struct GenericAdapter {
    paths: PathSet,
    templates: TemplateSet,
    layout: Layout,
}

impl Default for GenericAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenericAdapter {
    pub fn new() -> Self {
        Self {
            paths: PathSet {
                agents_dir: None,
                commands_dir: None,
                deprecated: vec![".council/generated".into()],
            },
            templates: TemplateSet {
                install_doc: INSTALL_DOC.to_string(),
                commands: Default::default(),
            },
            layout: Layout::Aggregate {
                path: AGGREGATE_PATH.into(),
            },
        }
    }
}

impl Adapter for GenericAdapter {
    fn name(&self) -> &str {
        "generic"
    }

    fn display_name(&self) -> &str {
        "Generic (COUNCIL.md)"
    }

    fn detect(&self, _root: &NormalizedPath) -> bool {
        true
    }

    fn paths(&self) -> &PathSet {
        &self.paths
    }

    fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn is_fallback(&self) -> bool {
        true
    }

    /// One expert's section of the aggregate document.
    fn format_agent(&self, expert: &Expert) -> Result<String> {
        expert.validate()?;

        let body = expert.rendered_body();
        let title = format!("# {}", expert.name);
        let body = match body.strip_prefix(&title) {
            Some(rest) if rest.is_empty() || rest.starts_with('\n') => rest.trim_start(),
            _ => body.as_str(),
        };

        let mut section = format!("## {}\n\n_Focus: {}_\n", expert.name, expert.focus);
        let body = demote_headings(body);
        if !body.is_empty() {
            section.push('\n');
            section.push_str(&body);
            section.push('\n');
        }
        Ok(section)
    }

    fn format_command(&self, _name: &str, _description: &str, _body: &str) -> Result<String> {
        Err(Error::Unsupported {
            adapter: self.name().to_string(),
            operation: "command files",
        })
    }

    fn format_aggregate(&self, experts: &[Expert]) -> Result<String> {
        let mut doc = format!("{MARKDOWN_MARKER}\n# Council\n\n{INTRO}\n");
        for expert in experts {
            doc.push('\n');
            doc.push_str(&self.format_agent(expert)?);
        }
        Ok(doc)
    }
}

/// Push every markdown heading one level down, leaving fenced code alone.
fn demote_headings(body: &str) -> String {
    let mut in_fence = false;
    body.lines()
        .map(|line| {
            if line.trim_start().starts_with("```") {
                in_fence = !in_fence;
                return line.to_string();
            }
            if !in_fence && line.starts_with('#') {
                format!("#{line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
