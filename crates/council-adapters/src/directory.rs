//! Definition-driven adapter for tools with agent and command directories
//!
//! The built-in per-file tools differ only in paths, frontmatter fields and
//! command file format, so each one is a [`DirectoryAdapter`] built from an
//! [`AdapterDefinition`] by a factory function in its own module.

use crate::adapter::{Adapter, Layout, PathSet, TemplateSet};
use crate::error::Result;
use crate::marker::{MARKDOWN_MARKER, TOML_MARKER};
use crate::templates::{ARGUMENTS_PLACEHOLDER, bundled_commands, directory_install_doc};
use council_fs::NormalizedPath;
use council_meta::Expert;
use council_meta::frontmatter::render_frontmatter;
use serde::Serialize;

/// Frontmatter shape of agent files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStyle {
    /// `name` and `description`.
    Named,
    /// `description` and `mode: subagent`; the tool names agents after files.
    Subagent,
}

/// File format of command files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFormat {
    /// Markdown with a `description` frontmatter.
    Markdown,
    /// TOML with `description` and `prompt` keys. Arguments are `{{args}}`.
    Toml,
}

impl CommandFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            CommandFormat::Markdown => "md",
            CommandFormat::Toml => "toml",
        }
    }
}

/// Static description of a directory-based tool.
#[derive(Debug, Clone)]
pub struct AdapterDefinition {
    pub name: String,
    pub display_name: String,
    /// Paths whose existence under the project root means the tool is in use.
    pub detect_markers: Vec<String>,
    pub paths: PathSet,
    pub agent_style: AgentStyle,
    pub command_format: CommandFormat,
}

#[derive(Serialize)]
struct AgentFrontmatter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'a str>,
}

#[derive(Serialize)]
struct CommandFrontmatter<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct TomlCommand<'a> {
    description: &'a str,
    prompt: String,
}

/// Adapter writing one file per expert and per bundled command.
#[derive(Debug, Clone)]
pub struct DirectoryAdapter {
    definition: AdapterDefinition,
    templates: TemplateSet,
    layout: Layout,
}

impl DirectoryAdapter {
    pub fn new(definition: AdapterDefinition) -> Self {
        let install_doc = directory_install_doc(
            &definition.display_name,
            &definition.paths,
            definition.command_format.extension(),
        );
        Self {
            definition,
            templates: TemplateSet {
                install_doc,
                commands: bundled_commands(),
            },
            layout: Layout::PerExpert,
        }
    }

    pub fn definition(&self) -> &AdapterDefinition {
        &self.definition
    }

    fn agent_description(expert: &Expert) -> String {
        format!("Channel {} ({})", expert.name.trim(), expert.focus.trim())
    }

    fn markdown_document<T: Serialize>(frontmatter: &T, body: &str) -> Result<String> {
        let frontmatter = render_frontmatter(frontmatter)?;
        Ok(format!(
            "{}{}\n\n{}\n",
            frontmatter,
            MARKDOWN_MARKER,
            body.trim()
        ))
    }
}

impl Adapter for DirectoryAdapter {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn display_name(&self) -> &str {
        &self.definition.display_name
    }

    fn detect(&self, root: &NormalizedPath) -> bool {
        self.definition
            .detect_markers
            .iter()
            .any(|marker| root.join(marker).exists())
    }

    fn paths(&self) -> &PathSet {
        &self.definition.paths
    }

    fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn command_extension(&self) -> &str {
        self.definition.command_format.extension()
    }

    fn format_agent(&self, expert: &Expert) -> Result<String> {
        expert.validate()?;

        let frontmatter = match self.definition.agent_style {
            AgentStyle::Named => AgentFrontmatter {
                name: Some(expert.agent_name()),
                description: Self::agent_description(expert),
                mode: None,
            },
            AgentStyle::Subagent => AgentFrontmatter {
                name: None,
                description: Self::agent_description(expert),
                mode: Some("subagent"),
            },
        };

        Self::markdown_document(&frontmatter, &expert.rendered_body())
    }

    fn format_command(&self, _name: &str, description: &str, body: &str) -> Result<String> {
        match self.definition.command_format {
            CommandFormat::Markdown => {
                Self::markdown_document(&CommandFrontmatter { description }, body)
            }
            CommandFormat::Toml => {
                let command = TomlCommand {
                    description,
                    prompt: format!("{}\n", body.trim().replace(ARGUMENTS_PLACEHOLDER, "{{args}}")),
                };
                Ok(format!("{}\n{}", TOML_MARKER, toml::to_string(&command)?))
            }
        }
    }
}
