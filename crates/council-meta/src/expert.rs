//! Expert record
//!
//! An expert is the unit distributed to every target. The persisted fields
//! live in the YAML frontmatter; provenance is derived from where the file
//! was loaded and is never written back.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification used by suggestion tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Always,
}

impl Priority {
    fn is_normal(&self) -> bool {
        matches!(self, Priority::Normal)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Normal => write!(f, "normal"),
            Priority::High => write!(f, "high"),
            Priority::Always => write!(f, "always"),
        }
    }
}

/// Where an expert record came from.
///
/// Ordering is native, custom, then installed repos by name. Listings and
/// aggregate documents follow this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Source {
    /// Part of the council itself.
    #[default]
    Native,
    /// Written by the user outside the council's own set.
    Custom,
    /// Installed from a shared expert repository.
    Installed(String),
}

impl Source {
    /// Filename prefix that keeps ids from different provenances apart.
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            Source::Native => "",
            Source::Custom => "custom-",
            Source::Installed(_) => "installed-",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Native => Ok(()),
            Source::Custom => write!(f, "custom"),
            Source::Installed(repo) => write!(f, "installed:{}", repo),
        }
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" => Ok(Source::Native),
            "custom" => Ok(Source::Custom),
            other => match other.strip_prefix("installed:") {
                Some(repo) if !repo.is_empty() => Ok(Source::Installed(repo.to_string())),
                _ => Err(Error::InvalidSource {
                    value: s.to_string(),
                }),
            },
        }
    }
}

impl Serialize for Source {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An expert persona record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Expert {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub philosophy: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub principles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Priority::is_normal")]
    pub priority: Priority,
    /// Markdown after the frontmatter. Empty means "synthesize".
    #[serde(skip)]
    pub body: String,
    /// Derived at load time from the containing directory.
    #[serde(skip)]
    pub source: Source,
}

impl Expert {
    pub fn new(id: impl Into<String>, name: impl Into<String>, focus: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            focus: focus.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_philosophy(mut self, philosophy: impl Into<String>) -> Self {
        self.philosophy = Some(philosophy.into());
        self
    }

    pub fn with_principles<I, S>(mut self, principles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.principles = principles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_red_flags<I, S>(mut self, red_flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.red_flags = red_flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Filename this expert is written under in per-expert layouts.
    ///
    /// `{id}.md` for native experts, `custom-{id}.md` and `installed-{id}.md`
    /// for the other provenances.
    pub fn agent_filename(&self) -> String {
        format!("{}{}.md", self.source.filename_prefix(), self.id)
    }

    /// Filename stem, used by tools that name agents after their file.
    pub fn agent_name(&self) -> String {
        format!("{}{}", self.source.filename_prefix(), self.id)
    }

    /// Check the fields every formatter relies on.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidExpert {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.is_empty() {
            return Err(invalid("missing id"));
        }
        if !is_valid_slug(&self.id) {
            return Err(invalid(
                "id must be lowercase letters, digits, '-' or '_', starting with a letter or digit",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("missing name"));
        }
        if self.focus.trim().is_empty() {
            return Err(invalid("missing focus"));
        }
        Ok(())
    }

    /// The explicit body, or one synthesized from the structured fields.
    pub fn rendered_body(&self) -> String {
        let body = self.body.trim();
        if body.is_empty() {
            self.synthesized_body()
        } else {
            body.to_string()
        }
    }

    /// Deterministic body built from name, focus and narrative fields.
    pub fn synthesized_body(&self) -> String {
        let mut out = format!(
            "# {}\n\nYou are channeling {}, an expert in {}.\n",
            self.name, self.name, self.focus
        );

        if let Some(philosophy) = self.philosophy.as_deref().map(str::trim)
            && !philosophy.is_empty()
        {
            out.push_str("\n## Philosophy\n\n");
            out.push_str(philosophy);
            out.push('\n');
        }

        if !self.principles.is_empty() {
            out.push_str("\n## Principles\n\n");
            for principle in &self.principles {
                out.push_str(&format!("- {}\n", principle));
            }
        }

        if !self.red_flags.is_empty() {
            out.push_str("\n## Red Flags\n\nWatch for these patterns:\n\n");
            for flag in &self.red_flags {
                out.push_str(&format!("- {}\n", flag));
            }
        }

        out.trim_end().to_string()
    }
}

fn is_valid_slug(id: &str) -> bool {
    let mut chars = id.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    starts_ok && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
