//! Markdown + YAML frontmatter persistence for expert records
//!
//! ```text
//! ---
//! id: dhh
//! name: David Heinemeier Hansson
//! focus: Rails, simplicity, majestic monoliths
//! ---
//!
//! # David Heinemeier Hansson
//! ...
//! ```

use crate::{Error, Expert, Result};
use serde::Serialize;

const DELIMITER: &str = "---";

/// Split a document into its frontmatter YAML and the remaining body.
///
/// Returns `None` when the document does not open with a `---` line or the
/// frontmatter is never closed.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Serialize a value as a frontmatter block, delimiters included.
pub fn render_frontmatter<T: Serialize>(value: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(value).map_err(|e| Error::InvalidFrontmatter {
        message: e.to_string(),
    })?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
}

/// Parse an expert file.
///
/// The body is the text after the frontmatter with surrounding blank lines
/// removed. Provenance is left at its default; the store assigns it.
pub fn parse_expert(content: &str) -> Result<Expert> {
    let (yaml, body) = split_frontmatter(content).ok_or(Error::MissingFrontmatter)?;

    let mut expert: Expert = if yaml.trim().is_empty() {
        Expert::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| Error::InvalidFrontmatter {
            message: e.to_string(),
        })?
    };
    expert.body = body.trim().to_string();

    Ok(expert)
}

/// Render an expert file.
///
/// Structurally identical records produce byte-identical output; an empty
/// body is replaced with the synthesized one.
pub fn render_expert(expert: &Expert) -> Result<String> {
    expert.validate()?;
    let frontmatter = render_frontmatter(expert)?;
    Ok(format!("{}\n{}\n", frontmatter, expert.rendered_body()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;
    use pretty_assertions::assert_eq;

    const DHH: &str = "---
id: dhh
name: David Heinemeier Hansson
focus: Rails and simplicity
principles:
- Convention over configuration
priority: high
---

# DHH

Custom body.
";

    #[test]
    fn test_parse_expert() {
        let expert = parse_expert(DHH).unwrap();
        assert_eq!(expert.id, "dhh");
        assert_eq!(expert.name, "David Heinemeier Hansson");
        assert_eq!(expert.focus, "Rails and simplicity");
        assert_eq!(expert.principles, vec!["Convention over configuration"]);
        assert_eq!(expert.priority, Priority::High);
        assert_eq!(expert.body, "# DHH\n\nCustom body.");
    }

    #[test]
    fn test_parse_without_frontmatter() {
        assert!(matches!(
            parse_expert("# Just markdown\n"),
            Err(Error::MissingFrontmatter)
        ));
    }

    #[test]
    fn test_parse_unclosed_frontmatter() {
        assert!(matches!(
            parse_expert("---\nid: dhh\n"),
            Err(Error::MissingFrontmatter)
        ));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(matches!(
            parse_expert("---\nprinciples: [unterminated\n---\n"),
            Err(Error::InvalidFrontmatter { .. })
        ));
    }

    #[test]
    fn test_parse_missing_required_fields_is_lenient() {
        let expert = parse_expert("---\nid: half\n---\n").unwrap();
        assert_eq!(expert.id, "half");
        assert!(expert.name.is_empty());
        assert!(expert.validate().is_err());
    }

    #[test]
    fn test_parse_crlf() {
        let expert = parse_expert("---\r\nid: dhh\r\nname: DHH\r\nfocus: Rails\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(expert.id, "dhh");
        assert_eq!(expert.body, "Body");
    }

    #[test]
    fn test_render_synthesizes_body() {
        let expert = Expert::new("dhh", "DHH", "Rails");
        insta::assert_snapshot!(render_expert(&expert).unwrap(), @r"
        ---
        id: dhh
        name: DHH
        focus: Rails
        ---

        # DHH

        You are channeling DHH, an expert in Rails.
        ");
    }

    #[test]
    fn test_render_rejects_invalid() {
        let expert = Expert::new("dhh", "", "Rails");
        assert!(render_expert(&expert).is_err());
    }

    #[test]
    fn test_save_parse_save_is_byte_identical() {
        let expert = Expert::new("kent-beck", "Kent Beck", "Test-driven development")
            .with_philosophy("Make it work, make it right, make it fast.")
            .with_principles(["Small steps", "Tests first"])
            .with_red_flags(["Untested code"]);

        let first = render_expert(&expert).unwrap();
        let reparsed = parse_expert(&first).unwrap();
        let second = render_expert(&reparsed).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_structurally_identical_records_render_identically() {
        let a = Expert::new("dhh", "DHH", "Rails").with_principles(["Simplicity"]);
        let b = Expert::new("dhh", "DHH", "Rails").with_principles(["Simplicity"]);
        assert_eq!(render_expert(&a).unwrap(), render_expert(&b).unwrap());
    }
}
