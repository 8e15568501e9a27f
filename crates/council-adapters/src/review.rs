//! Review command rendering

use council_meta::Expert;

/// Placeholder replaced by the member list.
pub const EXPERTS_PLACEHOLDER: &str = "{{experts}}";

const NO_MEMBERS: &str = "_The council has no members yet._";

/// Render the review command body against the current council.
///
/// Each member becomes one bullet with name, agent name and focus, in the
/// order given. An empty council renders a notice instead of a list.
pub fn render_review(template: &str, experts: &[Expert]) -> String {
    let members = if experts.is_empty() {
        NO_MEMBERS.to_string()
    } else {
        experts
            .iter()
            .map(|e| format!("- **{}** (`{}`): {}", e.name, e.agent_name(), e.focus))
            .collect::<Vec<_>>()
            .join("\n")
    };
    template.replace(EXPERTS_PLACEHOLDER, &members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_meta::Source;

    const TEMPLATE: &str = "## Members\n\n{{experts}}\n\nReview.";

    #[test]
    fn test_render_lists_members() {
        let experts = vec![
            Expert::new("dhh", "DHH", "Rails and simplicity"),
            Expert::new("dhh", "House DHH", "Our conventions").with_source(Source::Custom),
        ];

        insta::assert_snapshot!(render_review(TEMPLATE, &experts), @r"
        ## Members

        - **DHH** (`dhh`): Rails and simplicity
        - **House DHH** (`custom-dhh`): Our conventions

        Review.
        ");
    }

    #[test]
    fn test_render_empty_council() {
        assert_eq!(
            render_review(TEMPLATE, &[]),
            "## Members\n\n_The council has no members yet._\n\nReview."
        );
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        let experts = vec![Expert::new("dhh", "DHH", "Rails")];
        assert_eq!(render_review("Static body", &experts), "Static body");
    }
}
