//! Bundled command templates and install docs

use crate::adapter::{CommandKind, CommandTemplate, PathSet};
use std::collections::BTreeMap;

/// Name of the dynamic review command.
pub const REVIEW_COMMAND: &str = "council";

/// Name of the stack detection command.
pub const DETECT_COMMAND: &str = "council-detect";

/// Name of the add-expert command.
pub const ADD_COMMAND: &str = "council-add";

/// Placeholder for the user's command arguments in bundled bodies.
pub const ARGUMENTS_PLACEHOLDER: &str = "$ARGUMENTS";

const REVIEW_BODY: &str = "\
Review the current work with the council.

## Members

{{experts}}

## Instructions

1. Identify what changed. If arguments were given, focus the review on: $ARGUMENTS
2. For each member, review the changes strictly from their focus area.
3. Report findings grouped by member, citing files and lines.
4. Close with the points the members agree on and the points where they disagree.";

const DETECT_BODY: &str = "\
Suggest council members for this project.

1. Inspect the build manifests, lockfiles and top-level directories to identify the stack.
2. Propose up to five experts whose focus matches the stack. For each, give an id, a name and a one-line focus.
3. Point out which proposals already exist in the council and skip them.
4. For each accepted proposal, follow the `/council-add` instructions.

Extra context from the user: $ARGUMENTS";

const ADD_BODY: &str = "\
Add an expert to the council.

Expert to add: $ARGUMENTS

1. Choose an id made of lowercase letters, digits and dashes.
2. Create `.council/custom/<id>.md` with YAML frontmatter holding `id`, `name` and `focus`, plus optional `philosophy`, `principles` and `red_flags`.
3. Write the expert's guidance as markdown below the frontmatter, or leave it empty to have it generated.
4. Run `council sync` so every configured tool picks up the new expert.";

/// The commands every directory adapter ships, keyed by name.
pub fn bundled_commands() -> BTreeMap<String, CommandTemplate> {
    let mut commands = BTreeMap::new();
    commands.insert(
        REVIEW_COMMAND.to_string(),
        CommandTemplate::new(
            "Convene the council to review the current changes",
            REVIEW_BODY,
            CommandKind::Review,
        ),
    );
    commands.insert(
        DETECT_COMMAND.to_string(),
        CommandTemplate::new(
            "Suggest council experts for this project's stack",
            DETECT_BODY,
            CommandKind::Static,
        ),
    );
    commands.insert(
        ADD_COMMAND.to_string(),
        CommandTemplate::new("Add an expert to the council", ADD_BODY, CommandKind::Static),
    );
    commands
}

/// Install document for a directory adapter.
pub fn directory_install_doc(display_name: &str, paths: &PathSet, command_extension: &str) -> String {
    let mut doc = format!("# Council for {display_name}\n\n");
    doc.push_str("Run `council sync` from the project root to install the council.\n\n");

    if let Some(agents_dir) = &paths.agents_dir {
        doc.push_str(&format!(
            "- Each expert becomes an agent file in `{agents_dir}/`.\n"
        ));
    }
    if let Some(commands_dir) = &paths.commands_dir {
        doc.push_str(&format!(
            "- Commands are installed as `{commands_dir}/<name>.{command_extension}`:\n"
        ));
        for name in bundled_commands().keys() {
            doc.push_str(&format!("  - `{name}`\n"));
        }
    }

    doc.push_str(
        "\nGenerated files carry a `council:generated` marker. Files without it are \
         never modified unless `council sync --force` is used, and never deleted.\n",
    );

    if !paths.deprecated.is_empty() {
        doc.push_str("\nEarlier versions wrote to:\n\n");
        for path in &paths.deprecated {
            doc.push_str(&format!("- `{path}`\n"));
        }
        doc.push_str("\nRun `council sync --clean` to remove them.\n");
    }

    doc
}
