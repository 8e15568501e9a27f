//! Desired file set for one target
//!
//! A pure computation over the adapter and the expert set; nothing here reads
//! or writes the filesystem.

use super::report::FileError;
use council_adapters::{Adapter, CommandKind, Layout, render_review};
use council_meta::Expert;
use std::collections::BTreeMap;

/// Files that should exist for one target, keyed by path relative to the
/// project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredSet {
    pub files: BTreeMap<String, String>,
    /// Experts that produced a file, in input order.
    pub members: Vec<Expert>,
    pub errors: Vec<FileError>,
}

impl DesiredSet {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

/// Compute the desired set.
///
/// `commands` selects the bundled commands to install; `None` installs all
/// of them. Invalid experts and experts whose file name is already taken
/// become per-file errors.
pub fn desired_files(adapter: &dyn Adapter, experts: &[Expert], commands: Option<&[String]>) -> DesiredSet {
    let mut desired = DesiredSet::default();

    match adapter.layout() {
        Layout::PerExpert => add_agent_files(adapter, experts, &mut desired),
        Layout::Aggregate { path } => add_aggregate(adapter, path, experts, &mut desired),
    }

    if let Some(commands_dir) = &adapter.paths().commands_dir {
        add_command_files(adapter, commands_dir, commands, &mut desired);
    }

    desired
}

fn add_agent_files(adapter: &dyn Adapter, experts: &[Expert], desired: &mut DesiredSet) {
    let Some(agents_dir) = &adapter.paths().agents_dir else {
        return;
    };

    for expert in experts {
        let path = format!("{}/{}", agents_dir, expert.agent_filename());

        if desired.files.contains_key(&path) {
            desired.errors.push(FileError::new(
                path,
                format!("expert '{}' maps to a file already produced by another expert", expert.id),
            ));
            continue;
        }

        match adapter.format_agent(expert) {
            Ok(content) => {
                desired.files.insert(path, content);
                desired.members.push(expert.clone());
            }
            Err(e) => desired.errors.push(FileError::new(path, e)),
        }
    }
}

fn add_aggregate(adapter: &dyn Adapter, path: &str, experts: &[Expert], desired: &mut DesiredSet) {
    for expert in experts {
        if let Err(e) = expert.validate() {
            desired.errors.push(FileError::new(path, e));
            continue;
        }
        if desired
            .members
            .iter()
            .any(|m| m.agent_filename() == expert.agent_filename())
        {
            desired.errors.push(FileError::new(
                path,
                format!("expert '{}' is listed more than once", expert.id),
            ));
            continue;
        }
        desired.members.push(expert.clone());
    }

    match adapter.format_aggregate(&desired.members) {
        Ok(content) => {
            desired.files.insert(path.to_string(), content);
        }
        Err(e) => desired.errors.push(FileError::new(path, e)),
    }
}

fn add_command_files(
    adapter: &dyn Adapter,
    commands_dir: &str,
    enabled: Option<&[String]>,
    desired: &mut DesiredSet,
) {
    for (name, template) in &adapter.templates().commands {
        if let Some(enabled) = enabled
            && !enabled.contains(name)
        {
            continue;
        }

        let path = format!("{}/{}.{}", commands_dir, name, adapter.command_extension());
        let body = match template.kind {
            CommandKind::Static => template.body.clone(),
            CommandKind::Review => render_review(&template.body, &desired.members),
        };

        match adapter.format_command(name, &template.description, &body) {
            Ok(content) => {
                desired.files.insert(path, content);
            }
            Err(e) => desired.errors.push(FileError::new(path, e)),
        }
    }
}
