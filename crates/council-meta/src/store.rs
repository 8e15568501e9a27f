//! On-disk expert store
//!
//! A council root holds experts by provenance:
//!
//! ```text
//! <council-root>/
//!   experts/dhh.md                    native
//!   custom/dhh.md                     custom
//!   installed/<repo>/kent-beck.md     installed:<repo>
//! ```

use crate::frontmatter::{parse_expert, render_expert};
use crate::{Error, Expert, Result, Source};
use council_fs::{NormalizedPath, io};

const NATIVE_DIR: &str = "experts";
const CUSTOM_DIR: &str = "custom";
const INSTALLED_DIR: &str = "installed";
const EXPERT_EXTENSION: &str = "md";

/// Loads and saves expert records under a council root.
#[derive(Debug, Clone)]
pub struct ExpertStore {
    root: NormalizedPath,
}

impl ExpertStore {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Directory holding experts of the given provenance.
    pub fn source_dir(&self, source: &Source) -> NormalizedPath {
        match source {
            Source::Native => self.root.join(NATIVE_DIR),
            Source::Custom => self.root.join(CUSTOM_DIR),
            Source::Installed(repo) => self.root.join(INSTALLED_DIR).join(repo),
        }
    }

    /// List every expert in the council.
    ///
    /// Sorted by provenance then id. Files that cannot be read or parsed are
    /// logged and skipped; a record with an empty id takes its id from the file stem.
    pub fn list(&self) -> Result<Vec<Expert>> {
        if !self.root.is_dir() {
            return Err(Error::CouncilRootMissing {
                path: self.root.to_native(),
            });
        }

        let mut experts = Vec::new();
        self.load_dir(&Source::Native, &mut experts)?;
        self.load_dir(&Source::Custom, &mut experts)?;

        for repo_dir in io::list_dirs(&self.root.join(INSTALLED_DIR))? {
            if let Some(repo) = repo_dir.file_name() {
                self.load_dir(&Source::Installed(repo.to_string()), &mut experts)?;
            }
        }

        experts.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.id.cmp(&b.id)));
        Ok(experts)
    }

    /// Persist an expert into its provenance directory.
    ///
    /// Returns the path written.
    pub fn save(&self, expert: &Expert) -> Result<NormalizedPath> {
        let content = render_expert(expert)?;
        let path = self
            .source_dir(&expert.source)
            .join(&format!("{}.{}", expert.id, EXPERT_EXTENSION));
        io::write_text(&path, &content)?;
        tracing::debug!("Saved expert {} to {}", expert.id, path);
        Ok(path)
    }

    fn load_dir(&self, source: &Source, experts: &mut Vec<Expert>) -> Result<()> {
        let dir = self.source_dir(source);
        for path in io::list_files(&dir, EXPERT_EXTENSION)? {
            let parsed = io::read_text(&path)
                .map_err(Error::from)
                .and_then(|content| parse_expert(&content));
            match parsed {
                Ok(mut expert) => {
                    if expert.id.is_empty() {
                        expert.id = path.file_stem().unwrap_or_default().to_string();
                    }
                    expert.source = source.clone();
                    experts.push(expert);
                }
                Err(e) => {
                    tracing::warn!("Skipping expert file {}: {}", path, e);
                }
            }
        }
        Ok(())
    }
}
