//! Error types for council-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] council_fs::Error),

    #[error("Expert file has no YAML frontmatter")]
    MissingFrontmatter,

    #[error("Invalid expert frontmatter: {message}")]
    InvalidFrontmatter { message: String },

    #[error("Invalid expert '{id}': {reason}")]
    InvalidExpert { id: String, reason: String },

    #[error("Council root not found at {path}")]
    CouncilRootMissing { path: PathBuf },

    #[error("Invalid provenance '{value}'")]
    InvalidSource { value: String },
}
