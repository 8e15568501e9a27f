//! Error types for council-adapters

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Meta(#[from] council_meta::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Adapter '{adapter}' does not support {operation}")]
    Unsupported {
        adapter: String,
        operation: &'static str,
    },
}
