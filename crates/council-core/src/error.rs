//! Error types for council-core

/// Result type for council-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sync before anything is written, or fail one target
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Target name not present in the registry
    #[error("Unknown target '{name}'. Available targets: {}", .available.join(", "))]
    UnknownTarget { name: String, available: Vec<String> },

    /// Enabled command with no bundled template
    #[error("Unknown command '{name}' for target '{target}'. Available commands: {}", .available.join(", "))]
    UnknownCommand {
        name: String,
        target: String,
        available: Vec<String>,
    },

    /// Nothing detected and no fallback registered
    #[error("No targets detected and no fallback target is registered")]
    NoTargets,

    /// Base directory of a target could not be created
    #[error("Cannot prepare {path} for target '{target}': {source}")]
    TargetSetup {
        target: String,
        path: String,
        #[source]
        source: council_fs::Error,
    },

    #[error(transparent)]
    Fs(#[from] council_fs::Error),

    #[error(transparent)]
    Meta(#[from] council_meta::Error),

    #[error(transparent)]
    Adapter(#[from] council_adapters::Error),
}
