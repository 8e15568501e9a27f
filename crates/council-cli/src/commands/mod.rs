//! Command implementations for council-cli

pub mod list;
pub mod reset;
pub mod sync;

pub use list::{run_clean_paths, run_doc, run_experts, run_targets};
pub use reset::run_reset;
pub use sync::run_sync;
