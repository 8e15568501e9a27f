//! Expert records and configuration for council sync
//!
//! Provides the [`Expert`] record with its provenance rules, the markdown +
//! YAML frontmatter persistence format, the on-disk [`ExpertStore`], and the
//! project-level [`CouncilConfig`].

pub mod config;
pub mod error;
pub mod expert;
pub mod frontmatter;
pub mod store;

pub use config::{CONFIG_DIR, CONFIG_FILE, CouncilConfig, load_config};
pub use error::{Error, Result};
pub use expert::{Expert, Priority, Source};
pub use frontmatter::{parse_expert, render_expert};
pub use store::ExpertStore;
