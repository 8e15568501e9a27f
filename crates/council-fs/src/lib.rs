//! Filesystem primitives for council sync
//!
//! Provides normalized path handling, atomic locked writes, content checksums
//! and a format-agnostic configuration store.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
