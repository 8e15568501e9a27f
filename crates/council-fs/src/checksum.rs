//! SHA-256 checksum utilities
//!
//! Planned writes carry a checksum in the canonical `sha256:<hex>` format so a
//! dry-run plan can be compared with what a real run wrote.

use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";

/// Compute the checksum of string content.
pub fn content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}
