//! Generated-file marker
//!
//! Every file the sync writes carries `council:generated` on a line of its
//! own, as an HTML comment in markdown and a `#` comment in TOML. Files
//! without the marker are foreign and are never removed.

/// Marker text shared by every format.
pub const MARKER: &str = "council:generated";

/// Marker line for markdown documents.
pub const MARKDOWN_MARKER: &str = "<!-- council:generated -->";

/// Marker line for TOML documents.
pub const TOML_MARKER: &str = "# council:generated";

/// True when some line of `content` is exactly a marker line.
///
/// Mentioning the marker inside prose does not make a file generated.
pub fn is_generated(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .any(|line| line == MARKDOWN_MARKER || line == TOML_MARKER)
}
