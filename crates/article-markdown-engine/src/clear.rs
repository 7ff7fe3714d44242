//! Plain-text projection of markdown, used to build the search index.
//!
//! Offsets into the cleared string do not line up with offsets into the
//! markdown source; search results must be computed against the cleared
//! string itself.

use crate::parsing::{ParseOptions, parse_with};

/// Strips markdown from `raw`. `None` passes through as `None`.
pub fn clear(raw: Option<&str>) -> Option<String> {
    raw.map(clear_str)
}

/// Strips markdown from `raw` with default [`ParseOptions`].
pub fn clear_str(raw: &str) -> String {
    clear_with(raw, &ParseOptions::default())
}

pub fn clear_with(raw: &str, options: &ParseOptions) -> String {
    parse_with(raw, options).plain_text()
}
