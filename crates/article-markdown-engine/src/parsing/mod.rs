//! # Parsing
//!
//! Turns an article body into a [`Document`]: an ordered list of
//! [`Element`]s, each holding its delimiter-stripped content, its source
//! [`Span`] and, for constructs that may contain more markdown, the parse of
//! that content as children.
//!
//! ## Modules
//!
//! - **`element`**: `Element`, `ElementKind`, `BlockCodePosition`
//! - **`construct`**: the `Construct` precedence table and `Hit` match results
//! - **`kinds`**: per-construct matching rules that own their delimiters
//! - **`cursor`**: `Cursor` for char-by-char scanning with line anchors
//! - **`scanner`**: `find_elements()`, the recursive span scanner
//! - **`snapshot`**: outline rendering and invariant checks used by tests and the CLI

pub mod construct;
pub mod cursor;
pub mod element;
pub mod kinds;
pub mod scanner;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use element::{BlockCodePosition, Element, ElementKind};
pub use span::Span;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting level whose constructs still get children. A
    /// construct found below it keeps its content as-is.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parsed article body: the top-level elements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Plain-text projection of the whole document, markers removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for el in &self.elements {
            el.push_plain_text(&mut out);
        }
        out
    }

    /// Byte range of each top-level element inside [`Document::plain_text`].
    ///
    /// Search hits computed on the plain text can be grouped per element
    /// with [`crate::search::group_by_bounds`].
    pub fn plain_bounds(&self) -> Vec<(usize, usize)> {
        let mut offset = 0;
        self.elements
            .iter()
            .map(|el| {
                let start = offset;
                offset += el.plain_text().len();
                (start, offset)
            })
            .collect()
    }
}

impl IntoIterator for Document {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Parses `raw` with default [`ParseOptions`].
pub fn parse(raw: &str) -> Document {
    parse_with(raw, &ParseOptions::default())
}

pub fn parse_with(raw: &str, options: &ParseOptions) -> Document {
    let elements = scanner::find_elements(raw, 0, 0, options);
    log::debug!(
        "parsed {} bytes into {} top-level elements",
        raw.len(),
        elements.len()
    );
    Document { elements }
}
