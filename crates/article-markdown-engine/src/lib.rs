pub mod clear;
pub mod parsing;
pub mod search;

// Re-export key types for easier usage
pub use clear::{clear, clear_str, clear_with};
pub use parsing::{
    BlockCodePosition, Document, Element, ElementKind, ParseOptions, Span, parse, parse_with,
};
pub use search::{group_by_bounds, indexes_of, search};
