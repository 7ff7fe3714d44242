use std::ops::Range;

use super::{
    cursor::Cursor,
    element::{BlockCodePosition, ElementKind},
    kinds::{BlockCode, Delimited, LineConstruct, Link},
};

/// The markdown constructs the scanner recognises.
///
/// When two constructs could match at the same position the one earlier in
/// [`Construct::PRECEDENCE`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    UnorderedListItem,
    Header,
    Quote,
    Italic,
    Bold,
    Strike,
    Rule,
    InlineCode,
    Link,
    OrderedListItem,
    BlockCode,
}

impl Construct {
    pub const PRECEDENCE: [Construct; 11] = [
        Construct::UnorderedListItem,
        Construct::Header,
        Construct::Quote,
        Construct::Italic,
        Construct::Bold,
        Construct::Strike,
        Construct::Rule,
        Construct::InlineCode,
        Construct::Link,
        Construct::OrderedListItem,
        Construct::BlockCode,
    ];

    /// Tries to match this construct exactly at the cursor.
    pub fn try_match(self, cur: &Cursor<'_>) -> Option<Hit> {
        match self {
            Construct::UnorderedListItem => LineConstruct::unordered_list_item(cur),
            Construct::Header => LineConstruct::header(cur),
            Construct::Quote => LineConstruct::quote(cur),
            Construct::Italic => Delimited::italic(cur),
            Construct::Bold => Delimited::bold(cur),
            Construct::Strike => Delimited::strike(cur),
            Construct::Rule => LineConstruct::rule(cur),
            Construct::InlineCode => Delimited::inline_code(cur),
            Construct::Link => Link::parse(cur),
            Construct::OrderedListItem => LineConstruct::ordered_list_item(cur),
            Construct::BlockCode => BlockCode::parse(cur),
        }
    }

    /// Finds the first construct, in precedence order, matching at the cursor.
    pub fn first_match(cur: &Cursor<'_>) -> Option<(Construct, Hit)> {
        Self::PRECEDENCE
            .into_iter()
            .find_map(|construct| construct.try_match(cur).map(|hit| (construct, hit)))
    }
}

/// One physical line of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub position: BlockCodePosition,
    /// Line text, trailing newline included for all but the last line.
    pub content: Range<usize>,
    /// Source covered by the line's element. The first line also covers the
    /// opening fence and the last line the closing fence.
    pub span: Range<usize>,
}

/// What a construct matched, as local byte indices into the scanned span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A construct whose delimiter-stripped interior is scanned again for
    /// children.
    Nested {
        kind: ElementKind,
        inner: Range<usize>,
        end: usize,
    },
    Rule {
        end: usize,
    },
    Link {
        title: Range<usize>,
        url: Range<usize>,
        end: usize,
    },
    BlockCode {
        lines: Vec<CodeLine>,
        end: usize,
    },
}

impl Hit {
    /// Local index just past the full match, delimiters included.
    pub fn end(&self) -> usize {
        match self {
            Hit::Nested { end, .. }
            | Hit::Rule { end }
            | Hit::Link { end, .. }
            | Hit::BlockCode { end, .. } => *end,
        }
    }
}
