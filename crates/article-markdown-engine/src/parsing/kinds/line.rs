use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{construct::Hit, cursor::Cursor, element::ElementKind};

/// `#` run of a header, 1 to 6 long, followed by a space.
static HEADER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) ").expect("header prefix pattern is valid"));

/// Numeric label of an ordered list item (`12.`) followed by a space.
static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.) ").expect("ordered prefix pattern is valid"));

/// Constructs that must start at the beginning of a line.
///
/// All of them except the rule take the rest of the line, which must be
/// non-empty, as their content.
pub struct LineConstruct;

impl LineConstruct {
    pub const BULLETS: [char; 3] = ['*', '+', '-'];
    pub const QUOTE: &'static str = "> ";
    pub const RULES: [&'static str; 3] = ["***", "___", "---"];

    pub fn unordered_list_item(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() {
            return None;
        }
        let bullet = cur.peek().filter(|c| Self::BULLETS.contains(c))?;
        if cur.peek_nth(1) != Some(' ') {
            return None;
        }
        let inner = rest_of_line(cur, cur.i + bullet.len_utf8() + 1)?;
        Some(Hit::Nested {
            kind: ElementKind::UnorderedListItem,
            end: inner.end,
            inner,
        })
    }

    pub fn header(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() {
            return None;
        }
        let marks = HEADER_PREFIX.captures(cur.rest())?.get(1)?.len();
        let inner = rest_of_line(cur, cur.i + marks + 1)?;
        Some(Hit::Nested {
            // the prefix pattern caps the run at 6
            kind: ElementKind::Header { level: marks as u8 },
            end: inner.end,
            inner,
        })
    }

    pub fn quote(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() || !cur.starts_with(Self::QUOTE) {
            return None;
        }
        let inner = rest_of_line(cur, cur.i + Self::QUOTE.len())?;
        Some(Hit::Nested {
            kind: ElementKind::Quote,
            end: inner.end,
            inner,
        })
    }

    /// A line made of exactly three of the same rule character.
    pub fn rule(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() {
            return None;
        }
        let rule = Self::RULES.into_iter().find(|r| cur.starts_with(r))?;
        let mut after = cur.clone();
        after.bump_n(rule.len());
        after.at_line_end().then_some(Hit::Rule { end: after.i })
    }

    pub fn ordered_list_item(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() {
            return None;
        }
        let label = ORDERED_PREFIX.captures(cur.rest())?.get(1)?.as_str();
        let inner = rest_of_line(cur, cur.i + label.len() + 1)?;
        Some(Hit::Nested {
            kind: ElementKind::OrderedListItem {
                order: label.to_string(),
            },
            end: inner.end,
            inner,
        })
    }
}

/// `from..line_end`, or `None` when nothing is left on the line.
fn rest_of_line(cur: &Cursor<'_>, from: usize) -> Option<Range<usize>> {
    let mut at = cur.clone();
    at.i = from;
    let end = at.line_end();
    (end > from).then_some(from..end)
}
