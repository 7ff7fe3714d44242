use std::ops::Range;

use crate::parsing::{
    construct::Hit,
    cursor::{Cursor, is_line_break},
    element::ElementKind,
};

/// Constructs enclosed by a run of one marker character on each side.
///
/// A run only counts when it is not part of a longer run of the same
/// marker: the char before the opening run and the char after the closing
/// run must differ from the marker. The interior is chosen lazily (the
/// first valid closing run wins), its first and last chars must pass the
/// construct's edge test, and the chars between them may not break the line.
/// Emphasis and strike interiors are at least two chars long; inline code
/// may hold a single char.
pub struct Delimited;

impl Delimited {
    pub const EMPHASIS: [u8; 2] = [b'*', b'_'];
    pub const STRIKE: u8 = b'~';
    pub const TICK: u8 = b'`';
    /// Shortest interior of emphasis and strike, in chars.
    pub const MIN_INTERIOR: usize = 2;

    /// `*text*` or `_text_`.
    pub fn italic(cur: &Cursor<'_>) -> Option<Hit> {
        Self::EMPHASIS.into_iter().find_map(|m| {
            enclosed(cur, m, 1, Self::MIN_INTERIOR, |c| c != m as char).map(|(inner, end)| {
                Hit::Nested {
                    kind: ElementKind::Italic,
                    inner,
                    end,
                }
            })
        })
    }

    /// `**text**` or `__text__`.
    ///
    /// A tripled run (`***text***`) is read as bold around italic: two
    /// markers are stripped from each side and the remaining `*text*` is
    /// left for the nested scan.
    pub fn bold(cur: &Cursor<'_>) -> Option<Hit> {
        Self::EMPHASIS.into_iter().find_map(|m| {
            let edge = |c: char| c != m as char;
            // a tripled run stays on one line so `***` rules are not swallowed
            let tripled_edge = |c: char| edge(c) && !is_line_break(c);
            let inner = enclosed(cur, m, 2, Self::MIN_INTERIOR, edge).or_else(|| {
                enclosed(cur, m, 3, Self::MIN_INTERIOR, tripled_edge)
                    .map(|(inner, end)| (inner.start - 1..inner.end + 1, end))
            });
            inner.map(|(inner, end)| Hit::Nested {
                kind: ElementKind::Bold,
                inner,
                end,
            })
        })
    }

    /// `~~text~~`.
    pub fn strike(cur: &Cursor<'_>) -> Option<Hit> {
        let m = Self::STRIKE;
        enclosed(cur, m, 2, Self::MIN_INTERIOR, |c| c != m as char).map(|(inner, end)| {
            Hit::Nested {
                kind: ElementKind::Strike,
                inner,
                end,
            }
        })
    }

    /// `` `code` ``; the interior may not start or end with whitespace.
    pub fn inline_code(cur: &Cursor<'_>) -> Option<Hit> {
        let m = Self::TICK;
        enclosed(cur, m, 1, 1, |c| c != m as char && !c.is_whitespace()).map(|(inner, end)| {
            Hit::Nested {
                kind: ElementKind::InlineCode,
                inner,
                end,
            }
        })
    }
}

/// Matches `width` copies of `marker`, an interior of at least `min_chars`
/// chars and a closing run at the cursor. Returns the interior range and the
/// index past the closing run.
fn enclosed(
    cur: &Cursor<'_>,
    marker: u8,
    width: usize,
    min_chars: usize,
    edge: impl Fn(char) -> bool,
) -> Option<(Range<usize>, usize)> {
    let b = cur.s.as_bytes();
    if cur.prev() == Some(marker as char) || !is_run(b, cur.i, marker, width) {
        return None;
    }

    let inner_start = cur.i + width;
    let mut chars = cur.s[inner_start..].char_indices();
    let (_, first) = chars.next()?;
    if !edge(first) {
        return None;
    }

    let (mut last_off, mut last) = (0, first);
    let mut count = 1;
    loop {
        let inner_end = inner_start + last_off + last.len_utf8();
        if count >= min_chars && edge(last) && closes(b, inner_end, marker, width) {
            return Some((inner_start..inner_end, inner_end + width));
        }
        // `last` moves into the middle of the interior, which stays on one line
        if last_off != 0 && is_line_break(last) {
            return None;
        }
        (last_off, last) = chars.next()?;
        count += 1;
    }
}

fn is_run(b: &[u8], at: usize, marker: u8, width: usize) -> bool {
    b.get(at..at + width)
        .is_some_and(|run| run.iter().all(|&x| x == marker))
}

fn closes(b: &[u8], at: usize, marker: u8, width: usize) -> bool {
    is_run(b, at, marker, width) && b.get(at + width) != Some(&marker)
}
