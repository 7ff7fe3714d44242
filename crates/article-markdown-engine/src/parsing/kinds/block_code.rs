use crate::parsing::{
    construct::{CodeLine, Hit},
    cursor::{Cursor, is_line_break},
    element::BlockCodePosition,
};

/// Triple-backtick fenced code.
///
/// The opening fence starts a line; the block runs lazily to the first
/// closing fence that ends a line, and holds at least one char. The line
/// break right after the opening fence and the one right before the closing
/// fence belong to the fences.
pub struct BlockCode;

impl BlockCode {
    pub const FENCE: &'static str = "```";

    pub fn parse(cur: &Cursor<'_>) -> Option<Hit> {
        if !cur.at_line_start() || !cur.starts_with(Self::FENCE) {
            return None;
        }
        let s = cur.s;
        let open_end = cur.i + Self::FENCE.len();
        let (close, end) = Self::find_close(s, open_end)?;

        let body = &s[open_end..close];
        let lead = ["\r\n", "\n", "\r"]
            .into_iter()
            .find(|br| body.starts_with(br))
            .map_or(0, str::len);
        let body = &body[lead..];
        let trail = ["\r\n", "\n", "\r"]
            .into_iter()
            .find(|br| body.ends_with(br))
            .map_or(0, str::len);
        let body_start = open_end + lead;
        let body = &body[..body.len() - trail];

        Some(Hit::BlockCode {
            lines: Self::split_lines(body, body_start, cur.i, end),
            end,
        })
    }

    /// Finds the closing fence, returning its start and the index past it.
    fn find_close(s: &str, open_end: usize) -> Option<(usize, usize)> {
        let first = s[open_end..].chars().next()?;
        let mut from = open_end + first.len_utf8();
        loop {
            let close = from + s[from..].find(Self::FENCE)?;
            let end = close + Self::FENCE.len();
            if s[end..].chars().next().is_none_or(is_line_break) {
                return Some((close, end));
            }
            from = close + 1;
        }
    }

    /// One [`CodeLine`] per `\n`-separated line of `body`. Line spans tile
    /// `start..end` so the fences are attributed to the first and last line.
    fn split_lines(body: &str, body_start: usize, start: usize, end: usize) -> Vec<CodeLine> {
        let pieces: Vec<&str> = body.split('\n').collect();
        let count = pieces.len();
        let mut lines = Vec::with_capacity(count);
        let (mut offset, mut span_start) = (body_start, start);

        for (index, piece) in pieces.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let content_end = offset + piece.len() + usize::from(!is_last);
            let position = match index {
                _ if count == 1 => BlockCodePosition::Single,
                0 => BlockCodePosition::Start,
                _ if is_last => BlockCodePosition::End,
                _ => BlockCodePosition::Middle,
            };
            let span_end = if is_last { end } else { content_end };
            lines.push(CodeLine {
                position,
                content: offset..content_end,
                span: span_start..span_end,
            });
            offset = content_end;
            span_start = span_end;
        }
        lines
    }
}
