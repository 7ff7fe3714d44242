/// Returns true for the characters that end a line.
///
/// `.` in the construct patterns never crosses these, and `^`/`$` anchor
/// next to them.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// A cursor over a span being scanned, with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original input (via `base` offset). Movement is always by whole
/// chars so local indices stay on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The span being scanned.
    pub s: &'a str,
    /// Offset of `s` in the original input (added to local index for absolute positions).
    pub base: usize,
    /// Current local byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Unconsumed remainder of the span.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks at the char `n` chars ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The char just before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.s[..self.i.min(self.s.len())].chars().next_back()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one char, returning the consumed char.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only skip over ASCII delimiters they
    /// have already matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// `^` in multi-line mode: the cursor sits at the start of a line.
    pub fn at_line_start(&self) -> bool {
        self.prev().is_none_or(is_line_break)
    }

    /// `$` in multi-line mode: the cursor sits at the end of a line.
    pub fn at_line_end(&self) -> bool {
        self.peek().is_none_or(is_line_break)
    }

    /// Local index of the end of the current line (exclusive of the break).
    pub fn line_end(&self) -> usize {
        self.rest()
            .find(is_line_break)
            .map_or(self.s.len(), |off| self.i + off)
    }
}
