use super::{ParseOptions, scanner::find_elements, span::Span};

/// Where a `BlockCode` line sits inside its fenced block.
///
/// Renderers draw one continuous code box per fence, so each line needs to
/// know whether it opens, continues or closes the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCodePosition {
    Start,
    Middle,
    End,
    /// The fence holds exactly one line.
    Single,
}

/// Kind of a parsed element, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    UnorderedListItem,
    /// `level` is the number of `#` markers, 1 to 6.
    Header { level: u8 },
    Quote,
    Italic,
    Bold,
    Strike,
    Rule,
    InlineCode,
    Link { url: String },
    /// `order` is the label as written, dot included (`"12."`).
    OrderedListItem { order: String },
    BlockCode { position: BlockCodePosition },
}

impl ElementKind {
    /// Short label used by outlines and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::UnorderedListItem => "UnorderedListItem",
            ElementKind::Header { .. } => "Header",
            ElementKind::Quote => "Quote",
            ElementKind::Italic => "Italic",
            ElementKind::Bold => "Bold",
            ElementKind::Strike => "Strike",
            ElementKind::Rule => "Rule",
            ElementKind::InlineCode => "InlineCode",
            ElementKind::Link { .. } => "Link",
            ElementKind::OrderedListItem { .. } => "OrderedListItem",
            ElementKind::BlockCode { .. } => "BlockCode",
        }
    }

    /// Whether the content of this kind is scanned for children.
    pub fn is_nesting(&self) -> bool {
        !matches!(
            self,
            ElementKind::Text
                | ElementKind::Rule
                | ElementKind::Link { .. }
                | ElementKind::BlockCode { .. }
        )
    }
}

/// A node in the parsed tree.
///
/// `content` is the text the element spans with its syntax markers removed.
/// `children` holds the parse of `content` for constructs whose interior may
/// carry more markdown; it is empty for `Text`, `Rule`, `Link` and
/// `BlockCode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    pub kind: ElementKind,
    pub content: String,
    /// Source range of the element, markers included.
    pub span: Span,
    pub children: Vec<Element>,
}

impl Element {
    /// A leaf `Text` element.
    pub fn text(content: impl Into<String>, span: Span) -> Self {
        Self::leaf(ElementKind::Text, content, span)
    }

    pub fn leaf(kind: ElementKind, content: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            content: content.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends the plain-text projection of this element to `out`.
    ///
    /// Leaves contribute their content verbatim and nesting constructs the
    /// projection of their children. A nesting construct the depth limit left
    /// without children has its content scanned again, so markers below the
    /// limit are stripped as well. The walk keeps its own stack, so deeply
    /// nested input does not recurse.
    pub fn push_plain_text(&self, out: &mut String) {
        let mut stack = vec![Pending::Borrowed(self)];
        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Borrowed(el) if !el.children.is_empty() => {
                    stack.extend(el.children.iter().rev().map(Pending::Borrowed));
                }
                Pending::Owned(el) if !el.children.is_empty() => {
                    stack.extend(el.children.into_iter().rev().map(Pending::Owned));
                }
                Pending::Borrowed(el) => el.push_unparsed(out, &mut stack),
                Pending::Owned(el) => el.push_unparsed(out, &mut stack),
            }
        }
    }

    /// Handles a childless element: leaves are emitted, unparsed nesting
    /// content is queued as a fresh scan.
    fn push_unparsed<'a>(&self, out: &mut String, stack: &mut Vec<Pending<'a>>) {
        if self.kind.is_nesting() && !self.content.is_empty() {
            let rescanned = find_elements(&self.content, 0, 0, &ParseOptions::default());
            stack.extend(rescanned.into_iter().rev().map(Pending::Owned));
        } else {
            out.push_str(&self.content);
        }
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }
}

enum Pending<'a> {
    Borrowed(&'a Element),
    Owned(Element),
}
