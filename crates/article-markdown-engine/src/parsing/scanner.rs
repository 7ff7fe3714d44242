use super::{
    ParseOptions,
    construct::{Construct, Hit},
    cursor::Cursor,
    element::{Element, ElementKind},
    span::Span,
};

/// Scans `s` into a sequence of [`Element`]s covering the entire span.
///
/// # Arguments
/// - `s`: The span to scan
/// - `base`: Byte offset in the original input where `s` begins (for absolute spans)
/// - `depth`: Nesting level of `s`; top-level input is depth 0
///
/// At each position constructs are tried in precedence order; the first
/// position where any construct matches ends the pending text run. Text
/// between constructs is emitted as `Text`. Interiors of nesting constructs
/// are scanned again as fresh spans, so their first char counts as a line
/// start.
pub fn find_elements(s: &str, base: usize, depth: usize, options: &ParseOptions) -> Vec<Element> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut last_start = 0;

    while !cur.eof() {
        if let Some((construct, hit)) = Construct::first_match(&cur) {
            flush_text(&mut out, s, base, last_start, cur.i);
            let start = cur.i;
            let end = hit.end();
            log::trace!("{construct:?} at {}..{}", base + start, base + end);
            emit(&mut out, s, base, start, hit, depth, options);
            cur.i = end;
            last_start = end;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, base, last_start, s.len());
    out
}

/// Emits `s[start..end]` as a `Text` element if non-empty.
fn flush_text(out: &mut Vec<Element>, s: &str, base: usize, start: usize, end: usize) {
    if end > start {
        out.push(Element::text(
            &s[start..end],
            Span::new(base + start, base + end),
        ));
    }
}

fn emit(
    out: &mut Vec<Element>,
    s: &str,
    base: usize,
    start: usize,
    hit: Hit,
    depth: usize,
    options: &ParseOptions,
) {
    let span = |from: usize, to: usize| Span::new(base + from, base + to);

    match hit {
        Hit::Nested { kind, inner, end } => {
            let content = &s[inner.clone()];
            let children = if depth < options.max_depth {
                find_elements(content, base + inner.start, depth + 1, options)
            } else {
                log::debug!(
                    "nesting depth {depth} reached at {}, keeping {} content unparsed",
                    base + start,
                    kind.name()
                );
                Vec::new()
            };
            out.push(Element {
                kind,
                content: content.to_string(),
                span: span(start, end),
                children,
            });
        }
        Hit::Rule { end } => {
            out.push(Element::leaf(ElementKind::Rule, "", span(start, end)));
        }
        Hit::Link { title, url, end } => {
            out.push(Element::leaf(
                ElementKind::Link {
                    url: s[url].to_string(),
                },
                &s[title],
                span(start, end),
            ));
        }
        Hit::BlockCode { lines, .. } => {
            out.extend(lines.into_iter().map(|line| {
                Element::leaf(
                    ElementKind::BlockCode {
                        position: line.position,
                    },
                    &s[line.content],
                    span(line.span.start, line.span.end),
                )
            }));
        }
    }
}
