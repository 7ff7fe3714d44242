use std::fmt::Write;

use crate::parsing::{Document, Element, ElementKind};

/// Renders `doc` as one line per element, children indented two spaces.
///
/// Each line reads `Kind(payload) start..end "content"`, with the content
/// Debug-escaped so newlines stay visible.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for el in &doc.elements {
        write_element(&mut out, el, 0);
    }
    out
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let payload = match &el.kind {
        ElementKind::Header { level } => format!("({level})"),
        ElementKind::Link { url } => format!("({url})"),
        ElementKind::OrderedListItem { order } => format!("({order})"),
        ElementKind::BlockCode { position } => format!("({position:?})"),
        _ => String::new(),
    };
    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "{:indent$}{}{} {}..{} {:?}",
        "",
        el.kind.name(),
        payload,
        el.span.start,
        el.span.end,
        el.content,
        indent = depth * 2
    );
    for child in &el.children {
        write_element(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_lists_payload_and_spans() {
        let doc = parse("# T\n[a](u)");
        assert_eq!(
            outline(&doc),
            "Header(1) 0..3 \"T\"\n  Text 2..3 \"T\"\nText 3..4 \"\\n\"\nLink(u) 4..10 \"a\"\n"
        );
    }

    #[test]
    fn empty_document_has_empty_outline() {
        assert_eq!(outline(&parse("")), "");
    }
}
