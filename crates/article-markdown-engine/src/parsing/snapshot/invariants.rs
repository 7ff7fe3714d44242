use crate::parsing::{Document, Element, ElementKind, Span};

/// Validates scanner output against the source it was parsed from.
///
/// Asserts that:
/// - Top-level spans tile the whole source, in order, without gaps
/// - Children spans tile the source range of their parent's content
/// - `Text` content equals its source slice
/// - `Text`, `Rule`, `Link` and `BlockCode` never have children
/// - Nesting constructs with non-empty content have children
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    assert_tiles(source, &doc.elements, Span::new(0, source.len()));
    for el in &doc.elements {
        check_element(source, el, true);
    }
}

/// Like [`check`] but for a parse made with a depth limit, where elements
/// at the limit legitimately have no children.
pub fn check_limited(source: &str, doc: &Document) {
    assert_tiles(source, &doc.elements, Span::new(0, source.len()));
    for el in &doc.elements {
        check_element(source, el, false);
    }
}

fn check_element(source: &str, el: &Element, require_children: bool) {
    assert!(
        el.span.end <= source.len(),
        "span out of bounds: {:?} (source len: {})",
        el.span,
        source.len()
    );
    match &el.kind {
        ElementKind::Text => {
            assert_eq!(
                el.span.slice(source),
                el.content,
                "text content differs from its source at {:?}",
                el.span
            );
            assert_leaf(el);
        }
        ElementKind::Rule | ElementKind::Link { .. } | ElementKind::BlockCode { .. } => {
            assert_leaf(el);
        }
        _ => {
            if el.children.is_empty() {
                assert!(
                    !require_children || el.content.is_empty(),
                    "{} at {:?} has content but no children",
                    el.kind.name(),
                    el.span
                );
                return;
            }
            let inner = Span::new(
                el.children[0].span.start,
                el.children[el.children.len() - 1].span.end,
            );
            assert!(
                inner.start >= el.span.start && inner.end <= el.span.end,
                "children {:?} escape parent {:?}",
                inner,
                el.span
            );
            assert_eq!(
                inner.slice(source),
                el.content,
                "children of {} at {:?} do not cover its content",
                el.kind.name(),
                el.span
            );
            assert_tiles(source, &el.children, inner);
            for child in &el.children {
                check_element(source, child, require_children);
            }
        }
    }
}

fn assert_leaf(el: &Element) {
    assert!(
        el.children.is_empty(),
        "{} at {:?} must not have children",
        el.kind.name(),
        el.span
    );
}

fn assert_tiles(source: &str, elements: &[Element], range: Span) {
    let mut at = range.start;
    for el in elements {
        assert_eq!(
            el.span.start, at,
            "gap or overlap before {} at {:?} in {:?}",
            el.kind.name(),
            el.span,
            range
        );
        assert!(
            el.span.start < el.span.end,
            "empty span for {} at {:?}",
            el.kind.name(),
            el.span
        );
        at = el.span.end;
    }
    assert_eq!(
        at,
        range.end,
        "elements stop short of {:?} (source len: {})",
        range,
        source.len()
    );
}
