//! Integration tests for the parsing module.
//!
//! Tree shapes are pinned with `insta` inline snapshots of the outline
//! format; every parse is also run through the invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    BlockCodePosition, Document, Element, ElementKind, parse,
    snapshot::{invariants, outline},
};

fn parse_checked(src: &str) -> Document {
    let doc = parse(src);
    invariants(src, &doc);
    doc
}

/// Compact one-line rendering: `Kind(content)[children]`.
fn shape(els: &[Element]) -> String {
    els.iter()
        .map(|el| {
            let mut s = format!("{}({})", el.kind.name(), el.content);
            if !el.children.is_empty() {
                s.push('[');
                s.push_str(&shape(&el.children));
                s.push(']');
            }
            s
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// Snapshot tests

#[test]
fn bold_and_italic_inline() {
    let doc = parse_checked("**bold** and *italic*");
    insta::assert_snapshot!(outline(&doc), @r#"
    Bold 0..8 "bold"
      Text 2..6 "bold"
    Text 8..13 " and "
    Italic 13..21 "italic"
      Text 14..20 "italic"
    "#);
}

#[test]
fn italic_nested_in_quote() {
    let doc = parse_checked("> *emph in quote*");
    insta::assert_snapshot!(outline(&doc), @r#"
    Quote 0..17 "*emph in quote*"
      Italic 2..17 "emph in quote"
        Text 3..16 "emph in quote"
    "#);
}

#[test]
fn article_with_lists() {
    let doc = parse_checked("# Title\n- one\n- two **bo**\n1. first");
    insta::assert_snapshot!(outline(&doc), @r#"
    Header(1) 0..7 "Title"
      Text 2..7 "Title"
    Text 7..8 "\n"
    UnorderedListItem 8..13 "one"
      Text 10..13 "one"
    Text 13..14 "\n"
    UnorderedListItem 14..26 "two **bo**"
      Text 16..20 "two "
      Bold 20..26 "bo"
        Text 22..24 "bo"
    Text 26..27 "\n"
    OrderedListItem(1.) 27..35 "first"
      Text 30..35 "first"
    "#);
}

#[test]
fn fenced_code_lines() {
    let doc = parse_checked("```\nline1\nline2\n```");
    insta::assert_snapshot!(outline(&doc), @r#"
    BlockCode(Start) 0..10 "line1\n"
    BlockCode(End) 10..19 "line2"
    "#);
}

// Required behaviours

#[test]
fn empty_input_has_no_elements() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn plain_text_is_single_text() {
    let src = "plain text, no markdown";
    let doc = parse_checked(src);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.elements[0].kind, ElementKind::Text);
    assert_eq!(doc.elements[0].content, src);
}

#[test]
fn single_header() {
    let doc = parse_checked("# Header");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.elements[0].kind, ElementKind::Header { level: 1 });
    assert_eq!(doc.elements[0].content, "Header");
}

#[test]
fn single_link() {
    let doc = parse_checked("[title](http://x)");
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.elements[0].kind,
        ElementKind::Link {
            url: "http://x".into()
        }
    );
    assert_eq!(doc.elements[0].content, "title");
    assert!(doc.elements[0].children.is_empty());
}

#[test]
fn block_code_positions() {
    let doc = parse_checked("```\na\nb\nc\n```");
    let positions: Vec<_> = doc
        .iter()
        .map(|el| match el.kind {
            ElementKind::BlockCode { position } => position,
            _ => panic!("expected only block code, got {}", el.kind.name()),
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            BlockCodePosition::Start,
            BlockCodePosition::Middle,
            BlockCodePosition::End
        ]
    );
}

// Emphasis marker combinations. The guards around doubled markers are the
// easiest part of the scanner to get wrong, so each combination is pinned.

#[rstest]
#[case("*ab*", "Italic(ab)[Text(ab)]")]
#[case("_ab_", "Italic(ab)[Text(ab)]")]
#[case("**ab**", "Bold(ab)[Text(ab)]")]
#[case("__ab__", "Bold(ab)[Text(ab)]")]
#[case("***ab***", "Bold(*ab*)[Italic(ab)[Text(ab)]]")]
#[case("___ab___", "Bold(_ab_)[Italic(ab)[Text(ab)]]")]
#[case("*a*", "Text(*a*)")]
#[case("_a_", "Text(_a_)")]
#[case("**a**", "Text(**a**)")]
#[case("***a***", "Text(***a***)")]
#[case("~~a~~", "Text(~~a~~)")]
#[case("a *b* c", "Text(a *b* c)")]
#[case("*a*b*", "Italic(a*b)[Text(a*b)]")]
#[case("**a*", "Text(**a*)")]
#[case("*a**", "Text(*a**)")]
#[case("**a *b***", "Text(**a *b***)")]
#[case("* a*", "UnorderedListItem(a*)[Text(a*)]")]
#[case("x *ab* _cd_", "Text(x ), Italic(ab)[Text(ab)], Text( ), Italic(cd)[Text(cd)]")]
#[case("*a_b*", "Italic(a_b)[Text(a_b)]")]
#[case("**ab** **cd**", "Bold(ab)[Text(ab)], Text( ), Bold(cd)[Text(cd)]")]
#[case("a**bc**d", "Text(a), Bold(bc)[Text(bc)], Text(d)")]
#[case("__init__ method", "Bold(init)[Text(init)], Text( method)")]
#[case("snake_case_name", "Text(snake), Italic(case)[Text(case)], Text(name)")]
#[case(
    "**a *bc* d**",
    "Bold(a *bc* d)[Text(a ), Italic(bc)[Text(bc)], Text( d)]"
)]
#[case(
    "*a **bc** d*",
    "Italic(a **bc** d)[Text(a ), Bold(bc)[Text(bc)], Text( d)]"
)]
fn emphasis_combinations(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(shape(&parse_checked(src).elements), expected);
}

// Precedence and line anchoring

#[rstest]
#[case("- item", "UnorderedListItem(item)[Text(item)]")]
#[case("a - b", "Text(a - b)")]
#[case("## Sub *xy*", "Header(Sub *xy*)[Text(Sub ), Italic(xy)[Text(xy)]]")]
#[case("####### seven", "Text(####### seven)")]
#[case("> > twice", "Quote(> twice)[Quote(twice)[Text(twice)]]")]
#[case("---", "Rule()")]
#[case("a\n***\nb", "Text(a\n), Rule(), Text(\nb)")]
#[case("use `x` here", "Text(use ), InlineCode(x)[Text(x)], Text( here)")]
#[case("` x`", "Text(` x`)")]
#[case("~~gone~~", "Strike(gone)[Text(gone)]")]
#[case("[]()", "Link()")]
#[case("see [a](b).", "Text(see ), Link(a), Text(.)")]
#[case("12. twelve", "OrderedListItem(twelve)[Text(twelve)]")]
#[case("- `code` **bo**", "UnorderedListItem(`code` **bo**)[InlineCode(code)[Text(code)], Text( ), Bold(bo)[Text(bo)]]")]
#[case("```one```", "BlockCode(one)")]
#[case("text ```inline```", "Text(text ```inline```)")]
#[case("***\nb***", "Rule(), Text(\nb***)")]
fn construct_precedence(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(shape(&parse_checked(src).elements), expected);
}

/// Every top-level span, sliced back out of the source, reproduces it.
#[rstest]
#[case("")]
#[case("plain")]
#[case("# H\n> q\n- l\n1. o\n---\n```\nc\n```\n[a](b) `c` ~~de~~ **ef** *fg*")]
#[case("** unbalanced *markers_ and `ticks")]
#[case("Юникод **жирный** и *курсив*")]
#[case("crlf line\r\n- item\r\n---\r\n")]
fn spans_round_trip(#[case] src: &str) {
    let doc = parse_checked(src);
    let rebuilt: String = doc.iter().map(|el| el.span.slice(src)).collect();
    assert_eq!(rebuilt, src);
}
