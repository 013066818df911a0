//! Integration tests for the markup transformer.

use docfmt::{render, InlineSpan, RichNode};

#[test]
fn test_transform_always_non_empty() {
    let inputs = [
        "",
        " ",
        "\n",
        "plain",
        "# h",
        "*",
        "**",
        "__",
        "⸻",
        "1. x",
        "• y",
        "*a* **b** __c__",
    ];
    for source in inputs {
        let doc = render(source);
        assert!(doc.node_count() >= 1, "source {:?}", source);
    }
}

#[test]
fn test_empty_input_placeholder() {
    let doc = render("");
    assert!(doc.is_placeholder());
    assert_eq!(doc.node_count(), 1);
}

#[test]
fn test_heading_title() {
    let doc = render("# Title");
    assert_eq!(
        doc.nodes,
        vec![RichNode::Heading {
            level: 1,
            spans: vec![InlineSpan::Plain("Title".to_string())],
        }]
    );
}

#[test]
fn test_bold_and_italic_paragraph() {
    let doc = render("**bold** and *italic*");
    assert_eq!(
        doc.nodes,
        vec![RichNode::Paragraph {
            spans: vec![
                InlineSpan::Bold("bold".to_string()),
                InlineSpan::Plain(" and ".to_string()),
                InlineSpan::Italic("italic".to_string()),
            ],
        }]
    );
}

#[test]
fn test_ordered_items_keep_indices() {
    let doc = render("1. first\n2. second");
    match (&doc.nodes[0], &doc.nodes[1]) {
        (
            RichNode::ListItem {
                ordered: true,
                index: Some(1),
                ..
            },
            RichNode::ListItem {
                ordered: true,
                index: Some(2),
                ..
            },
        ) => {}
        other => panic!("unexpected nodes: {:?}", other),
    }
}

#[test]
fn test_unordered_item_has_no_index() {
    let doc = render("• point");
    assert!(matches!(
        &doc.nodes[0],
        RichNode::ListItem {
            ordered: false,
            index: None,
            ..
        }
    ));
}

#[test]
fn test_content_round_trip() {
    // Concatenated span text reproduces the visible content of each
    // block, markers stripped, unmatched delimiters preserved.
    let cases = [
        ("**b** plain *i*", "b plain i"),
        ("a lone * star", "a lone * star"),
        ("# Head **x**", "Head x"),
        ("***text***", "*text*"),
        ("trailing **", "trailing **"),
    ];
    for (source, visible) in cases {
        let doc = render(source);
        assert_eq!(doc.plain_text(), visible, "source {:?}", source);
    }
}

#[test]
fn test_blank_line_separates_paragraphs() {
    let doc = render("one\n\ntwo\n\n\nthree");
    assert_eq!(doc.node_count(), 3);
    for node in &doc.nodes {
        assert!(matches!(node, RichNode::Paragraph { .. }));
    }
}

#[test]
fn test_single_newline_stays_in_paragraph() {
    let doc = render("line one\nline two");
    assert_eq!(doc.node_count(), 1);
    assert_eq!(doc.nodes[0].plain_text(), "line one\nline two");
}

#[test]
fn test_rule_consumes_only_its_line() {
    let doc = render("above\n⸻\nbelow");
    assert_eq!(doc.node_count(), 3);
    assert_eq!(doc.nodes[1], RichNode::Rule);
    assert_eq!(doc.nodes[2].plain_text(), "below");
}

#[test]
fn test_heading_four_hashes_is_paragraph() {
    let doc = render("#### not a heading");
    assert!(matches!(&doc.nodes[0], RichNode::Paragraph { .. }));
}

#[test]
fn test_idempotent_deep_equality() {
    let source = "# H\n\npara **b** *i*\n\n• li\n1. num\n\n⸻";
    let first = render(source);
    let second = render(source);
    assert_eq!(first, second);
}
