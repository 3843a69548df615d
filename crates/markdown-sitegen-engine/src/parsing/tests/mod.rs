//! End-to-end tests for the parsing pipeline.
//!
//! Uses inline `insta` snapshots for rendered HTML so expected output sits
//! next to the markdown that produces it.

use crate::parsing::{
    MarkdownOptions, blocks::BlockType, extract_title, markdown_to_html, markdown_to_html_node,
    parse_document,
};

#[test]
fn heading_and_paragraph() {
    let html = markdown_to_html("# H\n\nBody **bold**.").unwrap();
    insta::assert_snapshot!(html, @"<div><h1>H</h1><p>Body <b>bold</b>.</p></div>");
}

#[test]
fn inline_kinds_in_one_paragraph() {
    let html = markdown_to_html(
        "See ![logo](/img/logo.png), [docs](https://docs.rs) or <me@example.com> for `code`.",
    )
    .unwrap();
    insta::assert_snapshot!(html, @r#"<div><p>See <img src="/img/logo.png" alt="logo">, <a href="https://docs.rs">docs</a> or <a href="mailto:me@example.com">me@example.com</a> for <code>code</code>.</p></div>"#);
}

#[test]
fn quote_and_rule() {
    let html = markdown_to_html("> first\n> second\n\n___").unwrap();
    insta::assert_snapshot!(html, @"<div><blockquote>first second</blockquote><hr></div>");
}

#[test]
fn setext_headings() {
    let html = markdown_to_html("Title\n=====\n\nSubtitle\n--------").unwrap();
    insta::assert_snapshot!(html, @"<div><h1>Title</h1><h2>Subtitle</h2></div>");
}

#[test]
fn ordered_list_with_two_digit_items() {
    let md = (1..=12)
        .map(|i| format!("{i}. n{i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let html = markdown_to_html(&md).unwrap();
    insta::assert_snapshot!(html, @"<div><ol><li>n1</li><li>n2</li><li>n3</li><li>n4</li><li>n5</li><li>n6</li><li>n7</li><li>n8</li><li>n9</li><li>n10</li><li>n11</li><li>n12</li></ol></div>");
}

#[test]
fn rendering_twice_is_identical() {
    let root = markdown_to_html_node(
        "# T\n\n- a\n- **b**\n\n```\nx\n```",
        &MarkdownOptions::default(),
    );
    assert_eq!(root.to_html().unwrap(), root.to_html().unwrap());
}

#[test]
fn parse_document_pairs_text_and_kind() {
    let doc = parse_document("# Title\n\n---\n\ntext");
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockType::Heading { level: 1 },
            BlockType::HorizontalRule,
            BlockType::Paragraph
        ]
    );
    assert_eq!(doc.blocks[2].text, "text");
}

#[test]
fn title_and_body_come_from_same_blocks() {
    let md = "Intro\n\n# Page Title\n\nBody";
    assert_eq!(extract_title(md).unwrap(), "Page Title");
    let html = markdown_to_html(md).unwrap();
    insta::assert_snapshot!(html, @"<div><p>Intro</p><h1>Page Title</h1><p>Body</p></div>");
}

#[test]
fn unpaired_markers_survive_rendering() {
    let html = markdown_to_html("This is **unclosed and `also").unwrap();
    insta::assert_snapshot!(html, @"<div><p>This is **unclosed and `also</p></div>");
}
