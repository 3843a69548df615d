use crate::html::{HtmlError, HtmlNode};

use super::{
    blocks::{
        Block, BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::tokenize,
    parse_document,
};

/// Rendering options for the document assembler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Escape `&`, `<` and `>` in text and code, and quotes in URLs.
    ///
    /// Off by default: text is emitted exactly as written.
    pub escape_html: bool,
}

impl MarkdownOptions {
    fn text(&self, text: &str) -> String {
        if self.escape_html {
            html_escape::encode_text(text).into_owned()
        } else {
            text.to_string()
        }
    }
}

/// Builds the HTML tree for a whole document: one child of the root `div`
/// per block, in document order.
pub fn markdown_to_html_node(markdown: &str, options: &MarkdownOptions) -> HtmlNode {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            log::debug!("block {index} classified as {:?}", block.kind);
            block_to_html_node(block, options)
        })
        .collect();
    HtmlNode::parent("div", children)
}

/// Converts a document to an HTML string with default options.
///
/// A document with no blocks fails with [`HtmlError::MissingChildren`].
pub fn markdown_to_html(markdown: &str) -> Result<String, HtmlError> {
    markdown_to_html_with(markdown, &MarkdownOptions::default())
}

pub fn markdown_to_html_with(markdown: &str, options: &MarkdownOptions) -> Result<String, HtmlError> {
    markdown_to_html_node(markdown, options).to_html()
}

/// Builds the subtree for one classified block.
pub fn block_to_html_node(block: &Block, options: &MarkdownOptions) -> HtmlNode {
    let text = block.text.as_str();
    match block.kind {
        BlockType::Paragraph => paragraph_node(text, options),
        BlockType::Heading { level } => {
            HtmlNode::parent(format!("h{level}"), inline_nodes(Heading::content(text), options))
        }
        BlockType::Code => {
            let code = HtmlNode::text(options.text(&CodeFence::body(text)));
            HtmlNode::parent("pre", vec![HtmlNode::parent("code", vec![code])])
        }
        BlockType::Quote => HtmlNode::parent(
            "blockquote",
            inline_nodes(&BlockQuote::content(text), options),
        ),
        BlockType::UnorderedList => list_node("ul", UnorderedList::items(text), options),
        BlockType::OrderedList => list_node("ol", OrderedList::items(text), options),
        BlockType::HorizontalRule => HtmlNode::void("hr"),
    }
}

fn inline_nodes(text: &str, options: &MarkdownOptions) -> Vec<HtmlNode> {
    tokenize(text)
        .iter()
        .map(|fragment| {
            if options.escape_html {
                fragment.escaped().to_html_node()
            } else {
                fragment.to_html_node()
            }
        })
        .collect()
}

/// One `p` per source line; several lines are grouped in a `div`.
fn paragraph_node(text: &str, options: &MarkdownOptions) -> HtmlNode {
    let mut paragraphs: Vec<HtmlNode> = Paragraph::lines(text)
        .map(|line| HtmlNode::parent("p", inline_nodes(line, options)))
        .collect();
    if paragraphs.len() == 1
        && let Some(single) = paragraphs.pop()
    {
        return single;
    }
    HtmlNode::parent("div", paragraphs)
}

fn list_node(tag: &str, items: Vec<&str>, options: &MarkdownOptions) -> HtmlNode {
    let items = items
        .into_iter()
        .map(|item| HtmlNode::parent("li", inline_nodes(item, options)))
        .collect();
    HtmlNode::parent(tag, items)
}
