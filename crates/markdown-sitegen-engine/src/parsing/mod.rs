pub mod blocks;
pub mod document;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use blocks::{Block, classify, markdown_to_blocks};

pub use document::{
    MarkdownOptions, block_to_html_node, markdown_to_html, markdown_to_html_node,
    markdown_to_html_with,
};
pub use title::{NoHeadingFoundError, extract_title};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Segments a document and classifies every block.
pub fn parse_document(markdown: &str) -> ParsedDoc {
    let blocks = markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(&text);
            Block { text, kind }
        })
        .collect();
    ParsedDoc { blocks }
}
