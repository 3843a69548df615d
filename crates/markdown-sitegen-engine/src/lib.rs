pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlError, HtmlNode};
pub use io::*;
pub use parsing::{
    MarkdownOptions, NoHeadingFoundError,
    blocks::{Block, BlockType, classify, markdown_to_blocks},
    extract_title,
    inline::{FragmentKind, InlineFragment, tokenize},
    markdown_to_html, markdown_to_html_node, markdown_to_html_with,
};
