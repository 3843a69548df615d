use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, ThematicBreak, UnorderedList},
    types::BlockType,
};

/// Assigns a structural type to one block of text.
///
/// Checks run in a fixed priority order and the first match wins:
/// heading, code, quote, unordered list, horizontal rule, ordered list,
/// then paragraph. A lone `---` is therefore a rule: it has no text line
/// above it to be a setext underline for, and no space to be a list item.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = Heading::detect(block) {
        BlockType::Heading { level }
    } else if CodeFence::matches(block) {
        BlockType::Code
    } else if BlockQuote::matches(block) {
        BlockType::Quote
    } else if UnorderedList::matches(block) {
        BlockType::UnorderedList
    } else if ThematicBreak::matches(block) {
        BlockType::HorizontalRule
    } else if OrderedList::matches(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}
