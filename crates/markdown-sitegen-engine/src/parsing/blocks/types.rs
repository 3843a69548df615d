/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other type matches.
    Paragraph,
    /// ATX or setext heading.
    Heading {
        /// 1 to 6.
        level: u8,
    },
    /// Fenced code; a raw zone.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    HorizontalRule,
}

/// A blank-line-delimited span of the document with its assigned type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block text, trimmed of surrounding whitespace.
    pub text: String,
    pub kind: BlockType,
}
