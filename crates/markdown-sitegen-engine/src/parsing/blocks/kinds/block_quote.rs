/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix, including its space.
    pub const PREFIX: &'static str = "> ";

    /// Whether every line of the block is quoted.
    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Quote text: prefixes stripped, lines joined with single spaces, trimmed.
    ///
    /// Multi-line quotes collapse to one line of text.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}
