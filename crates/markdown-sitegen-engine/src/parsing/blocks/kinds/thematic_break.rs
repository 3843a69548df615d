/// Horizontal rule block type: a lone run of `*`, `-` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['*', '-', '_'];
    pub const MIN_RUN: usize = 3;

    /// Whether the whole block is three or more of one rule character.
    pub fn matches(block: &str) -> bool {
        let Some(first) = block.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && block.chars().count() >= Self::MIN_RUN
            && block.chars().all(|c| c == first)
    }
}
