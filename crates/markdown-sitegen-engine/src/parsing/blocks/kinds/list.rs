/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker stripped.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list block type: line `i` starts with `"{i}. "`, counting from 1.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected in front of item `number`.
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn matches(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item texts with the marker stripped.
    ///
    /// The stripped width follows the numeral, so item 10 loses `10. `, not `10.`.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| line.strip_prefix(&Self::marker(i + 1)).unwrap_or(line))
            .collect()
    }
}
