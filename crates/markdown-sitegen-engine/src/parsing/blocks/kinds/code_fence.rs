/// Fenced code block type: a ```` ``` ```` line, the code, a closing ```` ``` ```` line.
///
/// Fenced code is a raw zone: its body is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    fn is_fence(line: &str) -> bool {
        line.trim_end() == Self::BACKTICKS
    }

    /// Whether the block opens and closes with a fence on distinct lines.
    pub fn matches(block: &str) -> bool {
        let lines: Vec<&str> = block.lines().collect();
        match lines.as_slice() {
            [first, .., last] => Self::is_fence(first) && Self::is_fence(last),
            _ => false,
        }
    }

    /// Lines between the fences, joined with `\n`, untouched.
    pub fn body(block: &str) -> String {
        let lines: Vec<&str> = block.lines().collect();
        match lines.as_slice() {
            [_, inner @ .., _] => inner.join("\n"),
            _ => String::new(),
        }
    }
}
