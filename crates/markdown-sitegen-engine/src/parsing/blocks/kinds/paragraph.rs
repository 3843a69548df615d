/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// type matches. Each source line is inline-parsed on its own.
pub struct Paragraph;

impl Paragraph {
    pub fn lines(block: &str) -> impl Iterator<Item = &str> {
        block.lines()
    }
}
