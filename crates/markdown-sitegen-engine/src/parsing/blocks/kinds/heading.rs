/// Heading block type, ATX (`## Title`) or setext (`Title` over `===`/`---`).
///
/// All heading syntax knowledge lives here, not in classifier code.
pub struct Heading;

impl Heading {
    /// The ATX marker character.
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;
    /// Setext underline characters for levels 1 and 2.
    pub const SETEXT_H1: u8 = b'=';
    pub const SETEXT_H2: u8 = b'-';

    /// Level of an ATX heading line: 1 to 6 `#` followed by a space.
    pub fn atx_level(line: &str) -> Option<u8> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        let level = u8::try_from(hashes).ok()?;
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        (line.as_bytes().get(hashes) == Some(&b' ')).then_some(level)
    }

    /// Level of a setext underline: two or more `=` (1) or `-` (2).
    pub fn setext_level(line: &str) -> Option<u8> {
        let line = line.trim_end();
        if line.len() < 2 {
            return None;
        }
        if line.bytes().all(|b| b == Self::SETEXT_H1) {
            Some(1)
        } else if line.bytes().all(|b| b == Self::SETEXT_H2) {
            Some(2)
        } else {
            None
        }
    }

    /// Detects a heading block, returning its level.
    ///
    /// The ATX form only looks at the first line. The setext form needs
    /// exactly two lines: non-blank text, then the underline.
    pub fn detect(block: &str) -> Option<u8> {
        let mut lines = block.lines();
        let first = lines.next()?;
        if let Some(level) = Self::atx_level(first) {
            return Some(level);
        }
        let underline = lines.next()?;
        if lines.next().is_some() || first.trim().is_empty() {
            return None;
        }
        Self::setext_level(underline)
    }

    /// Heading text without the `#` marker or setext underline, trimmed.
    ///
    /// Lines following an ATX heading line are kept as part of the text.
    pub fn content(block: &str) -> &str {
        let body = match block.split_once('\n') {
            Some((first, rest)) if Self::setext_level(rest).is_some() => first,
            _ => block,
        };
        match Self::atx_level(body) {
            Some(level) => body[usize::from(level) + 1..].trim(),
            None => body.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_levels() {
        assert_eq!(Heading::atx_level("# One"), Some(1));
        assert_eq!(Heading::atx_level("###### Six"), Some(6));
        assert_eq!(Heading::atx_level("####  Extra space"), Some(4));
    }

    #[test]
    fn atx_rejects_seven_hashes_and_missing_space() {
        assert_eq!(Heading::atx_level("####### Seven"), None);
        assert_eq!(Heading::atx_level("#NoSpace"), None);
        assert_eq!(Heading::atx_level("#"), None);
        assert_eq!(Heading::atx_level("text # not"), None);
    }

    #[test]
    fn setext_underlines() {
        assert_eq!(Heading::setext_level("======"), Some(1));
        assert_eq!(Heading::setext_level("-----"), Some(2));
        assert_eq!(Heading::setext_level("--  "), Some(2));
        assert_eq!(Heading::setext_level("="), None);
        assert_eq!(Heading::setext_level("-=-"), None);
    }

    #[test]
    fn detect_setext_needs_exactly_two_lines() {
        assert_eq!(Heading::detect("Heading 1\n======"), Some(1));
        assert_eq!(Heading::detect("Heading 2 -\n-----"), Some(2));
        assert_eq!(Heading::detect("one\ntwo\n====="), None);
        assert_eq!(Heading::detect("======"), None);
    }

    #[test]
    fn detect_atx_wins_over_underline() {
        assert_eq!(Heading::detect("# Heading 2\n-----"), Some(1));
    }

    #[test]
    fn content_strips_markers() {
        assert_eq!(Heading::content("# Title"), "Title");
        assert_eq!(Heading::content("####  Heading 4"), "Heading 4");
        assert_eq!(Heading::content("Heading 1\n======"), "Heading 1");
        assert_eq!(Heading::content("# Heading 1\n======"), "Heading 1");
        assert_eq!(Heading::content("# Heading\nmore"), "Heading\nmore");
    }
}
