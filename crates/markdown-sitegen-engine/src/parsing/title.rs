use super::blocks::markdown_to_blocks;

/// Prefix of the block that carries a page title.
pub const TITLE_PREFIX: &str = "# ";

/// No block starts with `# `; the document has no title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no level-1 `# ` heading found")]
pub struct NoHeadingFoundError;

/// Returns the text of the first block starting with `# `.
///
/// The whole rest of that block is returned, so lines that follow the
/// heading without a blank line in between are part of the title.
pub fn extract_title(markdown: &str) -> Result<String, NoHeadingFoundError> {
    markdown_to_blocks(markdown)
        .iter()
        .find_map(|block| block.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(NoHeadingFoundError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_first_block() {
        assert_eq!(
            extract_title("# Heading 1\n\nA paragraph").unwrap(),
            "Heading 1"
        );
    }

    #[test]
    fn surrounding_newlines() {
        assert_eq!(extract_title("\n# Heading 1\n").unwrap(), "Heading 1");
    }

    #[test]
    fn title_after_paragraph() {
        assert_eq!(
            extract_title("A paragraph\n\n# Heading 1\n\nA paragraph").unwrap(),
            "Heading 1"
        );
    }

    #[test]
    fn title_keeps_following_lines_of_its_block() {
        assert_eq!(
            extract_title("A paragraph\n\n# Heading 1\nA paragraph").unwrap(),
            "Heading 1\nA paragraph"
        );
    }

    #[test]
    fn level_two_heading_is_not_a_title() {
        assert_eq!(extract_title("\n## Heading 1\n"), Err(NoHeadingFoundError));
    }

    #[test]
    fn empty_document_has_no_title() {
        assert_eq!(extract_title(""), Err(NoHeadingFoundError));
    }

    #[test]
    fn first_of_several_titles_wins() {
        assert_eq!(extract_title("# One\n\n# Two").unwrap(), "One");
    }
}
