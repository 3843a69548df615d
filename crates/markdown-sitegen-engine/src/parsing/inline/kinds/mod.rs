//! # Inline Kinds
//!
//! Inline-specific types that own their syntax, so the parser never
//! hardcodes `![`, `](`, `<` or emphasis markers itself.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`
//! - **`Email`**: `<local@domain>`, linked as `mailto:`
//! - **`Delimiter`**: paired markers `**` (bold), `_` (italic), `` ` `` (code)
//! - **`url`**: the URL heuristic shared by images and links
//!
//! ## Extraction Order
//!
//! Images are tried before links because `![alt](url)` contains link syntax.
//! Delimiters only apply to text left over after all extractors ran.

use std::ops::Range;

use super::types::FragmentKind;

pub mod delimiter;
pub mod email;
pub mod image;
pub mod link;
pub mod url;

pub use delimiter::Delimiter;
pub use email::Email;
pub use image::Image;
pub use link::Link;

/// One recognised construct inside a plain text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch {
    /// Byte range of the whole construct in the searched text.
    pub range: Range<usize>,
    /// Visible text of the resulting fragment.
    pub text: String,
    pub url: String,
}

/// An inline construct recognised by pattern and lifted out of plain text.
pub trait Extractor {
    /// Kind of the fragments this extractor produces.
    const KIND: FragmentKind;

    /// Every non-overlapping match in `text`, left to right.
    fn find_all(text: &str) -> Vec<SpanMatch>;
}
