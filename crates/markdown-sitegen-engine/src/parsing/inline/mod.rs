//! # Inline Parsing
//!
//! Turns a run of text (one paragraph line, a heading, a list item) into a
//! flat sequence of typed [`InlineFragment`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a series of passes over a fragment list that starts as a
//! single plain fragment:
//! - pattern passes lift images, links and emails out of plain text
//! - delimiter passes split the remaining plain text on `**`, `_` and `` ` ``
//!
//! Fragments that already have a kind are never touched again, which is what
//! keeps `_` inside a URL or an email address from turning into italics.
//!
//! ## Modules
//!
//! - **`types`**: `InlineFragment`, `FragmentKind`, conversion to `HtmlNode`
//! - **`kinds`**: Inline-specific syntax (Image, Link, Email, Delimiter, url heuristic)
//! - **`parser`**: `tokenize()` main entry point with the `split_*` passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{FragmentKind, InlineFragment};
