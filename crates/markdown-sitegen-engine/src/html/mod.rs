//! # HTML Node Model
//!
//! A minimal HTML tree built bottom-up by the document assembler and
//! serialized once into markup.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` with its two shapes (`Leaf`, `Parent`) and `to_html()`
//! - **`attributes`**: `Attributes`, an insertion-ordered name/value list
//!
//! ## Serialization Rules
//!
//! - A tagless leaf emits its value verbatim (plain text runs)
//! - A tagged leaf with no value is a void element (`<hr>`, `<img ...>`)
//! - A parent must have a tag and at least one child, otherwise serialization fails

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::HtmlNode;

/// Structural errors raised while serializing an [`HtmlNode`] tree.
///
/// These indicate a construction bug, never a markdown authoring problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
    #[error("leaf node has neither a tag nor a value")]
    MissingValue,
}
