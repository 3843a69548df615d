//! # Block Parsing
//!
//! Two-step block parsing over a whole in-memory document.
//!
//! ## Parsing Steps
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockType` from ordered pattern checks
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types with owned syntax (Heading, CodeFence, BlockQuote, lists, ThematicBreak, Paragraph)
//! - **`segment`**: `markdown_to_blocks` splitting on blank lines
//! - **`classify`**: `classify` priority dispatch
//!
//! ## Key Invariants
//!
//! - No nesting: a block is one flat container (no lists inside quotes)
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Classification depends on block text only

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::markdown_to_blocks;
pub use types::{Block, BlockType};
