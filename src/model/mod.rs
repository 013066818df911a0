//! Document model produced by the markup transformer and the paginator.

mod document;
mod node;
mod page;

pub use document::{Metadata, RichDocument, PLACEHOLDER_TEXT};
pub use node::{InlineSpan, RichNode, RULE_GLYPH};
pub use page::Page;
