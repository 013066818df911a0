//! Document-level types.

use super::{InlineSpan, RichNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when the source has no visible content yet.
pub const PLACEHOLDER_TEXT: &str = "Your formatted document will appear here...";

/// A parsed rich-text document.
///
/// Fully derived from one source string; the transformer never caches or
/// mutates caller state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichDocument {
    /// Caller-owned metadata (title, last-modified timestamp)
    pub metadata: Metadata,

    /// Block nodes in source order
    pub nodes: Vec<RichNode>,
}

impl RichDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            nodes: Vec::new(),
        }
    }

    /// Create the placeholder document for empty source text.
    pub fn placeholder() -> Self {
        Self {
            metadata: Metadata::default(),
            nodes: vec![RichNode::Paragraph {
                spans: vec![InlineSpan::Italic(PLACEHOLDER_TEXT.to_string())],
            }],
        }
    }

    /// Add a node to the document.
    pub fn push(&mut self, node: RichNode) {
        self.nodes.push(node);
    }

    /// Get the number of block nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this is the empty-input placeholder document.
    pub fn is_placeholder(&self) -> bool {
        match self.nodes.as_slice() {
            [RichNode::Paragraph { spans }] => {
                matches!(spans.as_slice(), [InlineSpan::Italic(t)] if t == PLACEHOLDER_TEXT)
            }
            _ => false,
        }
    }

    /// Get the visible text content of the whole document.
    ///
    /// The placeholder document has no visible content.
    pub fn plain_text(&self) -> String {
        if self.is_placeholder() {
            return String::new();
        }
        self.nodes
            .iter()
            .map(RichNode::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for RichDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-owned document metadata.
///
/// The core never writes these fields itself; editor state such as a
/// last-updated timestamp is passed in as plain input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Last modification time, as reported by the caller
    pub modified: Option<DateTime<Utc>>,
}
