//! Block and inline node types.

use serde::{Deserialize, Serialize};

/// The glyph recognized as a horizontal rule / manual break marker.
pub const RULE_GLYPH: &str = "⸻";

/// One block-level unit of a parsed document.
///
/// The sequence of nodes preserves source order. Nesting is not
/// represented: a list item holds inline spans, never other blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichNode {
    /// A paragraph of inline content.
    Paragraph {
        /// Inline spans in source order
        spans: Vec<InlineSpan>,
    },

    /// A heading (levels 1-3).
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Inline spans in source order
        spans: Vec<InlineSpan>,
    },

    /// A single list item.
    ListItem {
        /// Whether the item belongs to a numbered list
        ordered: bool,
        /// Item number, present iff `ordered`
        index: Option<u32>,
        /// Inline spans in source order
        spans: Vec<InlineSpan>,
    },

    /// A horizontal rule with no content.
    Rule,
}

impl RichNode {
    /// Create a paragraph node from inline spans.
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        RichNode::Paragraph { spans }
    }

    /// Create a heading node, clamping the level to 1-3.
    pub fn heading(level: u8, spans: Vec<InlineSpan>) -> Self {
        RichNode::Heading {
            level: level.clamp(1, 3),
            spans,
        }
    }

    /// Create a bulleted list item.
    pub fn bullet_item(spans: Vec<InlineSpan>) -> Self {
        RichNode::ListItem {
            ordered: false,
            index: None,
            spans,
        }
    }

    /// Create a numbered list item.
    pub fn numbered_item(index: u32, spans: Vec<InlineSpan>) -> Self {
        RichNode::ListItem {
            ordered: true,
            index: Some(index),
            spans,
        }
    }

    /// Get the inline spans of this node, if it carries any.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        match self {
            RichNode::Paragraph { spans }
            | RichNode::Heading { spans, .. }
            | RichNode::ListItem { spans, .. } => Some(spans),
            RichNode::Rule => None,
        }
    }

    /// Get the visible text content of this node (markers stripped).
    pub fn plain_text(&self) -> String {
        self.spans()
            .map(|spans| spans.iter().map(InlineSpan::text).collect())
            .unwrap_or_default()
    }

    /// Check if this node is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, RichNode::Heading { .. })
    }

    /// Check if this node is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, RichNode::ListItem { .. })
    }
}

/// One run of inline-formatted text within a block.
///
/// Spans are non-overlapping and ordered; emphasis does not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Unformatted text, including any unmatched delimiters kept literal
    Plain(String),

    /// Bold text (`**` delimiters in source)
    Bold(String),

    /// Italic text (`*` delimiters in source)
    Italic(String),

    /// Underlined text (`__` delimiters in source)
    Underline(String),
}

impl InlineSpan {
    /// Get the text content of the span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::Underline(t) => t,
        }
    }

    /// Check if any styling is applied.
    pub fn is_styled(&self) -> bool {
        !matches!(self, InlineSpan::Plain(_))
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}
