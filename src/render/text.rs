//! Plain text rendering: visible content with markup markers stripped.

use crate::error::Result;
use crate::model::{RichDocument, RichNode, RULE_GLYPH};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// List items keep their markers, headings keep only their text, and the
/// placeholder document renders as an empty string.
pub fn to_text(doc: &RichDocument, options: &RenderOptions) -> Result<String> {
    if doc.is_placeholder() {
        return Ok(String::new());
    }

    let blocks: Vec<String> = doc
        .nodes
        .iter()
        .map(|node| match node {
            RichNode::ListItem {
                ordered: true,
                index,
                ..
            } => format!("{}. {}", index.unwrap_or(1), node.plain_text()),
            RichNode::ListItem { .. } => {
                format!("{} {}", options.list_marker, node.plain_text())
            }
            RichNode::Rule => RULE_GLYPH.to_string(),
            _ => node.plain_text(),
        })
        .collect();

    Ok(blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::transform;

    fn text(source: &str) -> String {
        to_text(&transform(source), &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_markers_stripped() {
        assert_eq!(text("**bold** and *italic*"), "bold and italic");
    }

    #[test]
    fn test_heading_text_only() {
        assert_eq!(text("## Findings"), "Findings");
    }

    #[test]
    fn test_list_markers_kept() {
        assert_eq!(text("1. first\n• second"), "1. first\n\n• second");
    }

    #[test]
    fn test_rule_glyph_kept() {
        assert_eq!(text("a\n\n⸻\n\nb"), "a\n\n⸻\n\nb");
    }

    #[test]
    fn test_placeholder_is_empty() {
        assert_eq!(text(""), "");
    }
}
