//! Markup-to-rich-text transformation.
//!
//! The transformer is a total function over any input string: malformed
//! or partial markup degrades to plain text instead of failing.

mod block;
mod inline;

pub use block::{BlockClassifier, BlockLine};
pub use inline::scan_inline;

use crate::model::{RichDocument, RichNode};

/// Parses markup source text into a sequence of block-level rich nodes.
///
/// Holds only compiled patterns; each call to [`transform`](Self::transform)
/// derives a fresh document from its input.
pub struct MarkupTransformer {
    classifier: BlockClassifier,
}

impl MarkupTransformer {
    /// Create a transformer for the fixed markup dialect.
    pub fn new() -> Self {
        Self {
            classifier: BlockClassifier::new(),
        }
    }

    /// Transform source text into a rich-text document.
    ///
    /// Line-anchored blocks (rules, headings, list items) consume single
    /// lines; everything else accumulates into paragraphs separated by
    /// blank lines. Empty or whitespace-only input yields the placeholder
    /// document.
    pub fn transform(&self, source: &str) -> RichDocument {
        let mut doc = RichDocument::new();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in source.split('\n') {
            match self.classifier.classify(line) {
                BlockLine::Blank => flush_paragraph(&mut doc, &mut paragraph),
                BlockLine::Rule => {
                    flush_paragraph(&mut doc, &mut paragraph);
                    doc.push(RichNode::Rule);
                }
                BlockLine::Heading { level, rest } => {
                    flush_paragraph(&mut doc, &mut paragraph);
                    doc.push(RichNode::heading(level, scan_inline(rest)));
                }
                BlockLine::Ordered { index, rest } => {
                    flush_paragraph(&mut doc, &mut paragraph);
                    doc.push(RichNode::numbered_item(index, scan_inline(rest)));
                }
                BlockLine::Bullet { rest } => {
                    flush_paragraph(&mut doc, &mut paragraph);
                    doc.push(RichNode::bullet_item(scan_inline(rest)));
                }
                BlockLine::Text(_) => paragraph.push(line),
            }
        }
        flush_paragraph(&mut doc, &mut paragraph);

        if doc.nodes.is_empty() {
            log::debug!("source has no visible content, emitting placeholder");
            return RichDocument::placeholder();
        }
        doc
    }
}

impl Default for MarkupTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Close the current paragraph buffer, if any, into a `Paragraph` node.
/// Interior newlines are preserved; wrapping is the paginator's job.
fn flush_paragraph(doc: &mut RichDocument, paragraph: &mut Vec<&str>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join("\n");
    paragraph.clear();
    doc.push(RichNode::paragraph(scan_inline(&text)));
}

/// Transform source text with a fresh transformer.
pub fn transform(source: &str) -> RichDocument {
    MarkupTransformer::new().transform(source)
}
