//! HTML rendering for the live preview surface.
//!
//! The element and class mapping is the preview collaborator's fixed rule
//! set; every node and span variant maps to exactly one element.

use crate::error::Result;
use crate::model::{InlineSpan, RichDocument, RichNode};

use super::RenderOptions;

/// Convert a document to preview HTML.
pub fn to_html(doc: &RichDocument, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML.
    pub fn render(&self, doc: &RichDocument) -> Result<String> {
        if doc.is_placeholder() {
            return Ok(format!(
                "<p class=\"text-gray-400 italic\">{}</p>",
                self.escape(&self.options.placeholder_text)
            ));
        }

        let mut output = String::new();
        for node in &doc.nodes {
            self.render_node(&mut output, node);
        }
        Ok(output.trim_end().to_string())
    }

    fn render_node(&self, output: &mut String, node: &RichNode) {
        match node {
            RichNode::Paragraph { spans } => {
                output.push_str("<p class=\"mb-4\">");
                self.render_spans(output, spans);
                output.push_str("</p>\n");
            }
            RichNode::Heading { level, spans } => {
                let (tag, class) = match level {
                    1 => ("h1", "text-2xl font-bold mb-4 mt-8"),
                    2 => ("h2", "text-xl font-semibold mb-3 mt-6"),
                    _ => ("h3", "text-lg font-semibold mb-2 mt-4"),
                };
                output.push_str(&format!("<{} class=\"{}\">", tag, class));
                self.render_spans(output, spans);
                output.push_str(&format!("</{}>\n", tag));
            }
            RichNode::ListItem {
                ordered: true,
                index,
                spans,
            } => {
                output.push_str(&format!(
                    "<div class=\"mb-2\"><strong>{}.</strong> ",
                    index.unwrap_or(1)
                ));
                self.render_spans(output, spans);
                output.push_str("</div>\n");
            }
            RichNode::ListItem { spans, .. } => {
                output.push_str("<li class=\"ml-4 mb-1\">");
                self.render_spans(output, spans);
                output.push_str("</li>\n");
            }
            RichNode::Rule => {
                output.push_str("<hr class=\"my-6 border-gray-300\" />\n");
            }
        }
    }

    fn render_spans(&self, output: &mut String, spans: &[InlineSpan]) {
        for span in spans {
            let text = self.escape(span.text());
            match span {
                InlineSpan::Plain(_) => output.push_str(&text),
                InlineSpan::Bold(_) => {
                    output.push_str(&format!("<strong>{}</strong>", text));
                }
                InlineSpan::Italic(_) => {
                    output.push_str(&format!("<em>{}</em>", text));
                }
                InlineSpan::Underline(_) => {
                    output.push_str(&format!("<u>{}</u>", text));
                }
            }
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_html {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape HTML-significant characters.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
