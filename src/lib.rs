//! # docfmt
//!
//! Lightweight markup formatting and page layout for plain-text documents.
//!
//! The library transforms a small markup dialect (asterisk emphasis,
//! `#` headings, bullet/numbered list prefixes, a rule glyph) into
//! structured rich-text nodes for preview rendering, and independently
//! lays the same source text out into fixed-size pages for export.
//!
//! ## Quick Start
//!
//! ```
//! use docfmt::{render, paginate, PageConstraints};
//!
//! fn main() -> docfmt::Result<()> {
//!     let source = "# Notes\n\nSome **bold** text.";
//!
//!     // Parse into rich-text nodes for the preview surface
//!     let doc = render(source);
//!     assert_eq!(doc.node_count(), 2);
//!
//!     // Lay out into pages for the export path
//!     let pages = paginate(source, &PageConstraints::new(80, 40))?;
//!     assert_eq!(pages.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Totality**: the transformer never fails; malformed markup degrades
//!   to plain text. Only pagination validates its configuration.
//! - **Purity**: both operations are pure functions of (text, config);
//!   no caching, no shared state, safe to call concurrently.
//! - **Agreement**: transformer and paginator consume the same dialect
//!   and agree on what counts as a line, a paragraph, and a break.

pub mod error;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{wrap_line, PageConstraints};
pub use model::{InlineSpan, Metadata, Page, RichDocument, RichNode, PLACEHOLDER_TEXT, RULE_GLYPH};
pub use normalize::{auto_format, NormalizeOptions, NormalizePreset, Normalizer};
pub use parser::MarkupTransformer;
pub use render::{JsonFormat, RenderOptions};
pub use stats::TextStats;

/// Parse markup source text into a rich-text document.
///
/// Total over any input; empty or whitespace-only text yields the
/// placeholder document.
pub fn render(source: &str) -> RichDocument {
    parser::transform(source)
}

/// Parse markup source text and render it to preview HTML.
pub fn render_html(source: &str) -> Result<String> {
    let doc = parser::transform(source);
    render::to_html(&doc, &RenderOptions::default())
}

/// Lay out source text into fixed-size pages for export.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] when either constraint bound
/// is zero.
pub fn paginate(source: &str, constraints: &PageConstraints) -> Result<Vec<Page>> {
    layout::paginate(source, constraints)
}

/// Compute character/word/line counts for source text.
pub fn text_stats(source: &str) -> TextStats {
    TextStats::of(source)
}

/// Builder for configuring formatting and rendering in one place.
///
/// # Example
///
/// ```
/// use docfmt::{Docfmt, NormalizePreset};
///
/// let html = Docfmt::new()
///     .with_normalize_preset(NormalizePreset::Standard)
///     .format("# Title\n\n\n\nBody   text.")
///     .to_html()?;
/// assert!(html.contains("<h1"));
/// # Ok::<(), docfmt::Error>(())
/// ```
pub struct Docfmt {
    normalize: Option<NormalizeOptions>,
    render_options: RenderOptions,
}

impl Docfmt {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            normalize: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Normalize source text before formatting.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize = Some(options);
        self
    }

    /// Normalize with a preset.
    pub fn with_normalize_preset(mut self, preset: NormalizePreset) -> Self {
        self.normalize = Some(NormalizeOptions::from_preset(preset));
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the unordered list marker for text output.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Format source text and return a result wrapper.
    pub fn format(self, source: &str) -> DocfmtResult {
        let source = match self.normalize {
            Some(ref options) => Normalizer::new(options.clone()).process(source),
            None => source.to_string(),
        };
        let document = parser::transform(&source);
        DocfmtResult {
            document,
            source,
            render_options: self.render_options,
        }
    }
}

impl Default for Docfmt {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of formatting one source string.
pub struct DocfmtResult {
    /// The parsed document
    pub document: RichDocument,
    /// The (possibly normalized) source text
    source: String,
    /// Render options to use
    render_options: RenderOptions,
}

impl DocfmtResult {
    /// Convert to preview HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Lay out the source text into pages.
    pub fn paginate(&self, constraints: &PageConstraints) -> Result<Vec<Page>> {
        layout::paginate(&self.source, constraints)
    }

    /// Compute stats over the source text.
    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.source)
    }

    /// Get the parsed document.
    pub fn document(&self) -> &RichDocument {
        &self.document
    }

    /// Get the source text as formatted.
    pub fn source(&self) -> &str {
        &self.source
    }
}
