//! Rendering options and configuration.

use crate::model::PLACEHOLDER_TEXT;

/// Options for rendering a rich-text document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character used for unordered list markers in text output
    pub list_marker: char,

    /// Escape HTML-significant characters in span text
    pub escape_html: bool,

    /// Text shown for the empty-input placeholder document
    pub placeholder_text: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable HTML escaping.
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Override the placeholder text.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '•',
            escape_html: true,
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_list_marker('-')
            .with_escape_html(false)
            .with_placeholder_text("nothing yet");

        assert_eq!(options.list_marker, '-');
        assert!(!options.escape_html);
        assert_eq!(options.placeholder_text, "nothing yet");
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.list_marker, '•');
        assert!(options.escape_html);
    }
}
