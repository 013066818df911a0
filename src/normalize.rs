//! Source text normalization (the editor's auto-format action).
//!
//! Runs before transformation/pagination when requested; the core never
//! applies it implicitly.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalization preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePreset {
    /// Unicode NFC normalization only
    Minimal,
    /// NFC + whitespace cleanup, paragraph breaks preserved
    #[default]
    Standard,
}

/// Options for source text normalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Collapse runs of spaces/tabs to a single space
    pub collapse_spaces: bool,

    /// Trim spaces/tabs at line edges (newlines untouched, so blank-line
    /// paragraph separators survive)
    pub trim_line_edges: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl NormalizeOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        match preset {
            NormalizePreset::Minimal => Self::minimal(),
            NormalizePreset::Standard => Self::standard(),
        }
    }

    /// Minimal normalization options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            collapse_spaces: false,
            trim_line_edges: false,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard normalization options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            collapse_spaces: true,
            trim_line_edges: true,
            // One blank line at most between paragraphs
            max_consecutive_newlines: 2,
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Regex-driven normalization passes over source text.
pub struct Normalizer {
    options: NormalizeOptions,
    space_runs: Regex,
    leading_edges: Regex,
    trailing_edges: Regex,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            space_runs: Regex::new(r"[ \t]{2,}").unwrap(),
            leading_edges: Regex::new(r"(?m)^[ \t]+").unwrap(),
            trailing_edges: Regex::new(r"(?m)[ \t]+$").unwrap(),
        }
    }

    /// Apply all configured passes to the text.
    pub fn process(&self, text: &str) -> String {
        let mut output = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.collapse_spaces {
            output = self.space_runs.replace_all(&output, " ").into_owned();
        }
        if self.options.trim_line_edges {
            output = self.leading_edges.replace_all(&output, "").into_owned();
            output = self.trailing_edges.replace_all(&output, "").into_owned();
        }
        // Newline collapse runs last so lines blanked by edge trimming
        // count toward the run.
        if self.options.max_consecutive_newlines > 0 {
            let max = self.options.max_consecutive_newlines as usize;
            let pattern = format!(r"\n{{{},}}", max + 1);
            let re = Regex::new(&pattern).unwrap();
            output = re.replace_all(&output, "\n".repeat(max)).into_owned();
        }

        output
    }
}

/// Normalize source text with the standard preset.
pub fn auto_format(source: &str) -> String {
    Normalizer::new(NormalizeOptions::standard()).process(source)
}
