//! Page-level types produced by the paginator.

use serde::{Deserialize, Serialize};

/// One fixed-capacity page of wrapped output lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Wrapped output lines in layout order
    pub lines: Vec<String>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Add a line to the page.
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the page content as a single newline-joined string.
    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }
}
