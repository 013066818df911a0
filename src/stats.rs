//! Character, word, and line counts for the editor's status display.

use serde::{Deserialize, Serialize};

/// Counts derived from one source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Total characters, whitespace included
    pub characters: u32,

    /// Whitespace-separated tokens
    pub words: u32,

    /// Source lines (0 for empty input)
    pub lines: u32,
}

impl TextStats {
    /// Compute stats for the given source text.
    pub fn of(source: &str) -> Self {
        let lines = if source.is_empty() {
            0
        } else {
            source.split('\n').count() as u32
        };
        Self {
            characters: source.chars().count() as u32,
            words: source.split_whitespace().count() as u32,
            lines,
        }
    }
}
