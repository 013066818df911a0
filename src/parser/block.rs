//! Line-anchored block pattern recognition.

use crate::model::RULE_GLYPH;
use regex::Regex;

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLine<'a> {
    /// Empty or whitespace-only line; separates paragraphs
    Blank,

    /// A line containing only the rule glyph
    Rule,

    /// `#`-prefixed heading line
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Text after the marker
        rest: &'a str,
    },

    /// `<digits>. ` numbered list item line
    Ordered {
        /// Parsed item number
        index: u32,
        /// Text after the marker
        rest: &'a str,
    },

    /// `•`/`·`-prefixed bullet list item line
    Bullet {
        /// Text after the marker
        rest: &'a str,
    },

    /// Anything else; accumulates into the current paragraph
    Text(&'a str),
}

/// Classifies source lines against the block-level patterns.
///
/// Patterns follow the markup dialect: rule and list markers tolerate
/// leading whitespace, heading markers must start the line.
pub struct BlockClassifier {
    rule: Regex,
    heading: Regex,
    ordered: Regex,
    bullet: Regex,
}

impl BlockClassifier {
    /// Create a classifier with the dialect's fixed patterns.
    pub fn new() -> Self {
        Self {
            rule: Regex::new(&format!(r"^\s*{RULE_GLYPH}\s*$")).unwrap(),
            heading: Regex::new(r"^(#{1,3}) (.+)$").unwrap(),
            ordered: Regex::new(r"^\s*(\d+)\.\s+(.+)$").unwrap(),
            bullet: Regex::new(r"^\s*[•·]\s+(.+)$").unwrap(),
        }
    }

    /// Classify a single source line.
    pub fn classify<'a>(&self, line: &'a str) -> BlockLine<'a> {
        if line.trim().is_empty() {
            return BlockLine::Blank;
        }
        if self.rule.is_match(line) {
            return BlockLine::Rule;
        }
        if let Some(caps) = self.heading.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
            let rest = caps.get(2).map_or("", |m| m.as_str());
            return BlockLine::Heading { level, rest };
        }
        if let Some(caps) = self.ordered.captures(line) {
            // Absurdly long digit runs fall back to paragraph text
            if let Ok(index) = caps.get(1).map_or("", |m| m.as_str()).parse::<u32>() {
                let rest = caps.get(2).map_or("", |m| m.as_str());
                return BlockLine::Ordered { index, rest };
            }
        }
        if let Some(caps) = self.bullet.captures(line) {
            let rest = caps.get(1).map_or("", |m| m.as_str());
            return BlockLine::Bullet { rest };
        }
        BlockLine::Text(line)
    }
}

impl Default for BlockClassifier {
    fn default() -> Self {
        Self::new()
    }
}
