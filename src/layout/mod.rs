//! Page layout: wrapping source text into fixed-size pages for export.
//!
//! Pagination operates on raw source lines, not on parsed rich nodes; the
//! export path draws plain wrapped text at a fixed line height per page.

mod wrap;

pub use wrap::wrap_line;

use crate::error::{Error, Result};
use crate::model::Page;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Source documents with at least this many lines wrap in parallel.
const PARALLEL_LINE_THRESHOLD: usize = 512;

/// Page geometry for pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConstraints {
    /// Maximum line width in characters
    pub max_width: usize,

    /// Maximum number of lines per page
    pub max_lines_per_page: usize,
}

impl PageConstraints {
    /// Create constraints with the given geometry.
    pub fn new(max_width: usize, max_lines_per_page: usize) -> Self {
        Self {
            max_width,
            max_lines_per_page,
        }
    }

    /// Set the maximum line width.
    pub fn with_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the maximum lines per page.
    pub fn with_lines(mut self, max_lines_per_page: usize) -> Self {
        self.max_lines_per_page = max_lines_per_page;
        self
    }

    /// Check that both bounds can produce valid output.
    pub fn validate(&self) -> Result<()> {
        if self.max_width < 1 {
            return Err(Error::InvalidConfiguration(
                "max_width must be at least 1".to_string(),
            ));
        }
        if self.max_lines_per_page < 1 {
            return Err(Error::InvalidConfiguration(
                "max_lines_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PageConstraints {
    /// 80 characters by 40 lines, the export path's standard geometry.
    fn default() -> Self {
        Self {
            max_width: 80,
            max_lines_per_page: 40,
        }
    }
}

/// Lay out source text into an ordered, non-empty sequence of pages.
///
/// Each source line is wrapped to `max_width`; wrapped lines fill pages
/// up to `max_lines_per_page` before a new page opens. Empty source
/// yields exactly one page with no lines.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] when either bound is zero.
pub fn paginate(source: &str, constraints: &PageConstraints) -> Result<Vec<Page>> {
    constraints.validate()?;

    let mut pages = Vec::new();
    let mut current = Page::new(1);

    if !source.is_empty() {
        for line in wrap_source(source, constraints.max_width) {
            if current.line_count() == constraints.max_lines_per_page {
                log::debug!("page {} full, opening page {}", current.number, current.number + 1);
                let next = Page::new(current.number + 1);
                pages.push(std::mem::replace(&mut current, next));
            }
            current.push_line(line);
        }
    }

    pages.push(current);
    Ok(pages)
}

/// Wrap every source line, preserving source order.
fn wrap_source(source: &str, max_width: usize) -> Vec<String> {
    let lines: Vec<&str> = source.split('\n').collect();
    let wrapped: Vec<Vec<String>> = if lines.len() >= PARALLEL_LINE_THRESHOLD {
        lines
            .par_iter()
            .map(|line| wrap_line(line, max_width))
            .collect()
    } else {
        lines.iter().map(|line| wrap_line(line, max_width)).collect()
    };
    wrapped.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_single_empty_page() {
        let pages = paginate("", &PageConstraints::default()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_invalid_width_rejected() {
        let err = paginate("text", &PageConstraints::new(0, 40)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_invalid_line_count_rejected() {
        let err = paginate("text", &PageConstraints::new(80, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_single_short_line() {
        let pages = paginate("hello", &PageConstraints::new(80, 40)).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines, vec!["hello"]);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let pages = paginate("a\n\nb", &PageConstraints::new(80, 40)).unwrap();
        assert_eq!(pages[0].lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_page_break_on_overflow() {
        let source = "a\nb\nc\nd\ne";
        let pages = paginate(source, &PageConstraints::new(10, 2)).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines, vec!["a", "b"]);
        assert_eq!(pages[1].lines, vec!["c", "d"]);
        assert_eq!(pages[2].lines, vec!["e"]);
        let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_wrapped_line_splits_across_pages() {
        // One source line wrapping to max_lines + 1 output lines spans
        // exactly two pages, split at the page cap.
        let constraints = PageConstraints::new(2, 3);
        let source = "aa bb cc dd"; // wraps to 4 lines at width 2
        let pages = paginate(source, &constraints).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].line_count(), 3);
        assert_eq!(pages[1].line_count(), 1);
    }

    #[test]
    fn test_line_cap_and_width_hold() {
        let source = "the quick brown fox jumps over the lazy dog\n".repeat(20);
        let constraints = PageConstraints::new(12, 5);
        for page in paginate(&source, &constraints).unwrap() {
            assert!(page.line_count() <= 5);
            for line in &page.lines {
                assert!(line.chars().count() <= 12);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let source = "alpha beta gamma\ndelta\n\nepsilon zeta";
        let constraints = PageConstraints::new(7, 3);
        assert_eq!(
            paginate(source, &constraints).unwrap(),
            paginate(source, &constraints).unwrap()
        );
    }
}
