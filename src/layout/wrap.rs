//! Greedy line wrapping.

/// Wrap one source line into output lines of at most `max_width` chars.
///
/// Breaks at the last whitespace boundary at or before the width limit;
/// the breaking whitespace character is consumed. A single token longer
/// than `max_width` is force-broken mid-token. Width is measured in
/// `char`s. An empty line wraps to one empty output line.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    debug_assert!(max_width >= 1);

    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= max_width {
        return vec![line.to_string()];
    }

    let n = chars.len();
    let mut out = Vec::new();
    let mut start = 0;

    while n - start > max_width {
        // A whitespace char sitting just past the slice is also a valid
        // boundary: the slice before it fills the width exactly.
        let limit = start + max_width;
        let boundary = (start..=limit).rev().find(|&i| chars[i].is_whitespace());
        match boundary {
            Some(ws) if ws > start => {
                out.push(chars[start..ws].iter().collect());
                start = ws + 1;
            }
            _ => {
                // Single token wider than the page, force a break
                out.push(chars[start..limit].iter().collect());
                start = limit;
            }
        }
    }
    out.push(chars[start..].iter().collect());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        assert_eq!(wrap_line("hello", 10), vec!["hello"]);
        assert_eq!(wrap_line("", 10), vec![""]);
    }

    #[test]
    fn test_exact_width_unchanged() {
        assert_eq!(wrap_line("abcde", 5), vec!["abcde"]);
    }

    #[test]
    fn test_breaks_at_whitespace() {
        assert_eq!(wrap_line("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_line("alpha beta", 5), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_boundary_just_past_width() {
        // The space sits at index 5, one past a width-5 slice
        assert_eq!(wrap_line("abcde fgh", 5), vec!["abcde", "fgh"]);
    }

    #[test]
    fn test_force_break_long_token() {
        assert_eq!(wrap_line("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_long_token_then_words() {
        assert_eq!(
            wrap_line("abcdefgh x y", 4),
            vec!["abcd", "efgh", "x y"]
        );
    }

    #[test]
    fn test_all_lines_within_width() {
        let text = "the quick brown fox jumps over the lazy dog near the riverbank";
        for width in 1..=20 {
            for piece in wrap_line(text, width) {
                assert!(
                    piece.chars().count() <= width,
                    "width {}: {:?} too wide",
                    width,
                    piece
                );
            }
        }
    }

    #[test]
    fn test_wrap_preserves_content_words() {
        let text = "alpha beta gamma delta";
        let wrapped = wrap_line(text, 7).join(" ");
        assert_eq!(wrapped, text);
    }

    #[test]
    fn test_multibyte_width_counted_in_chars() {
        // Five two-byte chars fit a width-5 line
        assert_eq!(wrap_line("ééééé", 5), vec!["ééééé"]);
        assert_eq!(wrap_line("éééééé", 5), vec!["ééééé", "é"]);
    }
}
