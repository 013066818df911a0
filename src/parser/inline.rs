//! Single-pass inline span scanner.
//!
//! Delimiter pairs are resolved in one pass over the block text with a
//! consumed-range mask, so a character inside an already-resolved span is
//! never reconsidered by a lower-priority rule. Matching is earliest-start,
//! non-greedy, and never crosses a newline; lone delimiters stay literal.

use crate::model::InlineSpan;

/// Delimiter kinds in fixed priority order.
const PRIORITY: [DelimKind; 3] = [DelimKind::Bold, DelimKind::Italic, DelimKind::Underline];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelimKind {
    Bold,
    Italic,
    Underline,
}

impl DelimKind {
    fn marker(self) -> &'static [char] {
        match self {
            DelimKind::Bold => &['*', '*'],
            DelimKind::Italic => &['*'],
            DelimKind::Underline => &['_', '_'],
        }
    }

    fn wrap(self, text: String) -> InlineSpan {
        match self {
            DelimKind::Bold => InlineSpan::Bold(text),
            DelimKind::Italic => InlineSpan::Italic(text),
            DelimKind::Underline => InlineSpan::Underline(text),
        }
    }
}

/// One resolved delimiter pair, in char positions.
struct SpanMatch {
    start: usize,
    content_start: usize,
    content_end: usize,
    end: usize,
    kind: DelimKind,
}

/// Resolve the inline spans of one block's text.
///
/// Text not captured by any delimiter pair is emitted as `Plain`, so the
/// concatenated span text always reproduces the block's visible content.
pub fn scan_inline(text: &str) -> Vec<InlineSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut consumed = vec![false; chars.len()];
    let mut matches: Vec<SpanMatch> = Vec::new();

    for kind in PRIORITY {
        collect_matches(&chars, &mut consumed, kind, &mut matches);
    }
    matches.sort_by_key(|m| m.start);

    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in &matches {
        if m.start > cursor {
            spans.push(InlineSpan::Plain(chars[cursor..m.start].iter().collect()));
        }
        spans.push(
            m.kind
                .wrap(chars[m.content_start..m.content_end].iter().collect()),
        );
        cursor = m.end;
    }
    if cursor < chars.len() {
        spans.push(InlineSpan::Plain(chars[cursor..].iter().collect()));
    }
    spans
}

/// Collect all non-overlapping matches of one delimiter kind, left to
/// right, skipping ranges already consumed by a higher-priority kind.
fn collect_matches(
    chars: &[char],
    consumed: &mut [bool],
    kind: DelimKind,
    out: &mut Vec<SpanMatch>,
) {
    let marker = kind.marker();
    let mlen = marker.len();
    let n = chars.len();

    let mut i = 0;
    // Room for opener, at least one content char, and closer
    while i + 2 * mlen < n {
        if !is_marker_at(chars, consumed, marker, i) {
            i += 1;
            continue;
        }

        // Walk right looking for the earliest closer; the content must
        // be at least one char, stay on one line, and clear of consumed
        // ranges.
        let mut k = i + mlen;
        let mut closer = None;
        while k + mlen <= n {
            if k > i + mlen && is_marker_at(chars, consumed, marker, k) {
                closer = Some(k);
                break;
            }
            if chars[k] == '\n' || consumed[k] {
                break;
            }
            k += 1;
        }

        match closer {
            Some(close) => {
                let end = close + mlen;
                for slot in &mut consumed[i..end] {
                    *slot = true;
                }
                out.push(SpanMatch {
                    start: i,
                    content_start: i + mlen,
                    content_end: close,
                    end,
                    kind,
                });
                i = end;
            }
            None => i += 1,
        }
    }
}

fn is_marker_at(chars: &[char], consumed: &[bool], marker: &[char], at: usize) -> bool {
    if at + marker.len() > chars.len() {
        return false;
    }
    marker
        .iter()
        .enumerate()
        .all(|(j, &m)| chars[at + j] == m && !consumed[at + j])
}
