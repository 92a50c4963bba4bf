//! Priority-ordered span tokenizer
//!
//! Four passes run in a fixed priority order (comments, strings, numbers,
//! keywords) over a single occupied-range accumulator; a candidate that
//! overlaps anything already accepted is discarded, so the final span list
//! never contains intersecting ranges.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::ranges::OccupiedRanges;
use super::rules::{LexicalRules, rules_for};
use crate::types::{HighlightSpan, Language, TokenType};

/// One shared pattern for hex, binary, octal, decimal, float, and exponent
/// literals; whole-word enforcement happens via the byte-boundary check
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"0[xX][0-9a-fA-F]+|0[bB][01]+|0[oO][0-7]+|\d+\.\d+(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?|\d+(?:[eE][+-]?\d+)?",
    )
    .expect("static number pattern")
});

/// Annotates `code` with non-overlapping highlight spans for `language`.
///
/// Empty code, a blank language identifier, or an unknown language all yield
/// an empty list; none of these are errors. Spans come back sorted by start
/// ascending, ties by length ascending.
pub fn analyze(code: &str, language: &str) -> Vec<HighlightSpan> {
    match Language::from_str(language) {
        Ok(lang) => analyze_language(code, lang),
        Err(_) => Vec::new(),
    }
}

/// Typed entry point for callers that already hold a [`Language`]
pub fn analyze_language(code: &str, language: Language) -> Vec<HighlightSpan> {
    if code.is_empty() {
        return Vec::new();
    }

    let rules = rules_for(language);
    // ASCII lowercasing preserves byte offsets, so the search text and the
    // original line up position for position
    let search: Cow<'_, str> = if rules.case_insensitive {
        Cow::Owned(code.to_ascii_lowercase())
    } else {
        Cow::Borrowed(code)
    };

    let mut occupied = OccupiedRanges::new();
    let mut spans = Vec::new();

    collect_comments(code, &search, rules, &mut occupied, &mut spans);
    collect_strings(code, &search, rules, &mut occupied, &mut spans);
    collect_numbers(code, &mut occupied, &mut spans);
    collect_keywords(code, &search, rules, &mut occupied, &mut spans);

    spans.sort();
    spans
}

fn collect_comments(
    code: &str,
    search: &str,
    rules: &LexicalRules,
    occupied: &mut OccupiedRanges,
    spans: &mut Vec<HighlightSpan>,
) {
    if let Some((open, close)) = rules.block_comment {
        scan_delimited(code, search, open, close, |start, end| {
            let claimed = occupied.claim(start, end);
            if claimed {
                spans.push(HighlightSpan::new(start, end - start, TokenType::Comment));
            }
            claimed
        });
    }

    for prefix in rules.line_comments {
        let needle = lowercase_if(prefix, rules.case_insensitive);
        let mut i = 0;
        while i < search.len() {
            let Some(off) = search[i..].find(needle.as_ref()) else {
                break;
            };
            let start = i + off;
            let end = match code[start..].find('\n') {
                Some(nl) => start + nl,
                None => code.len(),
            };
            // Drop a trailing carriage return from the span
            let end = if end > start && code.as_bytes()[end - 1] == b'\r' {
                end - 1
            } else {
                end
            };
            if end > start && occupied.claim(start, end) {
                spans.push(HighlightSpan::new(start, end - start, TokenType::Comment));
                i = end;
            } else {
                i = start + 1;
            }
        }
    }
}

fn collect_strings(
    code: &str,
    search: &str,
    rules: &LexicalRules,
    occupied: &mut OccupiedRanges,
    spans: &mut Vec<HighlightSpan>,
) {
    // Raw/triple-quote styles span lines; scan them like block comments
    for (open, close) in rules.block_strings {
        scan_delimited(code, search, open, close, |start, end| {
            let claimed = occupied.claim(start, end);
            if claimed {
                spans.push(HighlightSpan::new(start, end - start, TokenType::String));
            }
            claimed
        });
    }

    let bytes = code.as_bytes();
    for &delim in rules.string_delimiters {
        let mut i = 0;
        while i < bytes.len() {
            let Some(off) = bytes[i..].iter().position(|&b| b == delim) else {
                break;
            };
            let start = i + off;
            // A new string starts only at an unoccupied position
            if !occupied.is_free(start, start + 1) {
                i = start + 1;
                continue;
            }
            let end = scan_string_end(bytes, start, delim, rules.string_escapes);
            if occupied.claim(start, end) {
                spans.push(HighlightSpan::new(start, end - start, TokenType::String));
                i = end;
            } else {
                i = start + 1;
            }
        }
    }
}

/// Walks from the opening delimiter to the end of a single-line string:
/// an unescaped matching delimiter (consumed), an unescaped line break
/// (not consumed), or end of input.
fn scan_string_end(bytes: &[u8], start: usize, delim: u8, escapes: bool) -> usize {
    let mut j = start + 1;
    while j < bytes.len() {
        let b = bytes[j];
        if escapes && b == b'\\' {
            // Backslash plus any character is consumed as a unit
            j += 2;
            continue;
        }
        if b == delim {
            return j + 1;
        }
        if b == b'\n' {
            return j;
        }
        j += 1;
    }
    bytes.len()
}

fn collect_numbers(code: &str, occupied: &mut OccupiedRanges, spans: &mut Vec<HighlightSpan>) {
    let bytes = code.as_bytes();
    for m in NUMBER_PATTERN.find_iter(code) {
        if is_whole_word(bytes, m.start(), m.end()) && occupied.claim(m.start(), m.end()) {
            spans.push(HighlightSpan::new(
                m.start(),
                m.end() - m.start(),
                TokenType::Number,
            ));
        }
    }
}

fn collect_keywords(
    code: &str,
    search: &str,
    rules: &LexicalRules,
    occupied: &mut OccupiedRanges,
    spans: &mut Vec<HighlightSpan>,
) {
    let bytes = code.as_bytes();
    for keyword in rules.keywords {
        let needle = lowercase_if(keyword, rules.case_insensitive);
        let mut i = 0;
        while i < search.len() {
            let Some(off) = search[i..].find(needle.as_ref()) else {
                break;
            };
            let start = i + off;
            let end = start + needle.len();
            if is_whole_word(bytes, start, end) && occupied.claim(start, end) {
                spans.push(HighlightSpan::new(start, end - start, TokenType::Keyword));
            }
            i = start + 1;
        }
    }
}

/// Left-to-right scan for `open`..`close` regions; an unterminated region
/// runs to end of input. The callback reports whether the region was kept.
fn scan_delimited(
    code: &str,
    search: &str,
    open: &str,
    close: &str,
    mut accept: impl FnMut(usize, usize) -> bool,
) {
    let mut i = 0;
    while i < search.len() {
        let Some(off) = search[i..].find(open) else {
            break;
        };
        let start = i + off;
        let body = start + open.len();
        let end = if body >= search.len() {
            code.len()
        } else {
            match search[body..].find(close) {
                Some(off) => body + off + close.len(),
                None => code.len(),
            }
        };
        // A rejected region may still contain a real opener past this one,
        // so resume right after the opener instead of skipping to `end`
        i = if accept(start, end) { end } else { body };
    }
}

/// Whole-word check: neighbors (or the string boundary) must not be
/// letter/digit/underscore. Non-ASCII bytes count as word bytes so spans
/// never cut into a multi-byte character.
fn is_whole_word(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
    let after_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
    before_ok && after_ok
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn lowercase_if(s: &str, lowercase: bool) -> Cow<'_, str> {
    if lowercase {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
