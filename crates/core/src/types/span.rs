use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The closed set of token categories the highlighter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Keyword,
    String,
    Comment,
    Number,
}

/// A highlighted region of the input
///
/// `start` and `length` are byte offsets into the UTF-8 input; `length` is
/// always positive. Within any one analysis result, no two spans' half-open
/// `[start, end)` ranges intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub length: usize,
    pub token_type: TokenType,
}

impl HighlightSpan {
    pub fn new(start: usize, length: usize, token_type: TokenType) -> Self {
        debug_assert!(length > 0);
        Self {
            start,
            length,
            token_type,
        }
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The slice of `code` this span covers
    pub fn text<'a>(&self, code: &'a str) -> &'a str {
        &code[self.start..self.end()]
    }
}

impl Ord for HighlightSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then(self.length.cmp(&other.length))
    }
}

impl PartialOrd for HighlightSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
