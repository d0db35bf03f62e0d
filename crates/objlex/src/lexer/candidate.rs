use crate::lexer::TokenTypeId;
use crate::text::{TextRange, TextSize};

/// A match of one token type against one span of the text being lexed.
///
/// Candidates only hold offsets; the text they index is the input of the
/// `lex` call that produced them, which outlives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub token_type: TokenTypeId,
    pub range: TextRange,
}

impl Candidate {
    /// # Panics
    ///
    /// Panics in debug builds if `range` is empty.
    #[must_use]
    pub fn new(token_type: TokenTypeId, range: TextRange) -> Self {
        debug_assert!(!range.is_empty(), "empty candidate at {range}");
        Self { token_type, range }
    }

    #[must_use]
    pub const fn start(&self) -> TextSize {
        self.range.start()
    }

    #[must_use]
    pub const fn end(&self) -> TextSize {
        self.range.end()
    }

    #[must_use]
    pub const fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Whether this candidate is strictly longer than `other`.
    #[must_use]
    pub fn is_longer_than(&self, other: &Self) -> bool {
        self.len() > other.len()
    }

    /// Whether the two candidates share at least one byte.
    ///
    /// Candidates starting at the same offset always intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.range.overlaps(other.range)
    }
}
